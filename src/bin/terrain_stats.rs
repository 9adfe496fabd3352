//! Generate many maps in parallel and compare terrain frequencies
//! against the generation weights.

use std::collections::HashMap;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tile_map_viewer::{Terrain, TileGrid, domain::TERRAIN_ROLL_RANGE};

#[derive(Debug, Parser)]
#[command(about = "Report terrain frequencies over many generated maps")]
struct Cli {
    /// Number of maps to generate
    #[arg(long, default_value_t = 1000)]
    trials: u64,

    /// Seed of the first map; map `i` uses `seed + i`
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = 30)]
    width: usize,

    #[arg(long, default_value_t = 20)]
    height: usize,
}

fn merge(mut a: HashMap<Terrain, usize>, b: HashMap<Terrain, usize>) -> HashMap<Terrain, usize> {
    for (terrain, count) in b {
        *a.entry(terrain).or_insert(0) += count;
    }
    a
}

/// Share of rolls that map to `terrain`
fn expected_share(terrain: Terrain) -> f64 {
    let hits = (0..TERRAIN_ROLL_RANGE)
        .filter(|&roll| Terrain::from_roll(roll) == terrain)
        .count();
    hits as f64 / f64::from(TERRAIN_ROLL_RANGE)
}

/// Tiles generated across all trials, at least one so shares stay finite
fn total_cells(trials: u64, width: usize, height: usize) -> f64 {
    (trials as f64 * width as f64 * height as f64).max(1.0)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let start = std::time::Instant::now();

    let totals = (0..cli.trials)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(cli.seed.wrapping_add(i));
            TileGrid::generate(cli.width, cli.height, 64, &mut rng).terrain_counts()
        })
        .reduce(HashMap::new, merge);

    let cells = total_cells(cli.trials, cli.width, cli.height);
    info!(
        trials = cli.trials,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "generation finished"
    );

    println!("{:<14} {:>10} {:>9} {:>9}", "terrain", "tiles", "observed", "expected");
    for terrain in Terrain::ALL {
        let count = totals.get(&terrain).copied().unwrap_or(0);
        println!(
            "{:<14} {:>10} {:>8.2}% {:>8.2}%",
            format!("{terrain:?}"),
            count,
            count as f64 / cells * 100.0,
            expected_share(terrain) * 100.0
        );
    }
}
