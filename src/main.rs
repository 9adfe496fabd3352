use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::{BLACK, Conf, clear_background, get_frame_time, next_frame};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tile_map_viewer::{
    TexturePack, ViewerConfig, ViewerState, input,
    rendering::{self, MacroquadSurface},
};

/// Pan ticks per second of wall time
const NOMINAL_TICK_RATE: f64 = 60.0;

#[derive(Debug, Parser)]
#[command(name = "tile_map_viewer", about = "Pan and zoom around a generated tile map")]
struct Cli {
    /// YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Map seed, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Texture pack (plains or wilds), overrides the config file
    #[arg(long)]
    texture_pack: Option<TexturePack>,
}

fn window_conf(config: &ViewerConfig) -> Conf {
    Conf {
        window_title: "Gemina Map".to_owned(),
        window_width: config.window_width as i32,
        window_height: config.window_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => ViewerConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(pack) = cli.texture_pack {
        config.texture_pack = pack;
    }
    config.validate().context("invalid configuration")?;

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, pack = %config.texture_pack, "starting viewer");

    macroquad::Window::from_config(window_conf(&config), run(config, seed));
    Ok(())
}

async fn run(config: ViewerConfig, seed: u64) {
    let mut state = ViewerState::new(&config, &mut StdRng::seed_from_u64(seed));
    let textures = rendering::load_textures(&config.asset_dir).await;
    let mut surface = MacroquadSurface::new();

    loop {
        if state.quit_requested {
            break;
        }

        for event in input::poll_events(state.cursor) {
            state.handle(event);
        }
        state.tick(f64::from(get_frame_time()) * NOMINAL_TICK_RATE);

        clear_background(BLACK);
        rendering::draw_map(&mut surface, &state, &textures);
        rendering::draw_hud(&state);

        next_frame().await;
    }
    info!("viewer closed");
}
