use std::collections::HashMap;

use rand::Rng;

use super::{Quad, TERRAIN_ROLL_RANGE, Terrain, Tile};

/// TileGrid holds the terrain map.
/// Every cell is populated at generation time and never changes afterwards.
pub struct TileGrid {
    width: usize,
    height: usize,
    tile_size: u32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Fill a `width` x `height` grid with weighted random terrain.
    /// Columns are filled left to right, each column top to bottom, one roll per
    /// cell, so a given rng stream always yields the same map.
    pub fn generate<R: Rng + ?Sized>(width: usize, height: usize, tile_size: u32, rng: &mut R) -> Self {
        let mut terrain = vec![Terrain::Grass; width * height];
        for x in 0..width {
            for y in 0..height {
                terrain[y * width + x] = Terrain::from_roll(rng.random_range(0..TERRAIN_ROLL_RANGE));
            }
        }

        let tiles = terrain
            .into_iter()
            .enumerate()
            .map(|(idx, t)| Tile::new(t, idx % width.max(1), idx / width.max(1)))
            .collect();

        Self {
            width,
            height,
            tile_size,
            tiles,
        }
    }

    /// Grid dimensions in tiles
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// World size in pixels
    pub fn world_size(&self) -> (f64, f64) {
        let size = f64::from(self.tile_size);
        (self.width as f64 * size, self.height as f64 * size)
    }

    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Tile at grid position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<&Tile> {
        (x < self.width && y < self.height).then(|| &self.tiles[self.get_index(x, y)])
    }

    /// Tile containing a world-space point
    pub fn tile_at_world(&self, world_x: f64, world_y: f64) -> Option<&Tile> {
        if world_x < 0.0 || world_y < 0.0 {
            return None;
        }
        let size = f64::from(self.tile_size);
        self.get((world_x / size) as usize, (world_y / size) as usize)
    }

    /// Quad for grid cell `(x, y)`; pure arithmetic, valid for any coordinates
    pub fn quad_of(&self, x: usize, y: usize) -> Quad {
        Quad::for_cell(x, y, self.tile_size)
    }

    /// Iterate over all tiles, row by row
    pub fn iter(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    /// Tiles intersecting a world rectangle, row by row
    pub fn tiles_in_rect(&self, left: f64, top: f64, right: f64, bottom: f64) -> impl Iterator<Item = &Tile> + '_ {
        let size = f64::from(self.tile_size);
        let span = |lo: f64, hi: f64, len: usize| {
            let start = (lo / size).floor().max(0.0) as usize;
            let end = ((hi / size).ceil().max(0.0) as usize).min(len);
            start.min(end)..end
        };
        let xs = span(left.min(right), left.max(right), self.width);
        let ys = span(top.min(bottom), top.max(bottom), self.height);

        ys.flat_map(move |y| xs.clone().map(move |x| (x, y)))
            .map(move |(x, y)| &self.tiles[self.get_index(x, y)])
    }

    /// Number of tiles per terrain
    pub fn terrain_counts(&self) -> HashMap<Terrain, usize> {
        self.tiles.iter().fold(HashMap::new(), |mut counts, tile| {
            *counts.entry(tile.terrain()).or_insert(0) += 1;
            counts
        })
    }
}
