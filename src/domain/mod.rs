mod terrain;
mod textures;
mod tile;
mod tile_grid;

pub use terrain::{
    IMPASSABLE, TERRAIN_ROLL_RANGE, Terrain, TexturePack, is_capture_point, movement_cost, texture_file,
};
pub use textures::TextureTable;
pub use tile::{QUAD_INDICES, QUAD_TEX_COORDS, Quad, Tile};
pub use tile_grid::TileGrid;
