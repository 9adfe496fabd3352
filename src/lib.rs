// Domain layer - terrain, tiles and the generated map
pub mod domain;

// Application layer - camera math and per-frame coordination
pub mod application;

// Infrastructure layer - configuration, input polling, rendering
pub mod config;
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::{ViewerState, Viewport};
pub use config::{ConfigError, ViewerConfig};
pub use domain::{Terrain, TexturePack, Tile, TileGrid};
