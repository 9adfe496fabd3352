use macroquad::prelude::{KeyCode, MouseButton};
use rand::Rng;
use tracing::{debug, info};

use crate::application::{CursorCoords, PanDirection, Viewport, ZoomDirection};
use crate::config::ViewerConfig;
use crate::domain::{TexturePack, Tile, TileGrid};
use crate::input::InputEvent;

/// Held pan keys, sampled once per tick
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct PanIntent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl PanIntent {
    pub fn set(&mut self, direction: PanDirection, active: bool) {
        match direction {
            PanDirection::Left => self.left = active,
            PanDirection::Right => self.right = active,
            PanDirection::Up => self.up = active,
            PanDirection::Down => self.down = active,
        }
    }

    /// Active directions in the order they are applied
    pub fn active(&self) -> impl Iterator<Item = PanDirection> {
        [
            (self.left, PanDirection::Left),
            (self.right, PanDirection::Right),
            (self.down, PanDirection::Down),
            (self.up, PanDirection::Up),
        ]
        .into_iter()
        .filter_map(|(on, direction)| on.then_some(direction))
    }
}

/// What lies under a window position
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TileInfo {
    pub coords: CursorCoords,
    pub tile: Option<Tile>,
}

/// ViewerState coordinates the map, the camera and the input intents.
/// Input events only record intents or trigger an immediate zoom;
/// `tick` applies the intents once per frame.
pub struct ViewerState {
    pub grid: TileGrid,
    pub viewport: Viewport,
    pub pan: PanIntent,
    pub texture_pack: TexturePack,
    /// Last known cursor position in window pixels
    pub cursor: Option<(f64, f64)>,
    pub quit_requested: bool,
}

impl ViewerState {
    /// Generate a map and frame it according to `config`
    pub fn new<R: Rng + ?Sized>(config: &ViewerConfig, rng: &mut R) -> Self {
        let grid = TileGrid::generate(config.map_width, config.map_height, config.tile_size, rng);
        let (game_w, game_h) = config.game_screen_size();
        let viewport = Viewport::new(
            (f64::from(config.window_width), f64::from(config.window_height)),
            grid.world_size(),
        )
        .with_game_screen(f64::from(game_w), f64::from(game_h))
        .with_window_offset(f64::from(config.window_x_offset), f64::from(config.window_y_offset))
        .with_camera_speed(config.camera_speed);

        info!(
            width = config.map_width,
            height = config.map_height,
            tile_size = config.tile_size,
            "generated map"
        );

        Self {
            grid,
            viewport,
            pan: PanIntent::default(),
            texture_pack: config.texture_pack,
            cursor: None,
            quit_requested: false,
        }
    }

    /// React to a single input event
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyChanged { key, pressed } => self.handle_key(key, pressed),
            InputEvent::MouseClicked { button, x, y } => {
                self.cursor = Some((x, y));
                if button == MouseButton::Left {
                    let info = self.inspect((x, y));
                    let (world_x, world_y) = info.coords.world;
                    match info.tile {
                        Some(tile) => info!(
                            world_x,
                            world_y,
                            tile = ?tile.position(),
                            terrain = ?tile.terrain(),
                            movement_cost = tile.movement_cost(),
                            capture_point = tile.is_capture_point(),
                            "clicked"
                        ),
                        None => info!(world_x, world_y, "clicked outside the map"),
                    }
                }
            }
            InputEvent::CursorMoved { x, y } => self.cursor = Some((x, y)),
            InputEvent::Scrolled { delta } => {
                let direction = if delta > 0.0 {
                    ZoomDirection::In
                } else if delta < 0.0 {
                    ZoomDirection::Out
                } else {
                    return;
                };
                self.viewport.zoom(self.cursor, direction);
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        let direction = match key {
            KeyCode::Left => Some(PanDirection::Left),
            KeyCode::Right => Some(PanDirection::Right),
            KeyCode::Up => Some(PanDirection::Up),
            KeyCode::Down => Some(PanDirection::Down),
            _ => None,
        };
        if let Some(direction) = direction {
            self.pan.set(direction, pressed);
            return;
        }

        match (key, pressed) {
            (KeyCode::Escape, false) => {
                info!("close requested");
                self.quit_requested = true;
            }
            (KeyCode::Minus | KeyCode::Equal, true) => info!(?key, "zoom key pressed"),
            (KeyCode::T, true) => {
                self.texture_pack = self.texture_pack.toggled();
                info!(pack = %self.texture_pack, "switched texture pack");
            }
            _ => debug!(?key, pressed, "ignored key"),
        }
    }

    /// Advance the camera by `elapsed` pan ticks
    pub fn tick(&mut self, elapsed: f64) {
        for direction in self.pan.active() {
            self.viewport.pan(direction, elapsed);
        }
    }

    /// Coordinates and tile under a window position
    pub fn inspect(&self, window_pos: (f64, f64)) -> TileInfo {
        let coords = self.viewport.cursor_coords(window_pos);
        TileInfo {
            coords,
            tile: self.grid.tile_at_world(coords.world.0, coords.world.1).copied(),
        }
    }

    /// Tile under the last known cursor position
    pub fn hovered(&self) -> Option<TileInfo> {
        self.cursor.map(|pos| self.inspect(pos))
    }
}
