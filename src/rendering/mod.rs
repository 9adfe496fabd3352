mod surface;

pub use surface::{MacroquadSurface, draw_hud, load_textures, placeholder_rgba};

use crate::application::{Projection, ProjectionMode, ViewerState};
use crate::domain::{Quad, TextureTable};

/// Drawing backend the map is rendered through
pub trait RenderSurface {
    type Texture;

    /// Replace the active orthographic projection
    fn set_projection(&mut self, projection: Projection);

    /// Texture used by following quads
    fn bind_texture(&mut self, texture: &Self::Texture);

    /// Draw one textured quad with the shared index pattern
    fn draw_quad(&mut self, quad: Quad);
}

/// Draw the visible part of the map through the camera projection.
///
/// A tile whose terrain has no texture in the table binds nothing and is
/// drawn with whatever texture was bound before it.
pub fn draw_map<S: RenderSurface>(surface: &mut S, state: &ViewerState, textures: &TextureTable<S::Texture>) {
    let projection = state.viewport.project(ProjectionMode::RelativeCamera);
    surface.set_projection(projection);

    let (left, top, right, bottom) = projection.bounds();
    for tile in state.grid.tiles_in_rect(left, top, right, bottom) {
        if let Some(texture) = textures.get(state.texture_pack, tile.terrain().id()) {
            surface.bind_texture(texture);
        }
        let (x, y) = tile.position();
        surface.draw_quad(state.grid.quad_of(x, y));
    }
}

/// Overlay lines describing the camera and the tile under the cursor
pub fn hud_lines(state: &ViewerState) -> Vec<String> {
    let (view_x, view_y) = state.viewport.view();
    let mut lines = vec![
        format!("Zoom: {:.2}x", state.viewport.zoom_level()),
        format!("View: {view_x:.0}, {view_y:.0}"),
        format!("Pack: {}", state.texture_pack),
    ];

    if let Some(tile) = state.hovered().and_then(|info| info.tile) {
        let (x, y) = tile.position();
        lines.push(format!(
            "Tile {x},{y}: {:?} (cost {}{})",
            tile.terrain(),
            tile.movement_cost(),
            if tile.is_capture_point() { ", capture point" } else { "" }
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{PanDirection, ZoomDirection};
    use crate::config::ViewerConfig;
    use crate::domain::{Terrain, TexturePack, texture_file};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[derive(Debug, PartialEq)]
    enum Call {
        Projection(Projection),
        Bind(&'static str),
        Quad(Quad),
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
    }

    impl RenderSurface for RecordingSurface {
        type Texture = &'static str;

        fn set_projection(&mut self, projection: Projection) {
            self.calls.push(Call::Projection(projection));
        }

        fn bind_texture(&mut self, texture: &Self::Texture) {
            self.calls.push(Call::Bind(*texture));
        }

        fn draw_quad(&mut self, quad: Quad) {
            self.calls.push(Call::Quad(quad));
        }
    }

    fn state() -> ViewerState {
        ViewerState::new(&ViewerConfig::default(), &mut StdRng::seed_from_u64(21))
    }

    fn full_table() -> TextureTable<&'static str> {
        let mut table = TextureTable::new();
        for pack in TexturePack::ALL {
            for terrain in Terrain::ALL {
                table.insert(pack, terrain, texture_file(pack, terrain));
            }
        }
        table
    }

    #[test]
    fn test_projection_set_first() {
        let state = state();
        let mut surface = RecordingSurface::default();
        draw_map(&mut surface, &state, &full_table());
        assert_eq!(
            surface.calls.first(),
            Some(&Call::Projection(state.viewport.project(ProjectionMode::RelativeCamera)))
        );
    }

    #[test]
    fn test_only_visible_tiles_drawn() {
        let state = state();
        let mut surface = RecordingSurface::default();
        draw_map(&mut surface, &state, &full_table());
        let quads = surface.calls.iter().filter(|c| matches!(c, Call::Quad(_))).count();
        // 840x640 view over 64px tiles: columns 0..14, rows 0..10
        assert_eq!(quads, 14 * 10);
    }

    #[test]
    fn test_each_quad_bound_to_its_terrain() {
        let state = state();
        let mut surface = RecordingSurface::default();
        draw_map(&mut surface, &state, &full_table());

        let mut bound = None;
        for call in &surface.calls {
            match call {
                Call::Bind(name) => bound = Some(*name),
                Call::Quad(quad) => {
                    let tile = state.grid.tile_at_world(quad.left, quad.top).unwrap();
                    assert_eq!(bound, Some(texture_file(TexturePack::Plains, tile.terrain())));
                }
                Call::Projection(_) => {}
            }
        }
    }

    #[test]
    fn test_missing_texture_binds_nothing() {
        let state = state();
        let mut surface = RecordingSurface::default();
        draw_map(&mut surface, &state, &TextureTable::new());
        assert!(!surface.calls.iter().any(|c| matches!(c, Call::Bind(_))));
        assert!(surface.calls.iter().any(|c| matches!(c, Call::Quad(_))));
    }

    #[test]
    fn test_drawn_tiles_follow_camera() {
        let mut state = state();
        state.viewport.zoom(None, ZoomDirection::In);
        for _ in 0..200 {
            state.viewport.pan(PanDirection::Right, 1.0);
            state.viewport.pan(PanDirection::Down, 1.0);
        }
        let (left, top, right, bottom) = state.viewport.project(ProjectionMode::RelativeCamera).bounds();

        let mut surface = RecordingSurface::default();
        draw_map(&mut surface, &state, &full_table());
        for call in &surface.calls {
            if let Call::Quad(quad) = call {
                assert!(quad.right > left && quad.left < right);
                assert!(quad.bottom > top && quad.top < bottom);
            }
        }
    }

    #[test]
    fn test_hud_lines() {
        let mut state = state();
        let lines = hud_lines(&state);
        assert_eq!(lines[0], "Zoom: 1.00x");
        assert_eq!(lines[1], "View: 0, 0");
        assert_eq!(lines[2], "Pack: plains");
        assert_eq!(lines.len(), 3);

        state.cursor = Some((10.0, 10.0));
        let lines = hud_lines(&state);
        assert_eq!(lines.len(), 4);
        assert!(lines[3].starts_with("Tile 0,0:"));
    }
}
