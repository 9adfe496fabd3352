use std::path::Path;

use macroquad::camera::{Camera, set_camera};
use macroquad::models::{Mesh, Vertex, draw_mesh};
use macroquad::prelude::*;
use macroquad::texture::RenderPass;
use tracing::{info, warn};

use super::{RenderSurface, hud_lines};
use crate::application::{Projection, ProjectionMode, ViewerState};
use crate::domain::{QUAD_INDICES, QUAD_TEX_COORDS, Quad, Terrain, TexturePack, TextureTable, texture_file};

/// Orthographic camera built straight from projection bounds
struct OrthoCamera(Projection);

impl Camera for OrthoCamera {
    fn matrix(&self) -> Mat4 {
        let p = self.0;
        Mat4::orthographic_rh_gl(
            p.left as f32,
            p.right as f32,
            p.bottom as f32,
            p.top as f32,
            p.near as f32,
            p.far as f32,
        )
    }

    fn depth_enabled(&self) -> bool {
        false
    }

    fn render_pass(&self) -> Option<RenderPass> {
        None
    }

    fn viewport(&self) -> Option<(i32, i32, i32, i32)> {
        None
    }
}

/// Render surface drawing through macroquad.
/// One quad mesh is created up front; each draw rewrites its four vertex positions.
pub struct MacroquadSurface {
    quad: Mesh,
}

impl MacroquadSurface {
    pub fn new() -> Self {
        let vertices = QUAD_TEX_COORDS
            .iter()
            .map(|&(u, v)| Vertex::new(0.0, 0.0, 0.0, u, v, WHITE))
            .collect();
        Self {
            quad: Mesh {
                vertices,
                indices: QUAD_INDICES.to_vec(),
                texture: None,
            },
        }
    }
}

impl Default for MacroquadSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for MacroquadSurface {
    type Texture = Texture2D;

    fn set_projection(&mut self, projection: Projection) {
        set_camera(&OrthoCamera(projection));
    }

    fn bind_texture(&mut self, texture: &Texture2D) {
        self.quad.texture = Some(texture.clone());
    }

    fn draw_quad(&mut self, quad: Quad) {
        for (vertex, (x, y)) in self.quad.vertices.iter_mut().zip(quad.corners()) {
            vertex.position.x = x as f32;
            vertex.position.y = y as f32;
        }
        draw_mesh(&self.quad);
    }
}

/// Flat colour standing in for a terrain whose art could not be loaded
pub const fn placeholder_rgba(terrain: Terrain) -> [u8; 4] {
    match terrain {
        Terrain::Road => [150, 120, 80, 255],
        Terrain::Grass => [70, 160, 60, 255],
        Terrain::Tree => [30, 90, 40, 255],
        Terrain::NeutralTower => [160, 160, 160, 255],
        Terrain::RedTower => [200, 40, 40, 255],
        Terrain::BlueTower => [40, 70, 200, 255],
    }
}

/// Load every texture of every pack from `asset_dir`.
/// Files that fail to load are replaced by a one-pixel placeholder.
pub async fn load_textures(asset_dir: &Path) -> TextureTable<Texture2D> {
    let mut table = TextureTable::new();
    let mut missing = 0;

    for pack in TexturePack::ALL {
        for terrain in Terrain::ALL {
            let path = asset_dir.join(texture_file(pack, terrain));
            let texture = match load_texture(&path.to_string_lossy()).await {
                Ok(texture) => texture,
                Err(err) => {
                    warn!(path = %path.display(), error = ?err, "texture unavailable, using placeholder");
                    missing += 1;
                    Texture2D::from_rgba8(1, 1, &placeholder_rgba(terrain))
                }
            };
            texture.set_filter(FilterMode::Nearest);
            table.insert(pack, terrain, texture);
        }
    }

    info!(loaded = table.len() - missing, placeholders = missing, "textures ready");
    table
}

/// Draw the HUD in window coordinates
pub fn draw_hud(state: &ViewerState) {
    set_camera(&OrthoCamera(state.viewport.project(ProjectionMode::TrueWindow)));
    for (row, line) in hud_lines(state).iter().enumerate() {
        draw_text(line, 8.0, 20.0 + row as f32 * 18.0, 20.0, WHITE);
    }
}
