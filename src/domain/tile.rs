use super::Terrain;

/// Index pattern drawing a quad as two triangles over its corners
/// in top-left, bottom-left, top-right, bottom-right order.
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 1, 3];

/// Texture coordinates matching the corner order of `Quad::corners`
pub const QUAD_TEX_COORDS: [(f32, f32); 4] = [(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)];

/// Axis-aligned rectangle in world pixels (y grows downward)
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Quad {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Quad {
    /// Quad covering grid cell `(x, y)`
    pub fn for_cell(x: usize, y: usize, tile_size: u32) -> Self {
        let size = f64::from(tile_size);
        let left = x as f64 * size;
        let top = y as f64 * size;
        Self {
            left,
            top,
            right: left + size,
            bottom: top + size,
        }
    }

    /// Corners in top-left, bottom-left, top-right, bottom-right order
    pub const fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.left, self.top),
            (self.left, self.bottom),
            (self.right, self.top),
            (self.right, self.bottom),
        ]
    }
}

/// A single map cell. Tiles are value-like and never change after generation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Tile {
    terrain: Terrain,
    x: usize,
    y: usize,
}

impl Tile {
    pub const fn new(terrain: Terrain, x: usize, y: usize) -> Self {
        Self { terrain, x, y }
    }

    pub const fn terrain(&self) -> Terrain {
        self.terrain
    }

    /// Grid coordinates
    pub const fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// World-space quad, always derived from position and tile size
    pub fn quad(&self, tile_size: u32) -> Quad {
        Quad::for_cell(self.x, self.y, tile_size)
    }

    pub const fn movement_cost(&self) -> i32 {
        self.terrain.movement_cost()
    }

    pub const fn is_capture_point(&self) -> bool {
        self.terrain.is_capture_point()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_corners_order() {
        let quad = Quad::for_cell(2, 3, 64);
        assert_eq!(
            quad.corners(),
            [(128.0, 192.0), (128.0, 256.0), (192.0, 192.0), (192.0, 256.0)]
        );
    }

    #[test]
    fn test_quad_spans_one_tile() {
        for (x, y) in [(0, 0), (29, 19), (7, 13)] {
            let quad = Quad::for_cell(x, y, 64);
            assert_eq!(quad.right, quad.left + 64.0);
            assert_eq!(quad.bottom, quad.top + 64.0);
        }
    }

    #[test]
    fn test_indices_cover_both_triangles() {
        // Each triangle must reference three distinct corners
        for tri in QUAD_INDICES.chunks(3) {
            assert!(tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2]);
        }
        assert!((0..4).all(|corner| QUAD_INDICES.contains(&corner)));
    }

    #[test]
    fn test_tile_delegates_to_terrain() {
        let tower = Tile::new(Terrain::RedTower, 1, 1);
        assert!(tower.is_capture_point());
        assert_eq!(tower.movement_cost(), 1);
        assert_eq!(tower.quad(32), Quad::for_cell(1, 1, 32));
    }
}
