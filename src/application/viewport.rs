//! Camera and viewport math.
//!
//! Three coordinate spaces meet here:
//! - window pixels, as reported by the windowing layer,
//! - offset-relative pixels, measured from the origin of the game screen region,
//! - world pixels, spanning the whole tile grid (y grows downward).
//!
//! The camera extent is the amount of world visible across the full window;
//! only the `game_screen / window` share of it is actually covered by the map.

use tracing::debug;

/// Scale applied by a single zoom step
pub const ZOOM_FACTOR: f64 = 4.0 / 3.0;

/// Smallest camera width or height, in world pixels
pub const MIN_CAMERA_EXTENT: f64 = 100.0;

/// Share of the camera extent travelled per pan tick at speed 1
pub const PAN_STEP: f64 = 0.01;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Which coordinate system an orthographic projection maps onto the window
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProjectionMode {
    /// World space seen through the camera, used for the map
    RelativeCamera,
    /// Raw window pixels, used for overlays
    TrueWindow,
}

/// Orthographic projection bounds, in the argument order of a classic `ortho` call
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Projection {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub near: f64,
    pub far: f64,
}

impl Projection {
    /// Covered rectangle as `(left, top, right, bottom)`
    pub const fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.left, self.top, self.right, self.bottom)
    }
}

/// One cursor position expressed in the three coordinate spaces
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CursorCoords {
    /// Window pixels, clamped to the window rectangle
    pub window: (f64, f64),
    /// World point under the cursor
    pub world: (f64, f64),
    /// Pixels relative to the game screen origin
    pub relative: (f64, f64),
}

/// Viewport owns the camera position, zoom and window geometry.
///
/// After every mutation the visible rectangle lies inside the world
/// and the camera extent stays within `[MIN_CAMERA_EXTENT, max_camera_extent()]`.
#[derive(Clone, Debug)]
pub struct Viewport {
    view_x: f64,
    view_y: f64,
    camera_width: f64,
    camera_height: f64,
    camera_speed: f64,
    window_width: f64,
    window_height: f64,
    game_screen_width: f64,
    game_screen_height: f64,
    window_x_offset: f64,
    window_y_offset: f64,
    world_width: f64,
    world_height: f64,
}

impl Viewport {
    /// Camera at the world origin showing one window's worth of world.
    /// The game screen covers the whole window until told otherwise.
    pub fn new(window: (f64, f64), world: (f64, f64)) -> Self {
        let mut viewport = Self {
            view_x: 0.0,
            view_y: 0.0,
            camera_width: window.0,
            camera_height: window.1,
            camera_speed: 1.0,
            window_width: window.0,
            window_height: window.1,
            game_screen_width: window.0,
            game_screen_height: window.1,
            window_x_offset: 0.0,
            window_y_offset: 0.0,
            world_width: world.0,
            world_height: world.1,
        };
        viewport.fit();
        viewport
    }

    /// Reserve a sub-region of the window for the map
    pub fn with_game_screen(mut self, width: f64, height: f64) -> Self {
        self.game_screen_width = width;
        self.game_screen_height = height;
        self.fit();
        self
    }

    /// Origin of the game screen region inside the window
    pub fn with_window_offset(mut self, x: f64, y: f64) -> Self {
        self.window_x_offset = x;
        self.window_y_offset = y;
        self
    }

    pub fn with_camera_speed(mut self, speed: f64) -> Self {
        self.camera_speed = speed;
        self
    }

    /// Cap the camera extent and pull the view back inside the world
    fn fit(&mut self) {
        let (max_w, max_h) = self.max_camera_extent();
        self.camera_width = self.camera_width.min(max_w);
        self.camera_height = self.camera_height.min(max_h);
        self.view_x = clamp_axis(self.view_x, self.max_view().0);
        self.view_y = clamp_axis(self.view_y, self.max_view().1);
    }

    /// World-space top-left of the visible region
    pub const fn view(&self) -> (f64, f64) {
        (self.view_x, self.view_y)
    }

    /// World extent seen across the full window
    pub const fn camera_extent(&self) -> (f64, f64) {
        (self.camera_width, self.camera_height)
    }

    pub const fn camera_speed(&self) -> f64 {
        self.camera_speed
    }

    pub const fn window_size(&self) -> (f64, f64) {
        (self.window_width, self.window_height)
    }

    pub const fn game_screen_size(&self) -> (f64, f64) {
        (self.game_screen_width, self.game_screen_height)
    }

    pub const fn window_offset(&self) -> (f64, f64) {
        (self.window_x_offset, self.window_y_offset)
    }

    pub const fn world_size(&self) -> (f64, f64) {
        (self.world_width, self.world_height)
    }

    /// World pixels per window pixel, horizontally
    pub fn width_scalar(&self) -> f64 {
        self.camera_width / self.window_width
    }

    /// World pixels per window pixel, vertically
    pub fn height_scalar(&self) -> f64 {
        self.camera_height / self.window_height
    }

    /// Share of the window taken by the game screen on each axis
    pub fn game_screen_share(&self) -> (f64, f64) {
        (
            self.game_screen_width / self.window_width,
            self.game_screen_height / self.window_height,
        )
    }

    /// World extent actually covered by the game screen
    pub fn visible_extent(&self) -> (f64, f64) {
        let (share_x, share_y) = self.game_screen_share();
        (self.camera_width * share_x, self.camera_height * share_y)
    }

    /// Largest camera extent whose visible part still fits in the world
    pub fn max_camera_extent(&self) -> (f64, f64) {
        (
            self.world_width * self.window_width / self.game_screen_width,
            self.world_height * self.window_height / self.game_screen_height,
        )
    }

    /// Magnification relative to one world pixel per window pixel
    pub fn zoom_level(&self) -> f64 {
        self.window_width / self.camera_width
    }

    fn max_view(&self) -> (f64, f64) {
        let (visible_w, visible_h) = self.visible_extent();
        (
            (self.world_width - visible_w).max(0.0),
            (self.world_height - visible_h).max(0.0),
        )
    }

    /// Move the view one pan step in `direction`, scaled by `elapsed` ticks.
    ///
    /// Axes are updated independently, so opposite directions applied in the
    /// same tick leave a net motion that depends on call order.
    pub fn pan(&mut self, direction: PanDirection, elapsed: f64) {
        let step_x = self.camera_width * PAN_STEP * self.camera_speed * elapsed;
        let step_y = self.camera_height * PAN_STEP * self.camera_speed * elapsed;
        let (max_x, max_y) = self.max_view();

        match direction {
            PanDirection::Left => self.view_x = clamp_axis(self.view_x - step_x, max_x),
            PanDirection::Right => self.view_x = clamp_axis(self.view_x + step_x, max_x),
            PanDirection::Up => self.view_y = clamp_axis(self.view_y - step_y, max_y),
            PanDirection::Down => self.view_y = clamp_axis(self.view_y + step_y, max_y),
        }
    }

    /// Express a window position in window, world and offset-relative coordinates
    pub fn cursor_coords(&self, (x, y): (f64, f64)) -> CursorCoords {
        let window_x = x.max(self.window_x_offset).min(self.window_width + self.window_x_offset);
        let window_y = y.max(self.window_y_offset).min(self.window_height + self.window_y_offset);
        let relative = (window_x - self.window_x_offset, window_y - self.window_y_offset);

        CursorCoords {
            window: (window_x, window_y),
            world: (
                self.width_scalar() * relative.0 + self.view_x,
                self.height_scalar() * relative.1 + self.view_y,
            ),
            relative,
        }
    }

    fn in_game_screen(&self, coords: &CursorCoords) -> bool {
        let (rx, ry) = coords.relative;
        rx > 0.0 && rx < self.game_screen_width && ry > 0.0 && ry < self.game_screen_height
    }

    /// Zoom one step, keeping the world point under the cursor fixed on screen.
    ///
    /// Without a cursor, or with the cursor outside the game screen, the centre
    /// of the visible region is the anchor instead. Steps that would leave the
    /// extent bounds are ignored and return `false`.
    pub fn zoom(&mut self, cursor: Option<(f64, f64)>, direction: ZoomDirection) -> bool {
        let in_frame = cursor
            .map(|pos| self.cursor_coords(pos))
            .filter(|coords| self.in_game_screen(coords));

        let (anchor, fraction) = match in_frame {
            Some(coords) => (
                coords.world,
                (coords.relative.0 / self.window_width, coords.relative.1 / self.window_height),
            ),
            None => {
                let (visible_w, visible_h) = self.visible_extent();
                let (share_x, share_y) = self.game_screen_share();
                (
                    (self.view_x + visible_w / 2.0, self.view_y + visible_h / 2.0),
                    (share_x / 2.0, share_y / 2.0),
                )
            }
        };

        let (new_width, new_height) = match direction {
            ZoomDirection::Out => (self.camera_width * ZOOM_FACTOR, self.camera_height * ZOOM_FACTOR),
            ZoomDirection::In => (self.camera_width / ZOOM_FACTOR, self.camera_height / ZOOM_FACTOR),
        };
        let (max_w, max_h) = self.max_camera_extent();
        let allowed = match direction {
            ZoomDirection::Out => new_width <= max_w && new_height <= max_h,
            ZoomDirection::In => new_width >= MIN_CAMERA_EXTENT && new_height >= MIN_CAMERA_EXTENT,
        };
        if !allowed {
            debug!(?direction, width = self.camera_width, height = self.camera_height, "zoom limit reached");
            return false;
        }

        self.camera_width = new_width;
        self.camera_height = new_height;
        self.view_x = anchor.0 - new_width * fraction.0;
        self.view_y = anchor.1 - new_height * fraction.1;

        // Zooming in shrinks the visible rectangle around a point inside it,
        // so only zooming out can push it past the world edges.
        if direction == ZoomDirection::Out {
            let (visible_w, visible_h) = self.visible_extent();
            if self.view_x + visible_w > self.world_width {
                self.view_x = self.world_width - visible_w;
            }
            if self.view_y + visible_h > self.world_height {
                self.view_y = self.world_height - visible_h;
            }
            self.view_x = self.view_x.max(0.0);
            self.view_y = self.view_y.max(0.0);
        }

        debug!(
            ?direction,
            width = self.camera_width,
            height = self.camera_height,
            view_x = self.view_x,
            view_y = self.view_y,
            "zoomed"
        );
        true
    }

    /// Orthographic projection for the given mode.
    /// Both modes put smaller y values at the top of the window.
    pub fn project(&self, mode: ProjectionMode) -> Projection {
        match mode {
            ProjectionMode::RelativeCamera => {
                let border_x = self.window_x_offset * self.width_scalar();
                let border_y = self.window_y_offset * self.height_scalar();
                Projection {
                    left: self.view_x - border_x,
                    right: self.view_x + self.camera_width + border_x,
                    bottom: self.view_y + self.camera_height + border_y,
                    top: self.view_y - border_y,
                    near: 1.0,
                    far: -1.0,
                }
            }
            ProjectionMode::TrueWindow => Projection {
                left: -self.window_x_offset,
                right: self.window_width + self.window_x_offset,
                bottom: self.window_height + self.window_y_offset,
                top: -self.window_y_offset,
                near: 1.0,
                far: -1.0,
            },
        }
    }
}

fn clamp_axis(value: f64, max: f64) -> f64 {
    value.min(max).max(0.0)
}
