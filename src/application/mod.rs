mod viewer_state;
mod viewport;

pub use viewer_state::{PanIntent, TileInfo, ViewerState};
pub use viewport::{
    CursorCoords, MIN_CAMERA_EXTENT, PAN_STEP, PanDirection, Projection, ProjectionMode, Viewport, ZOOM_FACTOR,
    ZoomDirection,
};
