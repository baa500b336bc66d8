/// Perspective projection from camera space to canvas pixels
use crate::error::{Result, Wire3dError};
use crate::transform::Vertex4;

/// A canvas pixel in centered coordinates (origin at the canvas center, y up)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    /// Per-vertex intensity for shaded rasterizers; the wireframe path ignores it
    pub h: f32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y, h: 1.0 }
    }
}

/// The image plane rectangle in camera space, independent of pixel resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub size: f32,
    pub projection_plane_distance: f32,
}

impl Viewport {
    pub fn new(size: f32, projection_plane_distance: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(size) || !valid(projection_plane_distance) {
            return Err(Wire3dError::InvalidViewport {
                size,
                distance: projection_plane_distance,
            });
        }

        Ok(Self {
            size,
            projection_plane_distance,
        })
    }

    /// Map a viewport-space point to canvas pixels, truncating toward zero
    pub fn viewport_to_canvas(&self, x: f32, y: f32, canvas_width: u32, canvas_height: u32) -> Point {
        // `as` saturates: infinities land far outside any canvas and NaN becomes 0
        Point::new(
            (x * canvas_width as f32 / self.size) as i32,
            (y * canvas_height as f32 / self.size) as i32,
        )
    }

    /// Project a camera-space point onto the canvas.
    ///
    /// Points with z <= 0 are not clipped. A vertex at z == 0 divides by zero and
    /// the resulting coordinates are dropped by the canvas bounds check.
    pub fn project(&self, vertex: &Vertex4, canvas_width: u32, canvas_height: u32) -> Point {
        let d = self.projection_plane_distance;
        self.viewport_to_canvas(
            vertex.x * d / vertex.z,
            vertex.y * d / vertex.z,
            canvas_width,
            canvas_height,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: 1.0,
            projection_plane_distance: 1.0,
        }
    }
}

/// Project with explicit viewport parameters
pub fn project(
    vertex: &Vertex4,
    viewport_size: f32,
    projection_plane_distance: f32,
    canvas_width: u32,
    canvas_height: u32,
) -> Point {
    Viewport {
        size: viewport_size,
        projection_plane_distance,
    }
    .project(vertex, canvas_width, canvas_height)
}
