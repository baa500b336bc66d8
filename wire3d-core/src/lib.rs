//! Wire3D Core Library - software wireframe rendering
//!
//! This library provides the stateless core of the renderer: 4x4 homogeneous
//! transforms, the scene model, perspective projection and line rasterization
//! into any [`Canvas`] pixel sink.

pub mod canvas;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod projection;
pub mod raster;
pub mod renderer;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use canvas::{Canvas, PixelBuffer};
pub use error::{Result, Wire3dError};
pub use geometry::{Color, Model, Triangle};
pub use projection::{Point, Viewport};
pub use renderer::{RenderStats, Renderer};
pub use scene::{Camera, Instance, Scene};
pub use transform::{Matrix4x4, Transform, Vertex, Vertex4};
