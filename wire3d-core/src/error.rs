/// Error type shared by the wire3d crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Wire3dError {
    #[error("triangle {triangle} references vertex {index}, but the model has {vertex_count} vertices")]
    VertexIndexOutOfRange {
        triangle: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("invalid viewport: size {size}, projection plane distance {distance}")]
    InvalidViewport { size: f32, distance: f32 },

    #[error("failed to present frame: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Wire3dError>;

impl From<Wire3dError> for std::io::Error {
    fn from(err: Wire3dError) -> Self {
        match err {
            Wire3dError::Io(e) => e,
            other => std::io::Error::new(std::io::ErrorKind::InvalidInput, other),
        }
    }
}
