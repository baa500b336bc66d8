/// Geometry primitives for wireframe rendering
use crate::error::{Result, Wire3dError};
use crate::transform::Vertex;

/// A flat RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const PURPLE: Color = Color::new(255, 0, 255);
    pub const CYAN: Color = Color::new(0, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A triangle face: three indices into the owning model's vertex list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub indices: [usize; 3],
    pub color: Color,
}

impl Triangle {
    pub fn new(v0: usize, v1: usize, v2: usize, color: Color) -> Self {
        Self {
            indices: [v0, v1, v2],
            color,
        }
    }
}

/// An indexed triangle mesh. Read-only once built; instances share it through an `Arc`.
#[derive(Debug, Clone)]
pub struct Model {
    vertices: Vec<Vertex>,
    triangles: Vec<Triangle>,
}

impl Model {
    /// Build a model, checking that every triangle index points at an existing vertex
    pub fn new(vertices: Vec<Vertex>, triangles: Vec<Triangle>) -> Result<Self> {
        let vertex_count = vertices.len();
        for (triangle, face) in triangles.iter().enumerate() {
            if let Some(&index) = face.indices.iter().find(|&&i| i >= vertex_count) {
                return Err(Wire3dError::VertexIndexOutOfRange {
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }

        Ok(Self {
            vertices,
            triangles,
        })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Create a cube centered on the origin with six colored faces
    pub fn cube(size: f32) -> Self {
        let half = size / 2.0;

        let vertices = vec![
            Vertex::new(half, half, half),
            Vertex::new(-half, half, half),
            Vertex::new(-half, -half, half),
            Vertex::new(half, -half, half),
            Vertex::new(half, half, -half),
            Vertex::new(-half, half, -half),
            Vertex::new(-half, -half, -half),
            Vertex::new(half, -half, -half),
        ];

        let triangles = vec![
            // +Z
            Triangle::new(0, 1, 2, Color::RED),
            Triangle::new(0, 2, 3, Color::RED),
            // +X
            Triangle::new(4, 0, 3, Color::GREEN),
            Triangle::new(4, 3, 7, Color::GREEN),
            // -Z
            Triangle::new(5, 4, 7, Color::BLUE),
            Triangle::new(5, 7, 6, Color::BLUE),
            // -X
            Triangle::new(1, 5, 6, Color::YELLOW),
            Triangle::new(1, 6, 2, Color::YELLOW),
            // +Y
            Triangle::new(4, 5, 1, Color::PURPLE),
            Triangle::new(4, 1, 0, Color::PURPLE),
            // -Y
            Triangle::new(2, 6, 7, Color::CYAN),
            Triangle::new(2, 7, 3, Color::CYAN),
        ];

        Self {
            vertices,
            triangles,
        }
    }
}
