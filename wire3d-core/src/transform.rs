/// 4x4 homogeneous transformation matrices and the vector types they act on
use nalgebra::{Matrix4, Point3, Vector3, Vector4};

/// A point in a model's local space (or world/camera space once transformed)
pub type Vertex = Point3<f32>;

/// A point in homogeneous coordinates
pub type Vertex4 = Vector4<f32>;

/// A 4x4 transformation matrix. Composition with `*` is associative but not commutative.
pub type Matrix4x4 = Matrix4<f32>;

/// Lift a 3D point into homogeneous coordinates (w = 1)
pub fn to_homogeneous(vertex: &Vertex) -> Vertex4 {
    Vertex4::new(vertex.x, vertex.y, vertex.z, 1.0)
}

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Create a translation matrix: identity with `v` in the last column
    pub fn translation_matrix(v: &Vector3<f32>) -> Matrix4x4 {
        Matrix4::new_translation(v)
    }

    /// Create a uniform scale matrix with diagonal (s, s, s, 1)
    pub fn scaling_matrix(s: f32) -> Matrix4x4 {
        Matrix4::new_nonuniform_scaling(&Vector3::new(s, s, s))
    }

    /// Create a rotation around the up (Y) axis, with the angle in degrees.
    ///
    /// The rotation lives in the X-Z plane: a positive angle turns +X towards +Z.
    pub fn rotation_around_up_axis(degrees: f32) -> Matrix4x4 {
        let (sin, cos) = degrees.to_radians().sin_cos();

        #[rustfmt::skip]
        let matrix = Matrix4::new(
            cos, 0.0, -sin, 0.0,
            0.0, 1.0,  0.0, 0.0,
            sin, 0.0,  cos, 0.0,
            0.0, 0.0,  0.0, 1.0,
        );
        matrix
    }
}
