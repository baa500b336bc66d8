/// Composition of model, world and camera transforms
///
/// Order is fixed: scale in model space, rotate, translate into the world,
/// then move into camera space.
use crate::scene::{Camera, Instance};
use crate::transform::{Matrix4x4, Transform};

/// Model-to-world transform: Translate(position) * Orientation * Scale(scale)
pub fn compose_instance_transform(instance: &Instance) -> Matrix4x4 {
    Transform::translation_matrix(&instance.position())
        * (instance.orientation() * Transform::scaling_matrix(instance.scale()))
}

/// World-to-camera transform: Transpose(orientation) * Translate(-position)
///
/// Only valid for pure rotation orientations, whose transpose is their inverse.
pub fn compose_camera_transform(camera: &Camera) -> Matrix4x4 {
    camera.orientation().transpose() * Transform::translation_matrix(&(-camera.position()))
}

/// Model-to-camera transform for one instance, using its cached model-to-world matrix
pub fn compose_final_transform(camera_transform: &Matrix4x4, instance: &Instance) -> Matrix4x4 {
    camera_transform * instance.transform()
}
