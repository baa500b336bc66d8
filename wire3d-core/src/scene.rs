/// Scene entities: placed model instances, the camera, and the scene aggregate
use std::sync::Arc;

use nalgebra::Vector3;

use crate::geometry::Model;
use crate::pipeline::compose_instance_transform;
use crate::transform::Matrix4x4;

/// A model placed in the world.
///
/// The model-to-world transform is computed when the instance is built. The
/// setters only record the new value; call [`Instance::rebuild_transform`]
/// afterwards to refresh the cached matrix.
#[derive(Debug, Clone)]
pub struct Instance {
    model: Arc<Model>,
    position: Vector3<f32>,
    orientation: Matrix4x4,
    scale: f32,
    transform: Matrix4x4,
    stale: bool,
}

impl Instance {
    /// Place `model` at `position` with identity orientation and unit scale
    pub fn new(model: Arc<Model>, position: Vector3<f32>) -> Self {
        let mut instance = Self {
            model,
            position,
            orientation: Matrix4x4::identity(),
            scale: 1.0,
            transform: Matrix4x4::identity(),
            stale: true,
        };
        instance.rebuild_transform();
        instance
    }

    pub fn with_orientation(mut self, orientation: Matrix4x4) -> Self {
        self.orientation = orientation;
        self.rebuild_transform();
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self.rebuild_transform();
        self
    }

    pub fn model(&self) -> &Arc<Model> {
        &self.model
    }

    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    pub fn orientation(&self) -> &Matrix4x4 {
        &self.orientation
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// The cached model-to-world transform
    pub fn transform(&self) -> &Matrix4x4 {
        &self.transform
    }

    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.position = position;
        self.stale = true;
    }

    pub fn set_orientation(&mut self, orientation: Matrix4x4) {
        self.orientation = orientation;
        self.stale = true;
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
        self.stale = true;
    }

    /// Recompute the cached transform from position, orientation and scale
    pub fn rebuild_transform(&mut self) {
        self.transform = compose_instance_transform(self);
        self.stale = false;
    }

    /// True when a setter ran after the last rebuild
    pub fn is_transform_stale(&self) -> bool {
        self.stale
    }
}

/// Camera configuration: a position and a pure-rotation orientation
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vector3<f32>,
    orientation: Matrix4x4,
}

impl Camera {
    pub fn new(position: Vector3<f32>, orientation: Matrix4x4) -> Self {
        Self {
            position,
            orientation,
        }
    }

    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    pub fn orientation(&self) -> &Matrix4x4 {
        &self.orientation
    }

    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.position = position;
    }

    pub fn set_orientation(&mut self, orientation: Matrix4x4) {
        self.orientation = orientation;
    }

    /// World-space direction the camera looks along (+Z in camera space)
    pub fn forward(&self) -> Vector3<f32> {
        let column = self.orientation.column(2);
        Vector3::new(column[0], column[1], column[2])
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vector3::zeros(), Matrix4x4::identity())
    }
}

/// Everything a render pass needs: one camera and the instances, drawn in list order
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub camera: Camera,
    pub instances: Vec<Instance>,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            instances: Vec::new(),
        }
    }

    pub fn add_instance(&mut self, instance: Instance) {
        self.instances.push(instance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Transform;

    #[test]
    fn test_instance_defaults() {
        let instance = Instance::new(Arc::new(Model::cube(2.0)), Vector3::new(0.0, 0.0, 5.0));
        assert_eq!(instance.scale(), 1.0);
        assert!((instance.orientation() - Matrix4x4::identity()).norm() < 1e-6);
        assert!(!instance.is_transform_stale());

        let expected = Transform::translation_matrix(&Vector3::new(0.0, 0.0, 5.0));
        assert!((instance.transform() - expected).norm() < 1e-6);
    }

    #[test]
    fn test_setters_mark_stale_until_rebuild() {
        let mut instance = Instance::new(Arc::new(Model::cube(2.0)), Vector3::zeros());
        let before = *instance.transform();

        instance.set_position(Vector3::new(1.0, 0.0, 0.0));
        assert!(instance.is_transform_stale());
        assert!((instance.transform() - before).norm() < 1e-6);

        instance.rebuild_transform();
        assert!(!instance.is_transform_stale());
        assert!((instance.transform()[(0, 3)] - 1.0).abs() < 1e-6);

        instance.set_scale(3.0);
        instance.set_orientation(Transform::rotation_around_up_axis(45.0));
        assert!(instance.is_transform_stale());
        instance.rebuild_transform();
        assert!((instance.transform() - compose_instance_transform(&instance)).norm() < 1e-6);
    }

    #[test]
    fn test_instances_share_model() {
        let cube = Arc::new(Model::cube(2.0));
        let a = Instance::new(Arc::clone(&cube), Vector3::new(-1.0, 0.0, 5.0));
        let b = Instance::new(Arc::clone(&cube), Vector3::new(1.0, 0.0, 5.0));
        assert!(Arc::ptr_eq(a.model(), b.model()));
        assert_eq!(Arc::strong_count(&cube), 3);
    }

    #[test]
    fn test_camera_forward() {
        let camera = Camera::default();
        assert!((camera.forward() - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-6);

        let turned = Camera::new(Vector3::zeros(), Transform::rotation_around_up_axis(90.0));
        // Column 2 of the yaw matrix is (-sin, 0, cos)
        assert!((turned.forward() - Vector3::new(-1.0, 0.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn test_scene_keeps_order() {
        let cube = Arc::new(Model::cube(2.0));
        let mut scene = Scene::new(Camera::default());
        scene.add_instance(Instance::new(Arc::clone(&cube), Vector3::new(0.0, 0.0, 5.0)));
        scene.add_instance(Instance::new(cube, Vector3::new(0.0, 0.0, 9.0)));
        assert_eq!(scene.instances.len(), 2);
        assert_eq!(scene.instances[1].position().z, 9.0);
    }
}
