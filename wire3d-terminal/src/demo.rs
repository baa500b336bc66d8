/// The two-cube demo scene
use std::sync::Arc;

use nalgebra::Vector3;
use wire3d_core::{Camera, Instance, Model, Scene, Transform};

/// Two instances of one shared cube, seen by a camera turned 30 degrees to the left
pub fn two_cubes() -> Scene {
    let cube = Arc::new(Model::cube(2.0));

    let mut scene = Scene::new(Camera::new(
        Vector3::new(-3.0, 1.0, 2.0),
        Transform::rotation_around_up_axis(-30.0),
    ));
    scene.add_instance(Instance::new(Arc::clone(&cube), Vector3::new(-1.5, 0.0, 7.0)).with_scale(0.75));
    scene.add_instance(
        Instance::new(cube, Vector3::new(1.25, 2.5, 7.5))
            .with_orientation(Transform::rotation_around_up_axis(195.0)),
    );
    scene
}
