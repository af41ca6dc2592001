use crate::{
    benchmark::Benchmarker,
    transform::Viewport,
    vector::{Vector3d, Vector3f},
};
use nalgebra as na;

pub fn transform_position_vector3f(benchmarker: impl Benchmarker) {
    let a = create_vector3f();
    let matrix = na::Matrix4::<f32>::new_translation(&na::Vector3::new(1.0, 2.0, 3.0))
        * na::Matrix4::new_scaling(2.0);
    benchmarker.benchmark(&mut || a.transform_position(&matrix));
}

pub fn rotate_vector3f(benchmarker: impl Benchmarker) {
    let a = create_vector3f();
    let rotation = na::UnitQuaternion::<f32>::from_euler_angles(0.1, 0.2, 0.3);
    benchmarker.benchmark(&mut || a.rotated(&rotation));
}

pub fn project_vector3d(benchmarker: impl Benchmarker) {
    let a = Vector3d::new(0.5, -0.5, -2.0);
    let world_view_projection = na::Matrix4::new_perspective(1.5, 1.2, 0.1, 100.0);
    let viewport = Viewport::new(0.0, 0.0, 1920.0, 1080.0);
    benchmarker.benchmark(&mut || a.project(&world_view_projection, &viewport));
}

fn create_vector3f() -> Vector3f {
    Vector3f::new(1.0, -2.5, 3.25)
}
