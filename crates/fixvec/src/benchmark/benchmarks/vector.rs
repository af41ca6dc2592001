use crate::{
    benchmark::Benchmarker,
    vector::{Vector3f, Vector4d, Vector4i},
};
use std::hash::{BuildHasher, RandomState};

pub fn add_vector3f(benchmarker: impl Benchmarker) {
    let a = create_vector3f();
    let b = create_other_vector3f();
    benchmarker.benchmark(&mut || a + b);
}

pub fn add_vector4i(benchmarker: impl Benchmarker) {
    let a = Vector4i::new(1, -2, 3, -4);
    let b = Vector4i::new(5, 6, -7, 8);
    benchmarker.benchmark(&mut || a + b);
}

pub fn dot_vector3f(benchmarker: impl Benchmarker) {
    let a = create_vector3f();
    let b = create_other_vector3f();
    benchmarker.benchmark(&mut || a.dot(&b));
}

pub fn cross_vector3f(benchmarker: impl Benchmarker) {
    let a = create_vector3f();
    let b = create_other_vector3f();
    benchmarker.benchmark(&mut || a.cross(&b));
}

pub fn length_vector4d(benchmarker: impl Benchmarker) {
    let a = create_vector4d();
    benchmarker.benchmark(&mut || a.length());
}

pub fn length_fast_vector4d(benchmarker: impl Benchmarker) {
    let a = create_vector4d();
    benchmarker.benchmark(&mut || a.length_fast());
}

pub fn normalize_vector3f(benchmarker: impl Benchmarker) {
    let a = create_vector3f();
    benchmarker.benchmark(&mut || a.normalized());
}

pub fn normalize_fast_vector3f(benchmarker: impl Benchmarker) {
    let a = create_vector3f();
    benchmarker.benchmark(&mut || a.normalized_fast());
}

pub fn lerp_vector3f(benchmarker: impl Benchmarker) {
    let a = create_vector3f();
    let b = create_other_vector3f();
    benchmarker.benchmark(&mut || a.lerp(&b, 0.3));
}

pub fn hash_vector3f(benchmarker: impl Benchmarker) {
    let a = create_vector3f();
    let state = RandomState::new();
    benchmarker.benchmark(&mut || state.hash_one(a));
}

fn create_vector3f() -> Vector3f {
    Vector3f::new(1.0, -2.5, 3.25)
}

fn create_other_vector3f() -> Vector3f {
    Vector3f::new(-0.5, 4.0, 2.0)
}

fn create_vector4d() -> Vector4d {
    Vector4d::new(1.0, 2.0, -3.0, 0.5)
}
