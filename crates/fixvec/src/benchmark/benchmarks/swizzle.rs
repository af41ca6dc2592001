use crate::{
    benchmark::Benchmarker,
    vector::{Vector3f, Vector4f},
};

pub fn get_swizzle_vector4f(benchmarker: impl Benchmarker) {
    let a = create_vector4f();
    benchmarker.benchmark(&mut || a.wzyx());
}

pub fn set_swizzle_vector4f(benchmarker: impl Benchmarker) {
    let mut a = create_vector4f();
    let value = Vector3f::new(7.0, 8.0, 9.0);
    benchmarker.benchmark(&mut || {
        a.set_zxw(value);
        a
    });
}

fn create_vector4f() -> Vector4f {
    Vector4f::new(1.0, 2.0, 3.0, 4.0)
}
