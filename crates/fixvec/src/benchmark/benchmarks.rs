//! Benchmark functions, each running one operation through a
//! [`Benchmarker`](super::Benchmarker).

pub mod swizzle;
pub mod transform;
pub mod vector;
