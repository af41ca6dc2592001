//! Fixed-size 2-, 3- and 4-component vectors over `bool`, `i32`, `u32`,
//! `f32` and `f64`, with swizzle accessors, arithmetic, normalization, dot
//! and cross products, interpolation and transforms by matrices and
//! quaternions.

#[macro_use]
mod macros;

pub mod error;
pub mod scalar;
pub mod transform;
pub mod vector;

#[cfg(feature = "benchmark")]
pub mod benchmark;

pub use error::{Result, VectorError};
pub use scalar::{Float, Number, Scalar, Signed};
pub use transform::{QuaternionParts, RowMatrix3, RowMatrix4, Viewport};
pub use vector::{
    DisplayConfig, Vector2, Vector2b, Vector2d, Vector2f, Vector2i, Vector2u, Vector3, Vector3b,
    Vector3d, Vector3f, Vector3i, Vector3u, Vector4, Vector4b, Vector4d, Vector4f, Vector4i,
    Vector4u,
};
