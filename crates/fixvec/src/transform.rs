//! Transforming vectors with matrices and quaternions.
//!
//! Vectors are treated as row vectors, so a vector `v` is transformed by a
//! matrix `M` as `v * M` and the translation of an affine matrix lives in its
//! last row. The [`RowMatrix3`], [`RowMatrix4`] and [`QuaternionParts`] traits
//! are the seams to matrix and quaternion types. They are implemented for the
//! [`nalgebra`] types, whose columns serve as rows so that results agree with
//! nalgebra's own column-vector products, and for row-major arrays.

use crate::{
    scalar::Float,
    vector::{Vector2, Vector3, Vector4},
};
use nalgebra as na;

/// A 3x3 matrix that vectors can be transformed by.
pub trait RowMatrix3<T: Float> {
    /// Returns the row with the given index, which must be smaller than 3.
    fn row(&self, i: usize) -> Vector3<T>;
}

/// A 4x4 matrix that vectors can be transformed by.
pub trait RowMatrix4<T: Float>: Sized {
    /// Returns the row with the given index, which must be smaller than 4.
    fn row(&self, i: usize) -> Vector4<T>;

    /// Computes the inverse of the matrix, or returns [`None`] if the matrix
    /// is singular.
    fn inverted(&self) -> Option<Self>;
}

/// A quaternion that vectors can be rotated by.
pub trait QuaternionParts<T: Float> {
    /// The vector (imaginary) part.
    fn xyz(&self) -> Vector3<T>;

    /// The scalar (real) part.
    fn w(&self) -> T;
}

/// A viewport mapping normalized device coordinates to window coordinates.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
    pub min_depth: T,
    pub max_depth: T,
}

impl<T: Float> Viewport<T> {
    /// Creates a viewport covering the given window rectangle with the
    /// depth range `[0, 1]`.
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
            min_depth: T::ZERO,
            max_depth: T::ONE,
        }
    }

    /// Returns the viewport with the given depth range.
    pub fn with_depth_range(self, min_depth: T, max_depth: T) -> Self {
        Self {
            min_depth,
            max_depth,
            ..self
        }
    }
}

impl<T: Float> Vector2<T> {
    /// Rotates the vector by the given quaternion, treating it as a 3D
    /// vector with zero z-component and dropping the z-component of the
    /// result.
    #[inline]
    pub fn rotated(&self, rotation: &impl QuaternionParts<T>) -> Self {
        self.extended(T::ZERO).rotated(rotation).truncated()
    }
}

impl<T: Float> Vector3<T> {
    /// Transforms the vector by the given 3x3 matrix.
    #[inline]
    pub fn transform(&self, matrix: &impl RowMatrix3<T>) -> Self {
        matrix.row(0) * self.x() + matrix.row(1) * self.y() + matrix.row(2) * self.z()
    }

    /// Transforms the vector as a direction by the given 4x4 matrix,
    /// ignoring its translation.
    #[inline]
    pub fn transform_vector(&self, matrix: &impl RowMatrix4<T>) -> Self {
        matrix.row(0).truncated() * self.x()
            + matrix.row(1).truncated() * self.y()
            + matrix.row(2).truncated() * self.z()
    }

    /// Transforms the vector as a position by the given affine 4x4 matrix,
    /// applying its translation.
    #[inline]
    pub fn transform_position(&self, matrix: &impl RowMatrix4<T>) -> Self {
        self.transform_vector(matrix) + matrix.row(3).truncated()
    }

    /// Transforms the vector as a surface normal by the given 4x4 matrix,
    /// which involves inverting it. Returns [`None`] if the matrix is
    /// singular.
    ///
    /// The result is not normalized.
    #[inline]
    pub fn transform_normal<M: RowMatrix4<T>>(&self, matrix: &M) -> Option<Self> {
        let inverse = matrix.inverted()?;
        Some(self.transform_normal_inverse(&inverse))
    }

    /// Transforms the vector as a surface normal given the inverse of the
    /// transformation matrix.
    #[inline]
    pub fn transform_normal_inverse(&self, inverse_matrix: &impl RowMatrix4<T>) -> Self {
        Self::new(
            self.dot(&inverse_matrix.row(0).truncated()),
            self.dot(&inverse_matrix.row(1).truncated()),
            self.dot(&inverse_matrix.row(2).truncated()),
        )
    }

    /// Transforms the vector as a position by the given 4x4 matrix and
    /// performs the perspective division.
    #[inline]
    pub fn transform_perspective(&self, matrix: &impl RowMatrix4<T>) -> Self {
        let homogeneous = self.extended(T::ONE).transform(matrix);
        homogeneous.truncated() / homogeneous.w()
    }

    /// Rotates the vector by the given unit quaternion.
    #[inline]
    pub fn rotated(&self, rotation: &impl QuaternionParts<T>) -> Self {
        let axis = rotation.xyz();
        let twisted = axis.cross(self) + *self * rotation.w();
        *self + axis.cross(&twisted) * T::TWO
    }

    /// Projects the vector from object space to window coordinates in the
    /// given viewport, using the combined world-view-projection matrix.
    pub fn project(
        &self,
        world_view_projection: &impl RowMatrix4<T>,
        viewport: &Viewport<T>,
    ) -> Self {
        let ndc = self.transform_perspective(world_view_projection);
        Self::new(
            viewport.x + viewport.width * (ndc.x() + T::ONE) * T::ONE_HALF,
            viewport.y + viewport.height * (ndc.y() + T::ONE) * T::ONE_HALF,
            viewport.min_depth
                + (viewport.max_depth - viewport.min_depth) * (ndc.z() + T::ONE) * T::ONE_HALF,
        )
    }

    /// Maps the vector from window coordinates in the given viewport back to
    /// object space, using the inverse of the world-view-projection matrix.
    /// This is the inverse of [`Self::project`].
    pub fn unproject(
        &self,
        inverse_world_view_projection: &impl RowMatrix4<T>,
        viewport: &Viewport<T>,
    ) -> Self {
        let ndc = Self::new(
            (self.x() - viewport.x) / viewport.width * T::TWO - T::ONE,
            (self.y() - viewport.y) / viewport.height * T::TWO - T::ONE,
            (self.z() - viewport.min_depth) / (viewport.max_depth - viewport.min_depth) * T::TWO
                - T::ONE,
        );
        ndc.transform_perspective(inverse_world_view_projection)
    }
}

impl<T: Float> Vector4<T> {
    /// Transforms the vector by the given 4x4 matrix.
    #[inline]
    pub fn transform(&self, matrix: &impl RowMatrix4<T>) -> Self {
        matrix.row(0) * self.x()
            + matrix.row(1) * self.y()
            + matrix.row(2) * self.z()
            + matrix.row(3) * self.w()
    }

    /// Computes `q * v * q⁻¹`, treating the vector as a quaternion with
    /// vector part `xyz` and scalar part `w`.
    #[inline]
    pub fn rotated(&self, rotation: &impl QuaternionParts<T>) -> Self {
        let q = (rotation.xyz(), rotation.w());
        let norm_squared = q.0.length_squared() + q.1 * q.1;
        let q_inverse = (-q.0 / norm_squared, q.1 / norm_squared);

        let product = quaternion_product(q, (self.xyz(), self.w()));
        let (xyz, w) = quaternion_product(product, q_inverse);
        xyz.extended(w)
    }
}

/// Computes the Hamilton product of two quaternions given as vector and
/// scalar parts.
fn quaternion_product<T: Float>(
    (a_xyz, a_w): (Vector3<T>, T),
    (b_xyz, b_w): (Vector3<T>, T),
) -> (Vector3<T>, T) {
    (
        b_xyz * a_w + a_xyz * b_w + a_xyz.cross(&b_xyz),
        a_w * b_w - a_xyz.dot(&b_xyz),
    )
}

impl<T: Float + na::RealField> RowMatrix3<T> for na::Matrix3<T> {
    #[inline]
    fn row(&self, i: usize) -> Vector3<T> {
        Vector3::new(self[(0, i)], self[(1, i)], self[(2, i)])
    }
}

impl<T: Float + na::RealField> RowMatrix4<T> for na::Matrix4<T> {
    #[inline]
    fn row(&self, i: usize) -> Vector4<T> {
        Vector4::new(self[(0, i)], self[(1, i)], self[(2, i)], self[(3, i)])
    }

    #[inline]
    fn inverted(&self) -> Option<Self> {
        self.try_inverse()
    }
}

impl<T: Float + na::RealField> QuaternionParts<T> for na::Quaternion<T> {
    #[inline]
    fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.i, self.j, self.k)
    }

    #[inline]
    fn w(&self) -> T {
        self.w
    }
}

impl<T: Float + na::RealField> QuaternionParts<T> for na::UnitQuaternion<T> {
    #[inline]
    fn xyz(&self) -> Vector3<T> {
        self.quaternion().xyz()
    }

    #[inline]
    fn w(&self) -> T {
        QuaternionParts::w(self.quaternion())
    }
}

impl<T: Float> RowMatrix3<T> for [[T; 3]; 3] {
    #[inline]
    fn row(&self, i: usize) -> Vector3<T> {
        Vector3::from(self[i])
    }
}

impl<T: Float + na::RealField> RowMatrix4<T> for [[T; 4]; 4] {
    #[inline]
    fn row(&self, i: usize) -> Vector4<T> {
        Vector4::from(self[i])
    }

    fn inverted(&self) -> Option<Self> {
        let inverse = na::Matrix4::from_fn(|i, j| self[i][j]).try_inverse()?;
        Some(std::array::from_fn(|i| {
            std::array::from_fn(|j| inverse[(i, j)])
        }))
    }
}

/// A quaternion stored as `[x, y, z, w]`.
impl<T: Float> QuaternionParts<T> for [T; 4] {
    #[inline]
    fn xyz(&self) -> Vector3<T> {
        Vector3::new(self[0], self[1], self[2])
    }

    #[inline]
    fn w(&self) -> T {
        self[3]
    }
}
