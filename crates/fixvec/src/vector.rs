//! Vectors.

mod convert;
mod format;
mod ops;
mod swizzle;

pub use format::{DisplayConfig, VectorDisplay};

use crate::{
    error::{Result, VectorError},
    scalar::{Float, Number, Scalar, Signed},
};
use num_traits as nt;
use std::{
    hash::{Hash, Hasher},
    ops::{Index, IndexMut},
};

/// A 2-dimensional vector.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "[T; 2]",
        from = "[T; 2]",
        bound(
            serialize = "T: Scalar + serde::Serialize",
            deserialize = "T: Scalar + serde::Deserialize<'de>"
        )
    )
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vector2<T> {
    x: T,
    y: T,
}

/// A 3-dimensional vector.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "[T; 3]",
        from = "[T; 3]",
        bound(
            serialize = "T: Scalar + serde::Serialize",
            deserialize = "T: Scalar + serde::Deserialize<'de>"
        )
    )
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vector3<T> {
    x: T,
    y: T,
    z: T,
}

/// A 4-dimensional vector.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "[T; 4]",
        from = "[T; 4]",
        bound(
            serialize = "T: Scalar + serde::Serialize",
            deserialize = "T: Scalar + serde::Deserialize<'de>"
        )
    )
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vector4<T> {
    x: T,
    y: T,
    z: T,
    w: T,
}

pub type Vector2b = Vector2<bool>;
pub type Vector2i = Vector2<i32>;
pub type Vector2u = Vector2<u32>;
pub type Vector2f = Vector2<f32>;
pub type Vector2d = Vector2<f64>;

pub type Vector3b = Vector3<bool>;
pub type Vector3i = Vector3<i32>;
pub type Vector3u = Vector3<u32>;
pub type Vector3f = Vector3<f32>;
pub type Vector3d = Vector3<f64>;

pub type Vector4b = Vector4<bool>;
pub type Vector4i = Vector4<i32>;
pub type Vector4u = Vector4<u32>;
pub type Vector4f = Vector4<f32>;
pub type Vector4d = Vector4<f64>;

macro_rules! impl_vector_common {
    ($vector:ident, $n:literal, [$($field:ident => $idx:literal),+]) => {
        impl<T: Scalar> $vector<T> {
            /// The number of components.
            pub const LEN: usize = $n;

            /// The vector with all components zero (`false` for booleans).
            pub const ZERO: Self = Self::same(T::ZERO);

            /// The vector with all components one (`true` for booleans).
            pub const ONE: Self = Self::same(T::ONE);

            /// Creates a new vector with the given components.
            #[inline]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// Creates a new vector with the same value for all components.
            #[inline]
            pub const fn same(value: T) -> Self {
                Self { $($field: value),+ }
            }

            /// Returns the components as an array.
            #[inline]
            pub const fn to_array(&self) -> [T; $n] {
                [$(self.$field),+]
            }

            /// Returns the component at the given index.
            ///
            /// # Errors
            /// Returns [`VectorError::IndexOutOfRange`] if `index` is not
            /// smaller than the number of components.
            #[inline]
            pub fn get(&self, index: usize) -> Result<T> {
                match index {
                    $($idx => Ok(self.$field),)+
                    _ => Err(VectorError::IndexOutOfRange { index, len: $n }),
                }
            }

            /// Sets the component at the given index.
            ///
            /// # Errors
            /// Returns [`VectorError::IndexOutOfRange`] if `index` is not
            /// smaller than the number of components. The vector is left
            /// unchanged in that case.
            #[inline]
            pub fn set(&mut self, index: usize, value: T) -> Result<()> {
                *self.component_mut(index)? = value;
                Ok(())
            }

            /// Returns a vector with the given closure applied to each
            /// component.
            #[inline]
            pub fn mapped<U: Scalar>(&self, mut f: impl FnMut(T) -> U) -> $vector<U> {
                $vector { $($field: f(self.$field)),+ }
            }

            /// Returns a vector with the given closure applied to each pair of
            /// corresponding components in this and another vector.
            #[inline]
            pub fn zip_map<U: Scalar, V: Scalar>(
                &self,
                other: &$vector<U>,
                mut f: impl FnMut(T, U) -> V,
            ) -> $vector<V> {
                $vector { $($field: f(self.$field, other.$field)),+ }
            }

            /// Returns a value that formats the vector with the list separator
            /// from the given configuration.
            #[inline]
            pub fn display_with<'a>(&self, config: &'a DisplayConfig) -> VectorDisplay<'a, T, $n> {
                VectorDisplay::new(self.to_array(), config)
            }

            fn component_mut(&mut self, index: usize) -> Result<&mut T> {
                match index {
                    $($idx => Ok(&mut self.$field),)+
                    _ => Err(VectorError::IndexOutOfRange { index, len: $n }),
                }
            }
        }

        impl<T: Number> $vector<T> {
            /// Computes the dot product of this vector with another.
            #[inline]
            pub fn dot(&self, other: &Self) -> T {
                let mut sum = T::ZERO;
                $(sum += self.$field * other.$field;)+
                sum
            }

            /// Computes the square of the length of the vector. Cheaper than
            /// the length itself, and sufficient for comparing lengths.
            #[inline]
            pub fn length_squared(&self) -> T {
                self.dot(self)
            }

            /// Multiplies each component by the corresponding component in
            /// another vector.
            #[inline]
            pub fn component_mul(&self, other: &Self) -> Self {
                self.zip_map(other, |a, b| a * b)
            }

            /// Returns a vector where each component is the minimum of the
            /// corresponding component in this and another vector.
            #[inline]
            pub fn component_min(&self, other: &Self) -> Self {
                self.zip_map(other, |a, b| if a < b { a } else { b })
            }

            /// Returns a vector where each component is the maximum of the
            /// corresponding component in this and another vector.
            #[inline]
            pub fn component_max(&self, other: &Self) -> Self {
                self.zip_map(other, |a, b| if a > b { a } else { b })
            }

            /// Clamps each component to the range given by the corresponding
            /// components of `min` and `max`.
            #[inline]
            pub fn clamp(&self, min: &Self, max: &Self) -> Self {
                Self { $($field: clamp_component(self.$field, min.$field, max.$field)),+ }
            }

            /// Returns the smallest component in the vector.
            #[inline]
            pub fn min_component(&self) -> T {
                let [first, rest @ ..] = self.to_array();
                rest.into_iter().fold(first, |min, c| if c < min { c } else { min })
            }

            /// Returns the largest component in the vector.
            #[inline]
            pub fn max_component(&self) -> T {
                let [first, rest @ ..] = self.to_array();
                rest.into_iter().fold(first, |max, c| if c > max { c } else { max })
            }

            /// Divides each component by the corresponding component in
            /// `divisor`.
            ///
            /// # Errors
            /// For integer vectors, returns [`VectorError::DivisionByZero`] if a
            /// divisor component is zero and [`VectorError::DivisionOverflow`]
            /// if a quotient overflows. Float division never fails.
            pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
                Ok(Self { $($field: checked_quotient(self.$field, divisor.$field, $idx)?),+ })
            }

            /// Divides each component by the given scalar.
            ///
            /// # Errors
            /// See [`Self::checked_div`].
            pub fn checked_div_scalar(&self, divisor: T) -> Result<Self> {
                Ok(Self { $($field: checked_quotient(self.$field, divisor, $idx)?),+ })
            }

            /// Returns the mask of components equal to the corresponding
            /// component in another vector.
            #[inline]
            pub fn component_eq(&self, other: &Self) -> $vector<bool> {
                self.zip_map(other, |a, b| a == b)
            }

            /// Returns the mask of components smaller than the corresponding
            /// component in another vector.
            #[inline]
            pub fn component_lt(&self, other: &Self) -> $vector<bool> {
                self.zip_map(other, |a, b| a < b)
            }

            #[inline]
            pub fn component_le(&self, other: &Self) -> $vector<bool> {
                self.zip_map(other, |a, b| a <= b)
            }

            #[inline]
            pub fn component_gt(&self, other: &Self) -> $vector<bool> {
                self.zip_map(other, |a, b| a > b)
            }

            #[inline]
            pub fn component_ge(&self, other: &Self) -> $vector<bool> {
                self.zip_map(other, |a, b| a >= b)
            }
        }

        impl<T: Signed> $vector<T> {
            /// Returns a vector with the absolute value of each component.
            #[inline]
            pub fn component_abs(&self) -> Self {
                self.mapped(|c| nt::Signed::abs(&c))
            }
        }

        impl<T: Float> $vector<T> {
            /// Computes the length (magnitude) of the vector.
            #[inline]
            pub fn length(&self) -> T {
                nt::Float::sqrt(self.length_squared())
            }

            /// Approximates the length of the vector using
            /// [`Float::inverse_sqrt_fast`].
            ///
            /// The result is not exactly zero for a zero vector.
            #[inline]
            pub fn length_fast(&self) -> T {
                T::ONE / self.length_squared().inverse_sqrt_fast()
            }

            /// Scales the vector to unit length.
            ///
            /// There is no check for zero length: normalizing a zero vector
            /// gives NaN components.
            #[inline]
            pub fn normalize(&mut self) {
                let scale = T::ONE / self.length();
                $(self.$field *= scale;)+
            }

            /// Computes the normalized version of the vector.
            ///
            /// Normalizing a zero vector gives NaN components. Use
            /// [`Self::try_normalized`] when the vector may be zero.
            #[inline]
            pub fn normalized(&self) -> Self {
                let mut normalized = *self;
                normalized.normalize();
                normalized
            }

            /// Scales the vector to approximately unit length using
            /// [`Float::inverse_sqrt_fast`].
            #[inline]
            pub fn normalize_fast(&mut self) {
                let scale = self.length_squared().inverse_sqrt_fast();
                $(self.$field *= scale;)+
            }

            /// Computes an approximately normalized version of the vector
            /// using [`Float::inverse_sqrt_fast`].
            #[inline]
            pub fn normalized_fast(&self) -> Self {
                let mut normalized = *self;
                normalized.normalize_fast();
                normalized
            }

            /// Computes the normalized version of the vector, or returns
            /// [`None`] if the length is zero or not finite.
            #[inline]
            pub fn try_normalized(&self) -> Option<Self> {
                let length = self.length();
                if length > T::ZERO && nt::Float::is_finite(length) {
                    let scale = T::ONE / length;
                    Some(self.mapped(|c| c * scale))
                } else {
                    None
                }
            }

            /// Computes the distance between this and another vector.
            #[inline]
            pub fn distance(&self, other: &Self) -> T {
                nt::Float::sqrt(self.distance_squared(other))
            }

            /// Computes the square of the distance between this and another
            /// vector.
            #[inline]
            pub fn distance_squared(&self, other: &Self) -> T {
                self.zip_map(other, |a, b| a - b).length_squared()
            }

            /// Returns whichever of the two vectors is shorter. If they are
            /// equally long, `right` is returned.
            #[inline]
            pub fn magnitude_min(left: Self, right: Self) -> Self {
                if left.length_squared() < right.length_squared() {
                    left
                } else {
                    right
                }
            }

            /// Returns whichever of the two vectors is longer. If they are
            /// equally long, `left` is returned.
            #[inline]
            pub fn magnitude_max(left: Self, right: Self) -> Self {
                if left.length_squared() >= right.length_squared() {
                    left
                } else {
                    right
                }
            }

            /// Linearly interpolates from this vector to `other`, computing
            /// `self + blend * (other - self)`. The blend factor is not
            /// clamped, so factors outside `[0, 1]` extrapolate.
            #[inline]
            pub fn lerp(&self, other: &Self, blend: T) -> Self {
                self.zip_map(other, |a, b| a + blend * (b - a))
            }

            /// Interpolates between the three corners `a`, `b` and `c` of a
            /// triangle using the barycentric coordinates `u` and `v`, computing
            /// `a + u * (b - a) + v * (c - a)`.
            #[inline]
            pub fn bary_centric(a: &Self, b: &Self, c: &Self, u: T, v: T) -> Self {
                Self {
                    $($field: a.$field + u * (b.$field - a.$field) + v * (c.$field - a.$field)),+
                }
            }
        }

        #[allow(clippy::should_implement_trait)]
        impl $vector<bool> {
            /// Component-wise logical OR.
            #[inline]
            pub fn or(&self, other: &Self) -> Self {
                self.zip_map(other, |a, b| a | b)
            }

            /// Component-wise logical AND.
            #[inline]
            pub fn and(&self, other: &Self) -> Self {
                self.zip_map(other, |a, b| a & b)
            }

            /// Component-wise logical XOR.
            #[inline]
            pub fn xor(&self, other: &Self) -> Self {
                self.zip_map(other, |a, b| a ^ b)
            }

            /// Component-wise logical NOT.
            #[inline]
            pub fn not(&self) -> Self {
                self.mapped(|c| !c)
            }

            /// Whether any component is `true`.
            #[inline]
            pub fn any(&self) -> bool {
                false $(|| self.$field)+
            }

            /// Whether all components are `true`.
            #[inline]
            pub fn all(&self) -> bool {
                true $(&& self.$field)+
            }
        }

        impl<T: Scalar> Index<usize> for $vector<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                match index {
                    $($idx => &self.$field,)+
                    _ => panic!("{}", VectorError::IndexOutOfRange { index, len: $n }),
                }
            }
        }

        impl<T: Scalar> IndexMut<usize> for $vector<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                match self.component_mut(index) {
                    Ok(component) => component,
                    Err(error) => panic!("{error}"),
                }
            }
        }

        impl<T: Scalar> Hash for $vector<T> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                T::hash_components(&self.to_array(), state);
            }
        }

        // SAFETY: The type is `repr(C)` with all fields of type `T`, so it has
        // no padding and any bit pattern valid for the fields is valid for it
        unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $vector<T> {}
        unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $vector<T> {}

        impl_abs_diff_eq!($vector, |a, b, epsilon| {
            $(::approx::AbsDiffEq::abs_diff_eq(&a.$field, &b.$field, epsilon))&&+
        });

        impl_relative_eq!($vector, |a, b, epsilon, max_relative| {
            $(::approx::RelativeEq::relative_eq(&a.$field, &b.$field, epsilon, max_relative))&&+
        });

        impl_ulps_eq!($vector, |a, b, epsilon, max_ulps| {
            $(::approx::UlpsEq::ulps_eq(&a.$field, &b.$field, epsilon, max_ulps))&&+
        });
    };
}

impl_vector_common!(Vector2, 2, [x => 0, y => 1]);
impl_vector_common!(Vector3, 3, [x => 0, y => 1, z => 2]);
impl_vector_common!(Vector4, 4, [x => 0, y => 1, z => 2, w => 3]);

impl<T: Scalar> Vector2<T> {
    /// The x-axis unit vector.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO);

    /// The y-axis unit vector.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE);

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }
}

impl<T: Signed> Vector2<T> {
    /// Returns the vector rotated 90 degrees clockwise, `(y, -x)`.
    #[inline]
    pub fn perpendicular_right(&self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Returns the vector rotated 90 degrees counterclockwise, `(-y, x)`.
    #[inline]
    pub fn perpendicular_left(&self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl<T: Scalar> Vector3<T> {
    /// The x-axis unit vector.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);

    /// The y-axis unit vector.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);

    /// The z-axis unit vector.
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Converts the vector to 2D by dropping the z-component.
    #[inline]
    pub const fn truncated(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }
}

impl<T: Signed> Vector3<T> {
    /// Computes the right-handed cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl<T: Float> Vector3<T> {
    /// Computes the angle in radians between this vector and another.
    ///
    /// The cosine is clamped to `[-1, 1]` before taking its arc cosine, so
    /// rounding errors never produce NaN for nonzero vectors.
    #[inline]
    pub fn angle_between(&self, other: &Self) -> T {
        let cos_angle = self.dot(other) / (self.length() * other.length());
        nt::Float::acos(clamp_component(cos_angle, -T::ONE, T::ONE))
    }
}

impl<T: Scalar> Vector4<T> {
    /// The x-axis unit vector.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);

    /// The y-axis unit vector.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);

    /// The z-axis unit vector.
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);

    /// The w-axis unit vector.
    pub const UNIT_W: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

    /// Converts the vector to 3D by dropping the w-component.
    #[inline]
    pub const fn truncated(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

#[inline]
fn clamp_component<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

fn checked_quotient<T: Number>(dividend: T, divisor: T, component: usize) -> Result<T> {
    if T::INTEGRAL && divisor == T::ZERO {
        return Err(VectorError::DivisionByZero { component });
    }
    dividend
        .checked_quotient(divisor)
        .ok_or(VectorError::DivisionOverflow { component })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use std::hash::DefaultHasher;

    const EPSILON: f32 = 1e-6;

    fn hash_of<V: Hash>(value: &V) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    prop_compose! {
        fn vector3_strategy(max_component: f32)(
            x in -max_component..max_component,
            y in -max_component..max_component,
            z in -max_component..max_component,
        ) -> Vector3f {
            Vector3f::new(x, y, z)
        }
    }

    prop_compose! {
        fn vector4i_strategy()(
            x in -1000..1000_i32,
            y in -1000..1000_i32,
            z in -1000..1000_i32,
            w in -1000..1000_i32,
        ) -> Vector4i {
            Vector4i::new(x, y, z, w)
        }
    }

    #[test]
    fn constructing_vectors_works() {
        assert_eq!(Vector3f::same(2.0), Vector3f::new(2.0, 2.0, 2.0));
        assert_eq!(Vector4i::ZERO, Vector4i::new(0, 0, 0, 0));
        assert_eq!(Vector2u::ONE, Vector2u::new(1, 1));
        assert_eq!(Vector3b::ONE, Vector3b::new(true, true, true));
        assert_eq!(Vector3b::default(), Vector3b::ZERO);
        assert_eq!(Vector4d::UNIT_W, Vector4d::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Vector3i::UNIT_Y, Vector3i::new(0, 1, 0));
        assert_eq!(Vector2f::UNIT_X, Vector2f::new(1.0, 0.0));
        assert_eq!(Vector4u::LEN, 4);
    }

    #[test]
    fn getting_and_setting_components_by_index_works() {
        let mut v = Vector3f::new(1.0, 2.0, 3.0);
        assert_eq!(v.get(0), Ok(1.0));
        assert_eq!(v.get(2), Ok(3.0));

        v.set(1, 20.0).unwrap();
        assert_eq!(v, Vector3f::new(1.0, 20.0, 3.0));
    }

    #[test]
    fn getting_out_of_range_index_fails() {
        let v = Vector3f::new(1.0, 2.0, 3.0);
        assert_eq!(
            v.get(3),
            Err(VectorError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(Vector2i::ZERO.get(usize::MAX).is_err());
    }

    #[test]
    fn setting_out_of_range_index_fails_and_leaves_vector_unchanged() {
        let mut v = Vector4i::new(1, 2, 3, 4);
        assert_eq!(
            v.set(4, 9),
            Err(VectorError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(v, Vector4i::new(1, 2, 3, 4));
    }

    #[test]
    fn index_operators_work() {
        let mut v = Vector4u::new(1, 2, 3, 4);
        assert_eq!(v[3], 4);
        v[0] = 10;
        assert_eq!(v, Vector4u::new(10, 2, 3, 4));
    }

    #[test]
    #[should_panic]
    fn indexing_vector3_out_of_bounds_panics() {
        let v = Vector3f::new(1.0, 2.0, 3.0);
        let _ = v[3];
    }

    #[test]
    fn computing_vector3_length_works() {
        let v = Vector3f::new(1.0, 2.0, 2.0);
        assert_abs_diff_eq!(v.length(), 3.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.length_squared(), 9.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.length_fast(), 3.0, epsilon = 3.0 * 1e-3);
        assert_eq!(Vector3f::ZERO.length(), 0.0);
    }

    #[test]
    fn integer_length_squared_is_exact() {
        assert_eq!(Vector3i::new(1, -2, 3).length_squared(), 14);
        assert_eq!(Vector2u::new(3, 4).length_squared(), 25);
    }

    #[test]
    fn normalizing_vector2_gives_unit_vector() {
        let v = Vector2f::new(3.0, 4.0);
        let normalized = v.normalized();
        assert_abs_diff_eq!(normalized.length(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(normalized, Vector2f::new(0.6, 0.8), epsilon = EPSILON);
    }

    #[test]
    fn normalizing_in_place_matches_normalized_copy() {
        let mut v = Vector4d::new(1.0, -2.0, 3.0, -4.0);
        let normalized = v.normalized();
        v.normalize();
        assert_eq!(v, normalized);
    }

    #[test]
    fn fast_normalization_is_approximately_unit_length() {
        let v = Vector3d::new(10.0, -3.0, 0.5);
        assert_abs_diff_eq!(v.normalized_fast().length(), 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(v.normalized_fast(), v.normalized(), epsilon = 1e-3);
    }

    #[test]
    fn normalizing_zero_vector_gives_nan() {
        let normalized = Vector3f::ZERO.normalized();
        assert!(normalized.x().is_nan() && normalized.y().is_nan() && normalized.z().is_nan());
    }

    #[test]
    fn fast_operations_propagate_nan_from_normalized_zero_vector() {
        let nan = Vector3f::ZERO.normalized();
        assert!(nan.length_fast().is_nan());
        let normalized = nan.normalized_fast();
        assert!(normalized.x().is_nan() && normalized.y().is_nan() && normalized.z().is_nan());

        let negative_nan = Vector2d::same(-f64::NAN);
        assert!(negative_nan.length_fast().is_nan());
    }

    #[test]
    fn try_normalizing_zero_vector_gives_none() {
        assert_eq!(Vector2d::ZERO.try_normalized(), None);
        assert_eq!(
            Vector2d::new(0.0, 5.0).try_normalized(),
            Some(Vector2d::new(0.0, 1.0))
        );
        assert_eq!(Vector3f::same(f32::INFINITY).try_normalized(), None);
    }

    #[test]
    fn vector3_dot_product_works() {
        let v1 = Vector3f::new(1.0, 2.0, 3.0);
        let v2 = Vector3f::new(4.0, 5.0, 6.0);
        assert_abs_diff_eq!(v1.dot(&v2), 32.0, epsilon = EPSILON);
        assert_eq!(Vector3i::new(1, 2, 3).dot(&Vector3i::new(-1, 0, 2)), 5);
    }

    #[test]
    fn vector3_cross_product_is_right_handed() {
        let cross = Vector3f::UNIT_X.cross(&Vector3f::UNIT_Y);
        assert_eq!(cross, Vector3f::UNIT_Z);
        assert_eq!(
            Vector3i::UNIT_Y.cross(&Vector3i::UNIT_Z),
            Vector3i::UNIT_X
        );
    }

    #[test]
    fn vector3_cross_product_is_anticommutative() {
        let v1 = Vector3f::new(1.0, 2.0, 3.0);
        let v2 = Vector3f::new(4.0, 5.0, 6.0);
        assert_abs_diff_eq!(v1.cross(&v2), -v2.cross(&v1), epsilon = EPSILON);
    }

    #[test]
    fn cross_product_of_vector_with_itself_is_zero() {
        let v = Vector3i::new(3, -7, 11);
        assert_eq!(v.cross(&v), Vector3i::ZERO);
    }

    #[test]
    fn vector_component_operations_work() {
        let v1 = Vector3f::new(-1.0, 2.0, -3.0);
        let v2 = Vector3f::new(3.0, -4.0, 5.0);

        assert_eq!(v1.component_abs(), Vector3f::new(1.0, 2.0, 3.0));
        assert_eq!(v1.component_mul(&v2), Vector3f::new(-3.0, -8.0, -15.0));
        assert_eq!(v1.component_min(&v2), Vector3f::new(-1.0, -4.0, -3.0));
        assert_eq!(v1.component_max(&v2), Vector3f::new(3.0, 2.0, 5.0));
        assert_eq!(v1.min_component(), -3.0);
        assert_eq!(v2.max_component(), 5.0);
    }

    #[test]
    fn component_min_max_are_not_magnitude_based() {
        let a = Vector2i::new(-10, 1);
        let b = Vector2i::new(2, -1);
        assert_eq!(a.component_min(&b), Vector2i::new(-10, -1));
        assert_eq!(a.component_max(&b), Vector2i::new(2, 1));
    }

    #[test]
    fn clamping_works_per_component() {
        let v = Vector4i::new(-5, 0, 5, 10);
        let clamped = v.clamp(&Vector4i::same(-1), &Vector4i::new(1, 1, 1, 20));
        assert_eq!(clamped, Vector4i::new(-1, 0, 1, 10));
    }

    #[test]
    fn comparison_masks_work() {
        let a = Vector3i::new(1, 5, 3);
        let b = Vector3i::new(2, 5, 1);
        assert_eq!(a.component_lt(&b), Vector3b::new(true, false, false));
        assert_eq!(a.component_le(&b), Vector3b::new(true, true, false));
        assert_eq!(a.component_gt(&b), Vector3b::new(false, false, true));
        assert_eq!(a.component_ge(&b), Vector3b::new(false, true, true));
        assert_eq!(a.component_eq(&b), Vector3b::new(false, true, false));
    }

    #[test]
    fn boolean_logic_methods_work() {
        let a = Vector4b::new(true, true, false, false);
        let b = Vector4b::new(true, false, true, false);
        assert_eq!(a.or(&b), Vector4b::new(true, true, true, false));
        assert_eq!(a.and(&b), Vector4b::new(true, false, false, false));
        assert_eq!(a.xor(&b), Vector4b::new(false, true, true, false));
        assert_eq!(a.not(), Vector4b::new(false, false, true, true));
        assert!(a.any());
        assert!(!a.all());
        assert!(Vector2b::ONE.all());
        assert!(!Vector3b::ZERO.any());
    }

    #[test]
    fn checked_integer_division_reports_division_by_zero() {
        let v = Vector3i::new(7, 8, 9);
        assert_eq!(
            v.checked_div(&Vector3i::new(1, 0, 1)),
            Err(VectorError::DivisionByZero { component: 1 })
        );
        assert_eq!(
            v.checked_div_scalar(0),
            Err(VectorError::DivisionByZero { component: 0 })
        );
        assert_eq!(v.checked_div_scalar(2), Ok(Vector3i::new(3, 4, 4)));
    }

    #[test]
    fn checked_integer_division_reports_overflow() {
        let v = Vector2i::new(1, i32::MIN);
        assert_eq!(
            v.checked_div_scalar(-1),
            Err(VectorError::DivisionOverflow { component: 1 })
        );
    }

    #[test]
    fn checked_float_division_by_zero_follows_ieee() {
        let quotient = Vector2f::new(1.0, 0.0).checked_div_scalar(0.0).unwrap();
        assert_eq!(quotient.x(), f32::INFINITY);
        assert!(quotient.y().is_nan());
    }

    #[test]
    fn distance_works() {
        let a = Vector3d::new(1.0, 2.0, 3.0);
        let b = Vector3d::new(4.0, 6.0, 3.0);
        assert_abs_diff_eq!(a.distance(&b), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.distance_squared(&b), 25.0, epsilon = 1e-12);
    }

    #[test]
    fn magnitude_min_and_max_pick_by_length() {
        let short = Vector3f::new(1.0, 0.0, 0.0);
        let long = Vector3f::new(0.0, -2.0, 0.0);
        assert_eq!(Vector3f::magnitude_min(short, long), short);
        assert_eq!(Vector3f::magnitude_min(long, short), short);
        assert_eq!(Vector3f::magnitude_max(short, long), long);
        assert_eq!(Vector3f::magnitude_max(long, short), long);
    }

    #[test]
    fn magnitude_ties_go_to_right_for_min_and_left_for_max() {
        let a = Vector4f::new(1.0, 0.0, 0.0, 0.0);
        let b = Vector4f::new(0.0, 0.0, 0.0, -1.0);
        assert_eq!(Vector4f::magnitude_min(a, b), b);
        assert_eq!(Vector4f::magnitude_max(a, b), a);
    }

    #[test]
    fn lerp_hits_endpoints_and_extrapolates() {
        let a = Vector2f::new(1.0, 2.0);
        let b = Vector2f::new(3.0, 6.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), Vector2f::new(2.0, 4.0));
        assert_eq!(a.lerp(&b, 2.0), Vector2f::new(5.0, 10.0));
        assert_eq!(a.lerp(&b, -1.0), Vector2f::new(-1.0, -2.0));
    }

    #[test]
    fn bary_centric_interpolation_works() {
        let a = Vector3f::new(0.0, 0.0, 0.0);
        let b = Vector3f::new(4.0, 0.0, 0.0);
        let c = Vector3f::new(0.0, 8.0, 0.0);
        assert_eq!(Vector3f::bary_centric(&a, &b, &c, 0.0, 0.0), a);
        assert_eq!(Vector3f::bary_centric(&a, &b, &c, 1.0, 0.0), b);
        assert_eq!(Vector3f::bary_centric(&a, &b, &c, 0.0, 1.0), c);
        assert_eq!(
            Vector3f::bary_centric(&a, &b, &c, 0.25, 0.5),
            Vector3f::new(1.0, 4.0, 0.0)
        );
    }

    #[test]
    fn perpendiculars_of_vector2_work() {
        let v = Vector2i::new(2, 3);
        assert_eq!(v.perpendicular_right(), Vector2i::new(3, -2));
        assert_eq!(v.perpendicular_left(), Vector2i::new(-3, 2));
        assert_eq!(v.dot(&v.perpendicular_right()), 0);
    }

    #[test]
    fn angle_between_vectors_works() {
        let angle = Vector3d::UNIT_X.angle_between(&Vector3d::new(1.0, 1.0, 0.0));
        assert_abs_diff_eq!(angle, std::f64::consts::FRAC_PI_4, epsilon = 1e-12);
        let parallel = Vector3f::new(1.0, 2.0, 3.0);
        assert_abs_diff_eq!(parallel.angle_between(&(parallel * 3.0)), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn extending_and_truncating_works() {
        let v2 = Vector2i::new(1, 2);
        let v3 = v2.extended(3);
        assert_eq!(v3, Vector3i::new(1, 2, 3));
        assert_eq!(v3.extended(4), Vector4i::new(1, 2, 3, 4));
        assert_eq!(v3.truncated(), v2);
        assert_eq!(v3.extended(4).truncated(), v3);
    }

    #[test]
    fn mapping_vector_components_works() {
        let v = Vector3f::new(1.0, -2.0, 0.5);
        assert_eq!(v.mapped(|c| c * 2.0), Vector3f::new(2.0, -4.0, 1.0));
        assert_eq!(v.mapped(|c| c > 0.0), Vector3b::new(true, false, true));
    }

    #[test]
    fn float_equality_is_exact() {
        assert_eq!(Vector2f::new(0.0, 1.0), Vector2f::new(-0.0, 1.0));
        assert_ne!(Vector2d::new(0.1 + 0.2, 1.0), Vector2d::new(0.3, 1.0));
        assert_ne!(Vector2f::same(f32::NAN), Vector2f::same(f32::NAN));
    }

    #[test]
    fn equal_vectors_hash_equal() {
        assert_eq!(
            hash_of(&Vector3f::new(0.0, 1.0, 2.0)),
            hash_of(&Vector3f::new(-0.0, 1.0, 2.0))
        );
        assert_eq!(
            hash_of(&Vector4i::new(1, 2, 3, 4)),
            hash_of(&Vector4i::new(1, 2, 3, 4))
        );
        assert_ne!(
            hash_of(&Vector2u::new(1, 2)),
            hash_of(&Vector2u::new(2, 1))
        );
        assert_ne!(
            hash_of(&Vector3b::new(true, false, false)),
            hash_of(&Vector3b::new(false, true, false))
        );
    }

    #[test]
    fn vectors_can_be_used_as_hash_set_keys() {
        let set: std::collections::HashSet<Vector2i> =
            [Vector2i::new(1, 2), Vector2i::new(1, 2), Vector2i::new(2, 1)]
                .into_iter()
                .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn numeric_vectors_are_pod() {
        let vectors = [Vector3f::new(1.0, 2.0, 3.0), Vector3f::new(4.0, 5.0, 6.0)];
        let components: &[f32] = bytemuck::cast_slice(&vectors);
        assert_eq!(components, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(bytemuck::bytes_of(&Vector4u::ONE).len(), 16);
        assert_eq!(<Vector2b as bytemuck::Zeroable>::zeroed(), Vector2b::ZERO);
    }

    proptest! {
        #[test]
        fn index_set_then_get_round_trips(v in vector4i_strategy(), index in 0..4_usize, value in any::<i32>()) {
            let mut v = v;
            v.set(index, value).unwrap();
            prop_assert_eq!(v.get(index), Ok(value));
            prop_assert_eq!(v[index], value);
        }
    }

    proptest! {
        #[test]
        fn index_outside_range_always_fails(index in 4..usize::MAX) {
            let mut v = Vector4i::ZERO;
            prop_assert!(v.get(index).is_err());
            prop_assert!(v.set(index, 1).is_err());
        }
    }

    proptest! {
        #[test]
        fn integer_addition_is_commutative_and_associative(
            a in vector4i_strategy(),
            b in vector4i_strategy(),
            c in vector4i_strategy(),
        ) {
            prop_assert_eq!(a + b, b + a);
            prop_assert_eq!((a + b) + c, a + (b + c));
        }
    }

    proptest! {
        #[test]
        fn arithmetic_identities_hold(a in vector4i_strategy()) {
            prop_assert_eq!(a + Vector4i::ZERO, a);
            prop_assert_eq!(a * Vector4i::ONE, a);
            prop_assert_eq!(a - a, Vector4i::ZERO);
            prop_assert_eq!(a / 1, a);
        }
    }

    proptest! {
        #[test]
        fn dot_product_is_symmetric(a in vector4i_strategy(), b in vector4i_strategy()) {
            prop_assert_eq!(a.dot(&b), b.dot(&a));
        }
    }

    proptest! {
        #[test]
        fn cross_product_is_orthogonal_to_inputs(a in vector3_strategy(10.0), b in vector3_strategy(10.0)) {
            let cross = a.cross(&b);
            prop_assert!(abs_diff_eq(cross.dot(&a), 0.0, 1e-2));
            prop_assert!(abs_diff_eq(cross.dot(&b), 0.0, 1e-2));
        }
    }

    proptest! {
        #[test]
        fn length_squared_equals_self_dot_product(v in vector3_strategy(100.0)) {
            prop_assert_eq!(v.length_squared(), v.dot(&v));
        }
    }

    proptest! {
        #[test]
        fn normalized_nonzero_vector_has_unit_length(v in vector3_strategy(1e3)) {
            prop_assume!(v.length() > 1e-3);
            prop_assert!(abs_diff_eq(v.normalized().length(), 1.0, 1e-5));
        }
    }

    proptest! {
        #[test]
        fn fast_length_is_within_error_bound(v in vector3_strategy(1e3)) {
            prop_assume!(v.length() > 1e-3);
            prop_assert!(abs_diff_eq(v.length_fast() / v.length(), 1.0, 1e-3));
        }
    }

    proptest! {
        #[test]
        fn lerp_hits_endpoints_for_integral_values(a in vector4i_strategy(), b in vector4i_strategy()) {
            let a = a.cast::<f32>();
            let b = b.cast::<f32>();
            prop_assert_eq!(a.lerp(&b, 0.0), a);
            prop_assert_eq!(a.lerp(&b, 1.0), b);
        }
    }

    fn abs_diff_eq(a: f32, b: f32, epsilon: f32) -> bool {
        approx::abs_diff_eq!(a, b, epsilon = epsilon)
    }
}
