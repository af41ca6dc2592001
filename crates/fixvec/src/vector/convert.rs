//! Conversions between vectors, arrays, tuples and other component types.

use super::{Vector2, Vector3, Vector4};
use crate::scalar::{Number, Scalar};
use num_traits as nt;

macro_rules! impl_conversions {
    ($vector:ident, $n:literal, [$($field:ident: $t:ident),+]) => {
        impl<T: Scalar> From<[T; $n]> for $vector<T> {
            #[inline]
            fn from([$($field),+]: [T; $n]) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T: Scalar> From<$vector<T>> for [T; $n] {
            #[inline]
            fn from(vector: $vector<T>) -> Self {
                vector.to_array()
            }
        }

        impl<T: Scalar> From<($($t),+)> for $vector<T> {
            #[inline]
            fn from(($($field),+): ($($t),+)) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T: Scalar> From<$vector<T>> for ($($t),+) {
            #[inline]
            fn from(vector: $vector<T>) -> Self {
                ($(vector.$field),+)
            }
        }

        impl<T: Number> AsRef<[T; $n]> for $vector<T> {
            #[inline]
            fn as_ref(&self) -> &[T; $n] {
                bytemuck::cast_ref(self)
            }
        }

        impl<T: Scalar> $vector<T> {
            /// Converts each component to another scalar type with `as`
            /// semantics, so float to integer conversion saturates and
            /// truncates.
            #[inline]
            pub fn cast<U>(&self) -> $vector<U>
            where
                T: nt::AsPrimitive<U>,
                U: Scalar,
            {
                $vector { $($field: self.$field.as_()),+ }
            }

            /// Converts each component to another numeric type, returning
            /// [`None`] if any component is not representable in it.
            #[inline]
            pub fn try_cast<U>(&self) -> Option<$vector<U>>
            where
                T: nt::ToPrimitive,
                U: Number,
            {
                Some($vector { $($field: <U as nt::NumCast>::from(self.$field)?),+ })
            }
        }

        impl From<$vector<f32>> for $vector<f64> {
            #[inline]
            fn from(vector: $vector<f32>) -> Self {
                vector.mapped(f64::from)
            }
        }

        impl From<$vector<i32>> for $vector<f64> {
            #[inline]
            fn from(vector: $vector<i32>) -> Self {
                vector.mapped(f64::from)
            }
        }

        impl From<$vector<u32>> for $vector<f64> {
            #[inline]
            fn from(vector: $vector<u32>) -> Self {
                vector.mapped(f64::from)
            }
        }
    };
}

impl_conversions!(Vector2, 2, [x: T, y: T]);
impl_conversions!(Vector3, 3, [x: T, y: T, z: T]);
impl_conversions!(Vector4, 4, [x: T, y: T, z: T, w: T]);

// Converting to a smaller vector drops the trailing components, converting to
// a larger one fills the new components with zero

impl<T: Scalar> From<Vector3<T>> for Vector2<T> {
    #[inline]
    fn from(vector: Vector3<T>) -> Self {
        vector.truncated()
    }
}

impl<T: Scalar> From<Vector4<T>> for Vector2<T> {
    #[inline]
    fn from(vector: Vector4<T>) -> Self {
        Self::new(vector.x, vector.y)
    }
}

impl<T: Scalar> From<Vector2<T>> for Vector3<T> {
    #[inline]
    fn from(vector: Vector2<T>) -> Self {
        vector.extended(T::ZERO)
    }
}

impl<T: Scalar> From<Vector4<T>> for Vector3<T> {
    #[inline]
    fn from(vector: Vector4<T>) -> Self {
        vector.truncated()
    }
}

impl<T: Scalar> From<Vector2<T>> for Vector4<T> {
    #[inline]
    fn from(vector: Vector2<T>) -> Self {
        Self::new(vector.x, vector.y, T::ZERO, T::ZERO)
    }
}

impl<T: Scalar> From<Vector3<T>> for Vector4<T> {
    #[inline]
    fn from(vector: Vector3<T>) -> Self {
        vector.extended(T::ZERO)
    }
}
