//! Scalar types that vectors are built from.

#![allow(clippy::excessive_precision)]

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits as nt;
use std::{
    fmt,
    hash::Hasher,
    ops::{AddAssign, DivAssign, MulAssign, SubAssign},
};

/// A type that can be the component of a vector.
///
/// Implemented for [`bool`], [`i32`], [`u32`], [`f32`] and [`f64`].
pub trait Scalar:
    Copy
    + PartialEq
    + Default
    + fmt::Debug
    + fmt::Display
    + bytemuck::Zeroable
    + Send
    + Sync
    + 'static
{
    /// The "zero" value (`false` for [`bool`]).
    const ZERO: Self;
    /// The "one" value (`true` for [`bool`]).
    const ONE: Self;

    /// Feeds this value into the given hasher. Values that compare equal
    /// feed identical data.
    fn hash_into<H: Hasher>(self, state: &mut H);

    /// Feeds the given components into the hasher, in order.
    fn hash_components<H: Hasher>(components: &[Self], state: &mut H) {
        for &component in components {
            component.hash_into(state);
        }
    }
}

/// A scalar type supporting basic arithmetic.
///
/// Implemented for [`i32`], [`u32`], [`f32`] and [`f64`].
pub trait Number:
    Scalar
    + nt::Num
    + nt::NumCast
    + PartialOrd
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + bytemuck::Pod
{
    /// Whether this is an integer type, for which division by zero has no
    /// representable result.
    const INTEGRAL: bool;

    /// Divides `self` by `rhs`, returning [`None`] if the division overflows
    /// or is an integer division by zero. Float division always succeeds.
    fn checked_quotient(self, rhs: Self) -> Option<Self>;
}

/// A signed [`Number`].
///
/// Implemented for [`i32`], [`f32`] and [`f64`].
pub trait Signed: Number + nt::Signed {}

/// A floating point [`Number`].
///
/// Implemented for [`f32`] and [`f64`].
pub trait Float:
    Signed + nt::Float + AbsDiffEq<Epsilon = Self> + RelativeEq + UlpsEq
{
    const TWO: Self;
    const ONE_HALF: Self;

    /// Approximates `1 / sqrt(self)` with a bit-level initial guess refined
    /// by two Newton iterations. The relative error is below `0.001` for
    /// positive normal inputs.
    fn inverse_sqrt_fast(self) -> Self;
}

impl Scalar for bool {
    const ZERO: Self = false;
    const ONE: Self = true;

    fn hash_into<H: Hasher>(self, state: &mut H) {
        state.write_u8(u8::from(self));
    }

    fn hash_components<H: Hasher>(components: &[Self], state: &mut H) {
        let mask = components
            .iter()
            .enumerate()
            .fold(0_u8, |mask, (idx, &component)| {
                mask | (u8::from(component) << idx)
            });
        state.write_u8(mask);
    }
}

macro_rules! impl_integer {
    ($t:ty, $write:ident) => {
        impl Scalar for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn hash_into<H: Hasher>(self, state: &mut H) {
                state.$write(self);
            }
        }

        impl Number for $t {
            const INTEGRAL: bool = true;

            fn checked_quotient(self, rhs: Self) -> Option<Self> {
                self.checked_div(rhs)
            }
        }
    };
}

macro_rules! impl_float {
    ($t:ty, $write:ident, $magic:literal) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn hash_into<H: Hasher>(self, state: &mut H) {
                // -0.0 == 0.0, so both must hash the same
                let bits = if self == 0.0 { 0 } else { self.to_bits() };
                state.$write(bits);
            }
        }

        impl Number for $t {
            const INTEGRAL: bool = false;

            fn checked_quotient(self, rhs: Self) -> Option<Self> {
                Some(self / rhs)
            }
        }

        impl Signed for $t {}

        impl Float for $t {
            const TWO: Self = 2.0;
            const ONE_HALF: Self = 0.5;

            fn inverse_sqrt_fast(self) -> Self {
                let half = 0.5 * self;
                let mut y = Self::from_bits($magic.wrapping_sub(self.to_bits() >> 1));
                y = y * (1.5 - half * y * y);
                y * (1.5 - half * y * y)
            }
        }
    };
}

impl_integer!(i32, write_i32);
impl_integer!(u32, write_u32);

impl Signed for i32 {}

impl_float!(f32, write_u32, 0x5f375a86_u32);
impl_float!(f64, write_u64, 0x5fe6eb50c7b537a9_u64);
