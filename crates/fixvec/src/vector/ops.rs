//! Arithmetic and logical operators for vectors.
//!
//! Numeric operators work component-wise, including `*` and `/` between two
//! vectors. Integer division truncates toward zero and panics on a zero
//! divisor like the scalar operator does; use
//! [`checked_div`](super::Vector3::checked_div) to get an error instead.
//!
//! Boolean vectors use `+` for OR, `*` for AND and `^` for XOR, alongside
//! the usual `|`, `&` and `!` operators.

use super::{Vector2, Vector3, Vector4};
use crate::scalar::{Number, Signed};

macro_rules! impl_numeric_ops {
    ($vector:ident, [$($field:ident),+]) => {
        impl_binop!(Add, add, [T: Number], $vector<T>, $vector<T>, $vector<T>, |a, b| {
            $vector { $($field: a.$field + b.$field),+ }
        });
        impl_binop!(Sub, sub, [T: Number], $vector<T>, $vector<T>, $vector<T>, |a, b| {
            $vector { $($field: a.$field - b.$field),+ }
        });
        impl_binop!(Mul, mul, [T: Number], $vector<T>, $vector<T>, $vector<T>, |a, b| {
            $vector { $($field: a.$field * b.$field),+ }
        });
        impl_binop!(Div, div, [T: Number], $vector<T>, $vector<T>, $vector<T>, |a, b| {
            $vector { $($field: a.$field / b.$field),+ }
        });

        impl_binop!(Add, add, [T: Number], $vector<T>, T, $vector<T>, |a, b| {
            $vector { $($field: a.$field + *b),+ }
        });
        impl_binop!(Sub, sub, [T: Number], $vector<T>, T, $vector<T>, |a, b| {
            $vector { $($field: a.$field - *b),+ }
        });
        impl_binop!(Mul, mul, [T: Number], $vector<T>, T, $vector<T>, |a, b| {
            $vector { $($field: a.$field * *b),+ }
        });
        impl_binop!(Div, div, [T: Number], $vector<T>, T, $vector<T>, |a, b| {
            $vector { $($field: a.$field / *b),+ }
        });

        impl_binop_assign!(AddAssign, add_assign, [T: Number], $vector<T>, $vector<T>, |a, b| {
            $(a.$field += b.$field;)+
        });
        impl_binop_assign!(SubAssign, sub_assign, [T: Number], $vector<T>, $vector<T>, |a, b| {
            $(a.$field -= b.$field;)+
        });
        impl_binop_assign!(MulAssign, mul_assign, [T: Number], $vector<T>, $vector<T>, |a, b| {
            $(a.$field *= b.$field;)+
        });
        impl_binop_assign!(DivAssign, div_assign, [T: Number], $vector<T>, $vector<T>, |a, b| {
            $(a.$field /= b.$field;)+
        });

        impl_binop_assign!(AddAssign, add_assign, [T: Number], $vector<T>, T, |a, b| {
            $(a.$field += *b;)+
        });
        impl_binop_assign!(SubAssign, sub_assign, [T: Number], $vector<T>, T, |a, b| {
            $(a.$field -= *b;)+
        });
        impl_binop_assign!(MulAssign, mul_assign, [T: Number], $vector<T>, T, |a, b| {
            $(a.$field *= *b;)+
        });
        impl_binop_assign!(DivAssign, div_assign, [T: Number], $vector<T>, T, |a, b| {
            $(a.$field /= *b;)+
        });

        impl_unary_op!(Neg, neg, [T: Signed], $vector<T>, $vector<T>, |a| {
            $vector { $($field: -a.$field),+ }
        });

        impl_binop!(Add, add, [], $vector<bool>, $vector<bool>, $vector<bool>, |a, b| {
            $vector { $($field: a.$field | b.$field),+ }
        });
        impl_binop!(Mul, mul, [], $vector<bool>, $vector<bool>, $vector<bool>, |a, b| {
            $vector { $($field: a.$field & b.$field),+ }
        });
        impl_binop!(BitOr, bitor, [], $vector<bool>, $vector<bool>, $vector<bool>, |a, b| {
            $vector { $($field: a.$field | b.$field),+ }
        });
        impl_binop!(BitAnd, bitand, [], $vector<bool>, $vector<bool>, $vector<bool>, |a, b| {
            $vector { $($field: a.$field & b.$field),+ }
        });
        impl_binop!(BitXor, bitxor, [], $vector<bool>, $vector<bool>, $vector<bool>, |a, b| {
            $vector { $($field: a.$field ^ b.$field),+ }
        });

        impl_binop_assign!(BitOrAssign, bitor_assign, [], $vector<bool>, $vector<bool>, |a, b| {
            $(a.$field |= b.$field;)+
        });
        impl_binop_assign!(BitAndAssign, bitand_assign, [], $vector<bool>, $vector<bool>, |a, b| {
            $(a.$field &= b.$field;)+
        });
        impl_binop_assign!(BitXorAssign, bitxor_assign, [], $vector<bool>, $vector<bool>, |a, b| {
            $(a.$field ^= b.$field;)+
        });

        impl_unary_op!(Not, not, [], $vector<bool>, $vector<bool>, |a| {
            $vector { $($field: !a.$field),+ }
        });

        impl_left_scalar_mul!($vector, [$($field),+], i32);
        impl_left_scalar_mul!($vector, [$($field),+], u32);
        impl_left_scalar_mul!($vector, [$($field),+], f32);
        impl_left_scalar_mul!($vector, [$($field),+], f64);
    };
}

// Coherence rules out a generic `T * Vector<T>`, so each scalar type gets
// its own impl
macro_rules! impl_left_scalar_mul {
    ($vector:ident, [$($field:ident),+], $t:ty) => {
        impl_binop!(Mul, mul, [], $t, $vector<$t>, $vector<$t>, |a, b| {
            $vector { $($field: *a * b.$field),+ }
        });
    };
}

impl_numeric_ops!(Vector2, [x, y]);
impl_numeric_ops!(Vector3, [x, y, z]);
impl_numeric_ops!(Vector4, [x, y, z, w]);
