//! Swizzle accessors for vectors.
//!
//! Each vector type gets its components addressable with the `xyzw`, `rgba`
//! and `stpq` letter sets, restricted to its arity.

use super::{Vector2, Vector3, Vector4};
use fixvec_macros::swizzles;

swizzles!(Vector2, [Vector2, Vector3, Vector4], [x, y], [x, y]);
swizzles!(Vector2, [Vector2, Vector3, Vector4], [x, y], [r, g]);
swizzles!(Vector2, [Vector2, Vector3, Vector4], [x, y], [s, t]);

swizzles!(Vector3, [Vector2, Vector3, Vector4], [x, y, z], [x, y, z]);
swizzles!(Vector3, [Vector2, Vector3, Vector4], [x, y, z], [r, g, b]);
swizzles!(Vector3, [Vector2, Vector3, Vector4], [x, y, z], [s, t, p]);

swizzles!(
    Vector4,
    [Vector2, Vector3, Vector4],
    [x, y, z, w],
    [x, y, z, w]
);
swizzles!(
    Vector4,
    [Vector2, Vector3, Vector4],
    [x, y, z, w],
    [r, g, b, a]
);
swizzles!(
    Vector4,
    [Vector2, Vector3, Vector4],
    [x, y, z, w],
    [s, t, p, q]
);
