//! Text formatting for vectors.

use super::{Vector2, Vector3, Vector4};
use crate::scalar::Scalar;
use std::fmt;

/// Configuration for formatting vectors as text.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Written between components, followed by a space.
    pub list_separator: String,
}

/// Helper for formatting a vector with a custom [`DisplayConfig`], returned
/// by `display_with` on the vector types.
#[derive(Clone, Copy, Debug)]
pub struct VectorDisplay<'a, T, const N: usize> {
    components: [T; N],
    list_separator: &'a str,
}

const DEFAULT_LIST_SEPARATOR: &str = ",";

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            list_separator: DEFAULT_LIST_SEPARATOR.to_string(),
        }
    }
}

impl<'a, T: Scalar, const N: usize> VectorDisplay<'a, T, N> {
    pub(super) fn new(components: [T; N], config: &'a DisplayConfig) -> Self {
        Self {
            components,
            list_separator: &config.list_separator,
        }
    }
}

impl<T: Scalar, const N: usize> fmt::Display for VectorDisplay<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, &self.components, self.list_separator)
    }
}

macro_rules! impl_display {
    ($vector:ident) => {
        impl<T: Scalar> fmt::Display for $vector<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_components(f, &self.to_array(), DEFAULT_LIST_SEPARATOR)
            }
        }
    };
}

impl_display!(Vector2);
impl_display!(Vector3);
impl_display!(Vector4);

/// Writes the components in parentheses, passing the formatter's flags on
/// to each component.
fn write_components<T: Scalar>(
    f: &mut fmt::Formatter<'_>,
    components: &[T],
    list_separator: &str,
) -> fmt::Result {
    f.write_str("(")?;
    for (idx, component) in components.iter().enumerate() {
        if idx > 0 {
            write!(f, "{list_separator} ")?;
        }
        fmt::Display::fmt(component, f)?;
    }
    f.write_str(")")
}
