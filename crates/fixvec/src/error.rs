//! Errors for vector operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorError>;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorError {
    #[error("Index {index} is out of range for a vector with {len} components")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Integer division by zero in component {component}")]
    DivisionByZero { component: usize },

    #[error("Integer division overflowed in component {component}")]
    DivisionOverflow { component: usize },
}
