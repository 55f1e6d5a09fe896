//! Errors raised at the boundary-array edge

use gridmark_core::GridError;

/// Failures converting between a matrix and a [`Variant`](crate::Variant)
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoundaryError {
    /// Source is neither an array nor the empty sentinel
    #[error("expected an array variant, found {found}")]
    NotAnArray { found: &'static str },
    /// Array does not have exactly two dimensions
    #[error("expected a 2-dimensional array, found {dims} dimension(s)")]
    DimensionMismatch { dims: usize },
    /// Index vector has the wrong length or falls outside the bounds
    #[error("array index {index:?} out of bounds")]
    IndexOutOfBounds { index: Vec<i32> },
    /// Boxed value has a different type than the element type
    #[error("cannot convert {found} to {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// Boxed integer does not fit the element type
    #[error("value {value} out of range for {target}")]
    OutOfRange { value: i64, target: &'static str },
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Result type for boundary conversion
pub type Result<T> = std::result::Result<T, BoundaryError>;
