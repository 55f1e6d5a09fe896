//! Error types for grid operations

use alloc::string::String;

use crate::direction::Direction;

/// Contract violations reported by matrix operations
///
/// Growth on the write path never fails, so every variant here describes a
/// caller error: reading outside the stored extent, naming a marker that was
/// never registered, or asking for a position left of column 0 / above row 0.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Row index past the current height on a read path
    #[error("row {row} out of bounds (height {height})")]
    RowOutOfBounds { row: usize, height: usize },
    /// Column index past the row's length on a read path
    #[error("column {column} out of bounds in row {row} (length {len})")]
    ColumnOutOfBounds { column: usize, row: usize, len: usize },
    /// No marker registered under this name
    #[error("unknown marker '{0}'")]
    UnknownMarker(String),
    /// Direction pair is not one of the eight opposite pairs
    #[error("invalid direction pair {start} -> {end}")]
    InvalidDirection { start: Direction, end: Direction },
    /// Relative motion produced a position before the origin
    #[error("negative coordinate ({x}, {y})")]
    NegativeCoordinate { x: isize, y: isize },
    /// Relative motion produced a position past `usize::MAX`
    #[error("coordinate overflow")]
    CoordinateOverflow,
}

/// Broad class of a [`GridError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Bounds,
    Lookup,
    Coordinate,
}

impl GridError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GridError::RowOutOfBounds { .. } | GridError::ColumnOutOfBounds { .. } => {
                ErrorCategory::Bounds
            }
            GridError::UnknownMarker(_) | GridError::InvalidDirection { .. } => {
                ErrorCategory::Lookup
            }
            GridError::NegativeCoordinate { .. } | GridError::CoordinateOverflow => {
                ErrorCategory::Coordinate
            }
        }
    }
}

/// Result type for grid operations
pub type Result<T> = core::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_messages() {
        let err = GridError::RowOutOfBounds { row: 4, height: 2 };
        assert_eq!(err.to_string(), "row 4 out of bounds (height 2)");

        let err = GridError::InvalidDirection {
            start: Direction::North,
            end: Direction::East,
        };
        assert_eq!(err.to_string(), "invalid direction pair north -> east");
    }

    #[test]
    fn test_error_category() {
        assert_eq!(
            GridError::ColumnOutOfBounds { column: 3, row: 0, len: 1 }.category(),
            ErrorCategory::Bounds
        );
        assert_eq!(
            GridError::UnknownMarker("m".into()).category(),
            ErrorCategory::Lookup
        );
        assert_eq!(
            GridError::NegativeCoordinate { x: -1, y: 0 }.category(),
            ErrorCategory::Coordinate
        );
        assert_eq!(GridError::CoordinateOverflow.category(), ErrorCategory::Coordinate);
    }
}
