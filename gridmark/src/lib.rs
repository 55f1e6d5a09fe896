//! Gridmark - growable matrix with markers and boundary-array conversion
//!
//! This library re-exports the in-memory matrix from `gridmark-core` and adds
//! conversion to and from the platform automation array format.
//!
//! ## Architecture
//!
//! - **gridmark-core**: cells, rows, markers, navigation and the matrix algorithms (`no_std`)
//! - **gridmark**: the boxed-value array model and the matrix import/export edge
//!
//! ## Quick Start
//!
//! ```rust
//! use gridmark::{move_to, Cell, Direction, Matrix, Variant, VariantMatrix};
//!
//! fn example() -> gridmark::BoundaryResult<()> {
//!     let mut matrix: Matrix<i32> = Matrix::new();
//!     matrix.fill([1, 2, 3], Direction::West, Direction::East)?;
//!     let _ = &mut matrix << move_to(0, 1) << Cell::new(4);
//!
//!     // Hand the contents across the boundary and read them back
//!     let boxed: Variant = matrix.to_variant();
//!     let copy = Matrix::<i32>::from_variant(&boxed)?;
//!     assert_eq!(copy.width(), 3);
//!     assert_eq!(copy.cell(0, 1), Ok(&4));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

// Re-export the core matrix
pub use gridmark_core::{
    // Containers
    Cell, Marker, Matrix, MatrixConfig, Row,
    // Navigation and fill
    bookmark, direction_steps, move_to, offset, Direction, MapSelector, Navigation,
    // Traits
    Expandable,
    // Error handling
    ErrorCategory, GridError, Result,
};

pub mod conversion;
pub mod error;
pub mod variant;

pub use conversion::VariantMatrix;
pub use error::{BoundaryError, Result as BoundaryResult};
pub use variant::{Bound, FromVariant, ToVariant, Variant, VariantArray};
