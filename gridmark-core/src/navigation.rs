//! Navigation commands applied to a matrix's cursor and active marker
//!
//! Commands are plain values; build them with [`move_to`], [`offset`] and
//! [`bookmark`], then hand them to [`Matrix::navigate`] or stream them in with
//! `<<`:
//!
//! ```
//! use gridmark_core::{bookmark, move_to, offset, Cell, Matrix};
//!
//! let mut m: Matrix<i32> = Matrix::new();
//! m.add_marker("totals", 0, 10);
//! let _ = &mut m << move_to(2, 0) << Cell::new(1) << offset(1, 0) << Cell::new(2);
//! let _ = &mut m << bookmark("totals") << move_to(0, 0) << Cell::new(3);
//!
//! m.set_active_marker("");
//! assert_eq!(m.cell(3, 0), Ok(&2));
//! assert_eq!(m.cell(0, 10), Ok(&3));
//! ```

use alloc::string::String;

use crate::error::{GridError, Result};
use crate::matrix::Matrix;

/// A cursor or marker effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Put the cursor at an absolute position
    Move { x: usize, y: usize },
    /// Move the cursor relative to where it is
    Offset { dx: isize, dy: isize },
    /// Select the active marker; an empty name selects the absolute frame
    Bookmark(String),
}

/// Put the cursor at `(x, y)`
pub fn move_to(x: usize, y: usize) -> Navigation {
    Navigation::Move { x, y }
}

/// Move the cursor by `(dx, dy)`
pub fn offset(dx: isize, dy: isize) -> Navigation {
    Navigation::Offset { dx, dy }
}

/// Make `name` the active marker
pub fn bookmark(name: impl Into<String>) -> Navigation {
    Navigation::Bookmark(name.into())
}

impl Navigation {
    /// Apply this command to `matrix`
    pub fn apply<T>(&self, matrix: &mut Matrix<T>) -> Result<()> {
        match self {
            Navigation::Move { x, y } => matrix.set_cursor(*x, *y),
            Navigation::Offset { dx, dy } => {
                let (x, y) = matrix.cursor();
                let (x, y) = shift((x, y), (*dx, *dy))?;
                matrix.set_cursor(x, y);
            }
            Navigation::Bookmark(name) => matrix.set_active_marker(name),
        }
        Ok(())
    }
}

/// `pos` moved by `(dx, dy)`, or the error describing where it would land
pub(crate) fn shift(pos: (usize, usize), (dx, dy): (isize, isize)) -> Result<(usize, usize)> {
    let nx = pos.0.checked_add_signed(dx);
    let ny = pos.1.checked_add_signed(dy);
    match (nx, ny) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ if (nx.is_none() && dx < 0) || (ny.is_none() && dy < 0) => {
            Err(GridError::NegativeCoordinate {
                x: signed(pos.0, dx),
                y: signed(pos.1, dy),
            })
        }
        _ => Err(GridError::CoordinateOverflow),
    }
}

fn signed(v: usize, d: isize) -> isize {
    isize::try_from(v).unwrap_or(isize::MAX).saturating_add(d)
}
