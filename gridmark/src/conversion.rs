//! Boundary conversion between [`Matrix`] and the automation array format
//!
//! These are the only two ways in and out of the array format: import with
//! [`VariantMatrix::from_variant`] / [`VariantMatrix::assign_variant`] and
//! export with [`VariantMatrix::to_variant`].

use gridmark_core::{Expandable, Matrix};

use crate::error::{BoundaryError, Result};
use crate::variant::{FromVariant, ToVariant, Variant, VariantArray};

/// Import and export of a matrix through [`Variant`] arrays
pub trait VariantMatrix: Sized {
    /// Build a matrix from a 2D array variant, or an empty matrix from [`Variant::Empty`]
    fn from_variant(value: &Variant) -> Result<Self>;

    /// Replace this matrix's contents with the array in `value`
    ///
    /// The matrix is cleared (rows, markers, cursor, active marker, grow
    /// increment) and repopulated. On error it is left untouched.
    fn assign_variant(&mut self, value: &Variant) -> Result<()>;

    /// Zero-based `width()` x `height()` array of the matrix contents
    fn to_variant_array(&self) -> VariantArray;

    /// [`to_variant_array`](Self::to_variant_array) boxed as a variant
    fn to_variant(&self) -> Variant {
        Variant::from(self.to_variant_array())
    }
}

impl<T> VariantMatrix for Matrix<T>
where
    T: FromVariant + ToVariant + Default,
{
    fn from_variant(value: &Variant) -> Result<Self> {
        let array = match value {
            Variant::Empty => return Ok(Matrix::new()),
            Variant::Array(array) => array,
            other => {
                return Err(BoundaryError::NotAnArray {
                    found: other.type_name(),
                })
            }
        };

        let (columns, rows) = match array.bounds() {
            [columns, rows] => (columns.elements, rows.elements),
            bounds => return Err(BoundaryError::DimensionMismatch { dims: bounds.len() }),
        };

        let mut matrix = Matrix::new();
        if rows > 0 {
            matrix.expand(rows - 1);
        }
        for row in 0..rows {
            for column in 0..columns {
                let element = array.element(column, row).unwrap_or(&Variant::Empty);
                matrix.set_cell(column, row, T::from_variant(element)?)?;
            }
        }

        tracing::debug!(columns, rows, "matrix imported from array");
        Ok(matrix)
    }

    fn assign_variant(&mut self, value: &Variant) -> Result<()> {
        *self = Self::from_variant(value)?;
        Ok(())
    }

    /// Cells missing from short rows export as the default value
    ///
    /// Cells are read in the absolute frame; the active marker is ignored.
    fn to_variant_array(&self) -> VariantArray {
        let (width, height) = (self.width(), self.height());
        let array = VariantArray::from_fn_2d(width, height, |column, row| {
            self.row(row)
                .ok()
                .and_then(|r| r.value(column))
                .map_or_else(|| T::default().to_variant(), ToVariant::to_variant)
        });

        tracing::debug!(columns = width, rows = height, "matrix exported to array");
        array
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Bound;

    fn sample() -> Matrix<i32> {
        let mut m = Matrix::new();
        m.set_cell(0, 0, 1).unwrap();
        m.set_cell(0, 1, 2).unwrap();
        m.set_cell(1, 0, 3).unwrap();
        m.set_cell(1, 1, 4).unwrap();
        m
    }

    #[test]
    fn test_export_layout() {
        let array = sample().to_variant_array();
        assert_eq!(array.bounds(), [Bound::new(0, 2), Bound::new(0, 2)]);
        assert_eq!(array.get(&[0, 0]), Ok(&Variant::I32(1)));
        assert_eq!(array.get(&[0, 1]), Ok(&Variant::I32(2)));
        assert_eq!(array.get(&[1, 0]), Ok(&Variant::I32(3)));
        assert_eq!(array.get(&[1, 1]), Ok(&Variant::I32(4)));
    }

    #[test]
    fn test_export_pads_ragged_rows() {
        let mut m: Matrix<i32> = Matrix::new();
        m.set_cell(2, 0, 8).unwrap();
        m.set_cell(0, 1, 9).unwrap();
        let array = m.to_variant_array();
        assert_eq!(array.bounds(), [Bound::new(0, 3), Bound::new(0, 2)]);
        assert_eq!(array.get(&[2, 1]), Ok(&Variant::I32(0)));
        assert_eq!(m.row(1).unwrap().len(), 1);
    }

    #[test]
    fn test_import_honours_lower_bounds() {
        let mut array = VariantArray::new(vec![Bound::new(1, 2), Bound::new(-3, 1)]);
        array.put(&[1, -3], Variant::I32(5)).unwrap();
        array.put(&[2, -3], Variant::I64(6)).unwrap();

        let m = Matrix::<i64>::from_variant(&array.into()).unwrap();
        assert_eq!(m.width(), 2);
        assert_eq!(m.height(), 1);
        assert_eq!(m.cell(0, 0), Ok(&5));
        assert_eq!(m.cell(1, 0), Ok(&6));
    }

    #[test]
    fn test_import_keeps_rows_of_zero_width_array() {
        let mut m: Matrix<i32> = Matrix::new();
        m.expand(2);
        assert_eq!((m.width(), m.height()), (0, 3));

        let copy = Matrix::<i32>::from_variant(&m.to_variant()).unwrap();
        assert_eq!(copy.width(), 0);
        assert_eq!(copy.height(), 3);
    }

    #[test]
    fn test_export_ignores_active_marker() {
        let mut m = sample();
        m.add_marker("m", 1, 1);
        m.set_active_marker("m");
        let array = m.to_variant_array();
        assert_eq!(array.bounds(), [Bound::new(0, 2), Bound::new(0, 2)]);
        assert_eq!(array.get(&[0, 0]), Ok(&Variant::I32(1)));
    }

    #[test]
    fn test_import_empty_sentinel_clears() {
        let mut m = sample();
        m.add_marker("m", 1, 1);
        m.assign_variant(&Variant::Empty).unwrap();
        assert!(m.is_empty());
        assert!(!m.has_marker("m"));
    }

    #[test]
    fn test_import_rejects_non_arrays() {
        assert_eq!(
            Matrix::<i32>::from_variant(&Variant::I32(1)).unwrap_err(),
            BoundaryError::NotAnArray { found: "i32" }
        );

        let cube = Variant::from(VariantArray::new(vec![Bound::new(0, 1); 3]));
        assert_eq!(
            Matrix::<i32>::from_variant(&cube).unwrap_err(),
            BoundaryError::DimensionMismatch { dims: 3 }
        );
    }

    #[test]
    fn test_failed_import_leaves_matrix_untouched() {
        let mut m = sample();
        let strings = Variant::from(VariantArray::from_fn_2d(1, 1, |_, _| {
            Variant::String("x".into())
        }));
        assert!(matches!(
            m.assign_variant(&strings),
            Err(BoundaryError::TypeMismatch { .. })
        ));
        assert_eq!(m.cell(1, 1), Ok(&4));
    }

    #[test]
    fn test_variant_elements_round_trip() {
        let mut m: Matrix<Variant> = Matrix::new();
        m.fill_east([Variant::I32(1), Variant::String("two".into()), Variant::Null])
            .unwrap();
        let back = Matrix::<Variant>::from_variant(&m.to_variant()).unwrap();
        assert_eq!(back.cell(1, 0), Ok(&Variant::String("two".into())));
        assert_eq!(back.cell(2, 0), Ok(&Variant::Null));
    }
}
