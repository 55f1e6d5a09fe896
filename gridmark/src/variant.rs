//! Model of the platform automation array format
//!
//! A [`Variant`] is a dynamically typed boxed value; a [`VariantArray`] is an
//! n-dimensional array of variants with an explicit lower bound and element
//! count per dimension. The matrix boundary only ever produces or accepts
//! two-dimensional arrays where dimension 0 indexes columns and dimension 1
//! indexes rows.

use crate::error::{BoundaryError, Result};

mod element;

pub use element::{FromVariant, ToVariant};

/// Dynamically typed boxed value
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// No data
    #[default]
    Empty,
    /// Explicit null
    Null,
    Bool(bool),
    I32(i32),
    I64(i64),
    F64(f64),
    String(String),
    Array(Box<VariantArray>),
}

impl Variant {
    /// Short name of the boxed type, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Variant::Empty => "empty",
            Variant::Null => "null",
            Variant::Bool(_) => "bool",
            Variant::I32(_) => "i32",
            Variant::I64(_) => "i64",
            Variant::F64(_) => "f64",
            Variant::String(_) => "string",
            Variant::Array(_) => "array",
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Variant::Empty)
    }

    pub fn as_array(&self) -> Option<&VariantArray> {
        match self {
            Variant::Array(array) => Some(array),
            _ => None,
        }
    }
}

impl From<VariantArray> for Variant {
    fn from(array: VariantArray) -> Self {
        Variant::Array(Box::new(array))
    }
}

/// Extent of one array dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bound {
    /// Index of the first element
    pub lower: i32,
    /// Number of elements
    pub elements: usize,
}

impl Bound {
    pub const fn new(lower: i32, elements: usize) -> Self {
        Self { lower, elements }
    }

    /// Index of the last element; `lower - 1` when the dimension is empty
    pub fn upper(&self) -> i64 {
        self.lower as i64 + self.elements as i64 - 1
    }

    /// Zero-based position of `index` within this dimension
    fn position(&self, index: i32) -> Option<usize> {
        let pos = index as i64 - self.lower as i64;
        (pos >= 0 && (pos as u64) < self.elements as u64).then_some(pos as usize)
    }
}

/// N-dimensional array of variants, first dimension varying fastest
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantArray {
    bounds: Vec<Bound>,
    data: Vec<Variant>,
}

impl VariantArray {
    /// Array with the given bounds, every element [`Variant::Empty`]
    pub fn new(bounds: Vec<Bound>) -> Self {
        let len = if bounds.is_empty() {
            0
        } else {
            bounds.iter().map(|b| b.elements).product()
        };
        Self {
            bounds,
            data: vec![Variant::Empty; len],
        }
    }

    /// Zero-based `columns` x `rows` array filled by `f(column, row)`
    pub fn from_fn_2d<F>(columns: usize, rows: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Variant,
    {
        let mut data = Vec::with_capacity(columns * rows);
        for row in 0..rows {
            for column in 0..columns {
                data.push(f(column, row));
            }
        }
        Self {
            bounds: vec![Bound::new(0, columns), Bound::new(0, rows)],
            data,
        }
    }

    /// Number of dimensions
    pub fn dims(&self) -> usize {
        self.bounds.len()
    }

    pub fn bounds(&self) -> &[Bound] {
        &self.bounds
    }

    /// Total element count
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn offset(&self, index: &[i32]) -> Result<usize> {
        let out_of_bounds = || BoundaryError::IndexOutOfBounds {
            index: index.to_vec(),
        };
        if index.len() != self.bounds.len() {
            return Err(out_of_bounds());
        }

        let mut offset = 0;
        let mut stride = 1;
        for (bound, &i) in self.bounds.iter().zip(index) {
            let pos = bound.position(i).ok_or_else(out_of_bounds)?;
            offset += pos * stride;
            stride *= bound.elements;
        }
        Ok(offset)
    }

    /// Element at the bound-relative `index`
    pub fn get(&self, index: &[i32]) -> Result<&Variant> {
        let offset = self.offset(index)?;
        self.data.get(offset).ok_or_else(|| BoundaryError::IndexOutOfBounds {
            index: index.to_vec(),
        })
    }

    /// Replace the element at the bound-relative `index`
    pub fn put(&mut self, index: &[i32], value: Variant) -> Result<()> {
        let offset = self.offset(index)?;
        let slot = self
            .data
            .get_mut(offset)
            .ok_or_else(|| BoundaryError::IndexOutOfBounds {
                index: index.to_vec(),
            })?;
        *slot = value;
        Ok(())
    }

    /// Element of a 2D array by zero-based column and row position
    pub fn element(&self, column: usize, row: usize) -> Option<&Variant> {
        match self.bounds.as_slice() {
            [columns, rows] if column < columns.elements && row < rows.elements => {
                self.data.get(row * columns.elements + column)
            }
            _ => None,
        }
    }
}
