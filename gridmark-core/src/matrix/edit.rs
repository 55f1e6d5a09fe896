//! Structural edits: inserting and deleting rows and columns
//!
//! Edits work in the absolute frame and leave markers and the cursor where
//! they are.

use super::Matrix;
use crate::error::{GridError, Result};
use crate::row::Row;
use crate::traits::Expandable;

impl<T> Matrix<T> {
    /// Insert `count` empty rows before row `prev_row`
    ///
    /// Past the current height this degrades to `expand(prev_row + count)`.
    pub fn insert_row(&mut self, prev_row: usize, count: usize) {
        if prev_row < self.rows.len() {
            self.rows
                .splice(prev_row..prev_row, core::iter::repeat_with(Row::new).take(count));
            tracing::debug!(at = prev_row, count, height = self.rows.len(), "rows inserted");
        } else {
            self.expand(prev_row + count);
        }
    }

    /// Remove row `row`; later rows move up by one
    pub fn delete_row(&mut self, row: usize) -> Result<Row<T>> {
        if row >= self.rows.len() {
            return Err(GridError::RowOutOfBounds {
                row,
                height: self.rows.len(),
            });
        }
        let removed = self.rows.remove(row);
        tracing::debug!(row, height = self.rows.len(), "row deleted");
        Ok(removed)
    }

    /// Remove column `col` from every row long enough to have it
    ///
    /// Returns the number of cells removed. Shorter rows are left alone.
    pub fn delete_column(&mut self, col: usize) -> usize {
        let removed = self
            .rows
            .iter_mut()
            .filter_map(|row| row.remove(col))
            .count();
        tracing::debug!(col, removed, "column deleted");
        removed
    }
}

impl<T: Default> Matrix<T> {
    /// Insert `count` empty cells at column `prev_column` in every row
    ///
    /// Ragged rows are handled per row: a row no longer than `prev_column` is
    /// padded at its end to `prev_column + count` cells, while a longer row
    /// has `count` fresh cells spliced in at `prev_column`.
    pub fn insert_column(&mut self, prev_column: usize, count: usize) {
        for row in &mut self.rows {
            if row.len() <= prev_column {
                if let Some(last) = (prev_column + count).checked_sub(1) {
                    row.expand(last);
                }
            } else {
                row.insert_cells(prev_column, count);
            }
        }
        tracing::debug!(at = prev_column, count, "columns inserted");
    }
}
