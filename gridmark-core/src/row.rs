//! Index-expandable sequence of cells

use alloc::vec::Vec;

use crate::cell::Cell;
use crate::traits::Expandable;

/// Ordered run of cells, left to right
///
/// Reads never grow the row. Writes through [`Row::cell_mut`] append default
/// cells until the requested index exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row<T> {
    cells: Vec<Cell<T>>,
}

impl<T> Row<T> {
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Read-only access; `None` past the end
    pub fn get(&self, n: usize) -> Option<&Cell<T>> {
        self.cells.get(n)
    }

    /// Value at `n`, if stored
    pub fn value(&self, n: usize) -> Option<&T> {
        self.cells.get(n).map(Cell::get)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Cell<T>> {
        self.cells.iter()
    }

    /// Remove the cell at `n`, shifting later cells left
    pub fn remove(&mut self, n: usize) -> Option<Cell<T>> {
        (n < self.cells.len()).then(|| self.cells.remove(n))
    }
}

impl<T: Default> Row<T> {
    /// A row of `len` default cells
    pub fn with_len(len: usize) -> Self {
        let mut cells = Vec::with_capacity(len);
        cells.resize_with(len, Cell::default);
        Self { cells }
    }

    /// Mutable access to cell `n`, appending default cells first if needed
    pub fn cell_mut(&mut self, n: usize) -> &mut Cell<T> {
        if n >= self.cells.len() {
            self.expand(n);
        }
        &mut self.cells[n]
    }

    /// Splice `count` default cells in before position `at`
    ///
    /// `at` is clamped to the current length.
    pub fn insert_cells(&mut self, at: usize, count: usize) {
        let at = at.min(self.cells.len());
        self.cells
            .splice(at..at, core::iter::repeat_with(Cell::default).take(count));
    }
}

impl<T: Default> Expandable for Row<T> {
    fn expand(&mut self, n: usize) {
        let before = self.cells.len();
        if before > n {
            return;
        }
        self.cells.resize_with(n + 1, Cell::default);
        tracing::trace!(from = before, to = n + 1, "row expanded");
    }
}

impl<T> core::ops::Index<usize> for Row<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `n` is past the end of the row.
    fn index(&self, n: usize) -> &T {
        self.cells[n].get()
    }
}

impl<T> FromIterator<T> for Row<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(Cell::new).collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Row<T> {
    type Item = &'a Cell<T>;
    type IntoIter = core::slice::Iter<'a, Cell<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
