//! Growable two-dimensional container with markers and a cursor
//!
//! A [`Matrix`] is an ordered sequence of [`Row`]s (top to bottom) plus a
//! table of named [`Marker`]s. Rows may have ragged lengths; `width()` is the
//! longest row. Reads never allocate. Writes grow the matrix by appending
//! rows and cells until the target position exists.
//!
//! ## Frames
//!
//! With no active marker, `(x, y)` addresses row `y`, column `x` directly.
//! Selecting a marker as the active marker translates every subsequent
//! access by the marker's offset over the same storage.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::config::MatrixConfig;
use crate::error::{GridError, Result};
use crate::marker::Marker;
use crate::row::Row;
use crate::traits::Expandable;

mod compose;
mod edit;

pub use compose::MapSelector;

/// Dynamically growable 2D grid of `T`
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    rows: Vec<Row<T>>,
    markers: HashMap<String, Marker>,
    cursor: (usize, usize),
    grow: usize,
    active_marker: Option<String>,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Matrix<T> {
    /// Empty matrix with no grow increment
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            markers: HashMap::new(),
            cursor: (0, 0),
            grow: 0,
            active_marker: None,
        }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Row::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn grow(&self) -> usize {
        self.grow
    }

    pub fn set_grow(&mut self, grow: usize) {
        self.grow = grow;
    }

    /// Drop every row, cell and marker; reset the cursor and active marker
    pub fn clear(&mut self) {
        self.rows.clear();
        self.markers.clear();
        self.active_marker = None;
        self.cursor = (0, 0);
    }

    pub fn rows(&self) -> core::slice::Iter<'_, Row<T>> {
        self.rows.iter()
    }

    /// Row `n` in the absolute frame
    pub fn row(&self, n: usize) -> Result<&Row<T>> {
        self.rows.get(n).ok_or(GridError::RowOutOfBounds {
            row: n,
            height: self.rows.len(),
        })
    }

    /// Row `n` in the absolute frame, growing the matrix if needed
    pub fn row_mut(&mut self, n: usize) -> &mut Row<T> {
        if n >= self.rows.len() {
            self.expand(n);
        }
        &mut self.rows[n]
    }

    // ---- cursor ----

    /// Cursor position as `(x, y)`
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn x(&self) -> usize {
        self.cursor.0
    }

    pub fn y(&self) -> usize {
        self.cursor.1
    }

    pub fn set_cursor(&mut self, x: usize, y: usize) {
        self.cursor = (x, y);
    }

    // ---- markers ----

    /// Register a marker at `(x, y)` under `name`
    ///
    /// A marker already registered under the same name is replaced.
    pub fn add_marker(&mut self, name: impl Into<String>, x: usize, y: usize) -> &Marker {
        let name = name.into();
        let marker = Marker::new(x, y);
        match self.markers.entry(name) {
            hashbrown::hash_map::Entry::Occupied(mut entry) => {
                tracing::debug!(name = %entry.key(), x, y, "marker replaced");
                entry.insert(marker);
                entry.into_mut()
            }
            hashbrown::hash_map::Entry::Vacant(entry) => {
                tracing::debug!(name = %entry.key(), x, y, "marker added");
                entry.insert(marker)
            }
        }
    }

    /// Look up a marker by name
    pub fn marker(&self, name: &str) -> Result<&Marker> {
        self.markers
            .get(name)
            .ok_or_else(|| GridError::UnknownMarker(name.into()))
    }

    pub fn has_marker(&self, name: &str) -> bool {
        self.markers.contains_key(name)
    }

    /// All registered markers, in no particular order
    pub fn markers(&self) -> impl Iterator<Item = (&str, &Marker)> + '_ {
        self.markers.iter().map(|(name, marker)| (name.as_str(), marker))
    }

    /// Name of the marker currently framing cell access
    pub fn active_marker(&self) -> Option<&str> {
        self.active_marker.as_deref()
    }

    /// Select the marker that frames cell access; an empty name selects the absolute frame
    ///
    /// The name is not checked here. Accessing a cell while an unregistered
    /// name is active reports [`GridError::UnknownMarker`].
    pub fn set_active_marker(&mut self, name: &str) {
        self.active_marker = (!name.is_empty()).then(|| name.into());
    }

    /// Offset of the active frame
    fn frame(&self) -> Result<Marker> {
        match self.active_marker.as_deref() {
            None => Ok(Marker::default()),
            Some(name) => self.marker(name).copied(),
        }
    }

    // ---- addressing ----

    /// Read cell `(x, y)` in the active frame
    pub fn cell(&self, x: usize, y: usize) -> Result<&T> {
        let (x, y) = self.frame()?.resolve(x, y);
        self.absolute(x, y)
    }

    fn absolute(&self, x: usize, y: usize) -> Result<&T> {
        let row = self.row(y)?;
        row.value(x).ok_or(GridError::ColumnOutOfBounds {
            column: x,
            row: y,
            len: row.len(),
        })
    }
}

impl<T: Default> Matrix<T> {
    /// Matrix pre-sized per `config`
    pub fn with_config(config: MatrixConfig) -> Self {
        let mut rows = Vec::with_capacity(config.height);
        rows.resize_with(config.height, || Row::with_len(config.width));
        Self {
            rows,
            grow: config.grow,
            ..Self::new()
        }
    }

    /// `width` x `height` matrix of default cells that grows by `grow` extra rows
    pub fn with_size(width: usize, height: usize, grow: usize) -> Self {
        Self::with_config(MatrixConfig::with_size(width, height).with_grow(grow))
    }

    /// Mutable cell `(x, y)` in the active frame, growing the matrix as needed
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Result<&mut T> {
        let (x, y) = self.frame()?.resolve(x, y);
        Ok(self.absolute_mut(x, y))
    }

    /// Write `value` at cell `(x, y)` in the active frame
    pub fn set_cell(&mut self, x: usize, y: usize, value: T) -> Result<&mut Self> {
        *self.cell_mut(x, y)? = value;
        Ok(self)
    }

    /// Write `value` at the cursor
    pub fn set(&mut self, value: T) -> Result<&mut Self> {
        let (x, y) = self.cursor;
        self.set_cell(x, y, value)
    }

    fn absolute_mut(&mut self, x: usize, y: usize) -> &mut T {
        self.row_mut(y).cell_mut(x).get_mut()
    }
}

impl<T> Expandable for Matrix<T> {
    /// Append empty rows until there are at least `n + grow + 1`
    fn expand(&mut self, n: usize) {
        let before = self.rows.len();
        let target = n + self.grow + 1;
        if before >= target {
            return;
        }
        self.rows.resize_with(target, Row::new);
        tracing::trace!(from = before, to = target, "matrix expanded");
    }
}

impl<T> core::ops::Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `(x, y)` is not stored or the active marker is unknown.
    fn index(&self, (x, y): (usize, usize)) -> &T {
        match self.cell(x, y) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Default> core::ops::IndexMut<(usize, usize)> for Matrix<T> {
    /// # Panics
    ///
    /// Panics if the active marker is unknown.
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        match self.cell_mut(x, y) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}
