//! Composition: attaching matrices, directional fill and stream operators

use super::Matrix;
use crate::cell::Cell;
use crate::direction::{direction_steps, Direction};
use crate::error::Result;
use crate::navigation::{shift, Navigation};

/// Which half of a key/value pair [`Matrix::fill_from_map`] writes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapSelector {
    #[default]
    Key,
    Value,
}

impl<T: Default> Matrix<T> {
    /// Copy `other` into this matrix with its top-left corner at the cursor
    ///
    /// The full `other.width()` x `other.height()` rectangle is copied, read in
    /// `other`'s absolute frame whatever marker it has active. Cells missing
    /// from ragged rows of `other` arrive as default values. Destination cells
    /// are addressed through this matrix's active frame.
    pub fn attach(&mut self, other: &Matrix<T>) -> Result<&mut Self>
    where
        T: Clone,
    {
        let frame = self.frame()?;
        let (x0, y0) = self.cursor;
        let width = other.width();

        for (dy, row) in other.rows.iter().enumerate() {
            for dx in 0..width {
                let (x, y) = frame.resolve(x0 + dx, y0 + dy);
                *self.absolute_mut(x, y) = row.value(dx).cloned().unwrap_or_default();
            }
        }

        tracing::debug!(
            x = x0,
            y = y0,
            width,
            height = other.height(),
            "matrix attached"
        );
        Ok(self)
    }

    /// Write each value into successive cells from the cursor towards `end`
    ///
    /// `(start, end)` must be one of the eight opposite compass pairs. The
    /// cursor itself does not move. A step that would leave the grid through
    /// its top or left edge fails with [`NegativeCoordinate`](crate::GridError::NegativeCoordinate); cells
    /// written before that step keep their new values.
    pub fn fill<I>(&mut self, values: I, start: Direction, end: Direction) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        let (dx, dy) = direction_steps(start, end)?;
        let frame = self.frame()?;
        let mut pos = self.cursor;
        let mut blocked = None;
        let mut written = 0usize;

        for value in values {
            if let Some(err) = blocked.take() {
                return Err(err);
            }
            let (ax, ay) = frame.resolve(pos.0, pos.1);
            *self.absolute_mut(ax, ay) = value.into();
            written += 1;
            match shift(pos, (dx, dy)) {
                Ok(next) => pos = next,
                Err(err) => blocked = Some(err),
            }
        }

        tracing::debug!(%start, %end, written, "matrix filled");
        Ok(self)
    }

    /// [`fill`](Self::fill) from west to east, along the cursor's row
    pub fn fill_east<I>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        self.fill(values, Direction::West, Direction::East)
    }

    /// Directional fill from key/value pairs, writing the half chosen by `selector`
    pub fn fill_from_map<I, K, V>(
        &mut self,
        entries: I,
        start: Direction,
        end: Direction,
        selector: MapSelector,
    ) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<T>,
        V: Into<T>,
    {
        let values = entries.into_iter().map(|(key, value)| -> T {
            match selector {
                MapSelector::Key => key.into(),
                MapSelector::Value => value.into(),
            }
        });
        self.fill(values, start, end)
    }
}

impl<T> Matrix<T> {
    /// Apply a navigation command to the cursor or active marker
    pub fn navigate(&mut self, nav: Navigation) -> Result<&mut Self> {
        nav.apply(self)?;
        Ok(self)
    }
}

impl<'a, T> core::ops::Shl<Navigation> for &'a mut Matrix<T> {
    type Output = &'a mut Matrix<T>;

    /// # Panics
    ///
    /// Panics if the command would move the cursor before the origin.
    fn shl(self, nav: Navigation) -> Self::Output {
        if let Err(err) = nav.apply(self) {
            panic!("{err}");
        }
        self
    }
}

impl<'a, T: Default> core::ops::Shl<Cell<T>> for &'a mut Matrix<T> {
    type Output = &'a mut Matrix<T>;

    /// # Panics
    ///
    /// Panics if the active marker is unknown.
    fn shl(self, value: Cell<T>) -> Self::Output {
        if let Err(err) = self.set(value.into_inner()) {
            panic!("{err}");
        }
        self
    }
}

impl<'a, 'b, T: Clone + Default> core::ops::Shl<&'b Matrix<T>> for &'a mut Matrix<T> {
    type Output = &'a mut Matrix<T>;

    /// # Panics
    ///
    /// Panics if the active marker is unknown.
    fn shl(self, other: &'b Matrix<T>) -> Self::Output {
        if let Err(err) = self.attach(other) {
            panic!("{err}");
        }
        self
    }
}
