//! Named coordinate origins

/// A fixed `(x, y)` offset registered under a name in a matrix
///
/// While a marker is the matrix's active marker, cell `(x, y)` resolves to the
/// absolute cell `(x + marker.x, y + marker.y)`. Markers hold no reference
/// back to their matrix; the matrix owns them in its marker table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    x: usize,
    y: usize,
}

impl Marker {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub const fn x(&self) -> usize {
        self.x
    }

    pub const fn y(&self) -> usize {
        self.y
    }

    /// Translate a marker-relative position into the absolute frame
    pub const fn resolve(&self, x: usize, y: usize) -> (usize, usize) {
        (x + self.x, y + self.y)
    }
}
