//! Construction settings for a matrix

/// Initial extent and grow increment for a [`Matrix`](crate::Matrix)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixConfig {
    /// Extra rows appended beyond the requested index when the matrix grows
    pub grow: usize,
    /// Cells in each pre-sized row
    pub width: usize,
    /// Number of pre-sized rows
    pub height: usize,
}

impl MatrixConfig {
    /// Config for a `width` x `height` matrix of default cells
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the grow increment
    pub fn with_grow(mut self, grow: usize) -> Self {
        self.grow = grow;
        self
    }

    /// Set the initial width
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the initial height
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            grow: 0,
            width: 0,
            height: 0,
        }
    }
}
