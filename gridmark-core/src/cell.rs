//! Single-value cell

/// Holds exactly one value of the matrix element type
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell<T> {
    value: T,
}

impl<T> Cell<T> {
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replace the held value, returning the previous one
    pub fn set(&mut self, value: T) -> T {
        core::mem::replace(&mut self.value, value)
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> From<T> for Cell<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> AsRef<T> for Cell<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T> AsMut<T> for Cell<T> {
    fn as_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell_holds_default_value() {
        let cell: Cell<i32> = Cell::default();
        assert_eq!(*cell.get(), 0);
    }

    #[test]
    fn test_set_replaces_value() {
        let mut cell = Cell::from(7);
        assert_eq!(cell.set(9), 7);
        assert_eq!(*cell.get(), 9);

        *cell.get_mut() += 1;
        assert_eq!(cell.into_inner(), 10);
    }
}
