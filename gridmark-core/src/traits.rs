//! Shared capabilities of the growable containers

/// Containers that grow by appending default entries
pub trait Expandable {
    /// Append default entries until index `n` (plus any configured slack) is addressable
    ///
    /// Never shrinks and never fails; calling it on a container that is
    /// already long enough is a no-op.
    fn expand(&mut self, n: usize);
}
