use core::fmt::Debug;

/// A stable handle to a node slot of a [`NodePool`].
///
/// Nodes are never moved or deallocated while their pool is alive; therefore, an
/// index keeps addressing the same slot for the lifetime of the pool. The node
/// behind it may, however, be released and reused by another list.
///
/// [`NodePool`]: crate::NodePool
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIdx(usize);

impl Debug for NodeIdx {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("NodeIdx").field(&self.0).finish()
    }
}

impl NodeIdx {
    #[inline(always)]
    pub(crate) const fn new(position: usize) -> Self {
        Self(position)
    }

    /// Returns the position of the node in the underlying storage of the pool.
    #[inline(always)]
    pub const fn position(&self) -> usize {
        self.0
    }
}
