use super::node_pool::{DEFAULT_BATCH_SIZE, NodePool};
use core::marker::PhantomData;
use core::num::NonZeroUsize;

/// Builder for creating an instance of [`NodePool`].
///
/// You only need to use this builder if you want to customize the pool configuration.
/// The default configuration used by [`NodePool::new()`] grows the pool in batches of
/// [`DEFAULT_BATCH_SIZE`] nodes without any limit.
///
/// # Examples
///
/// ```
/// use core::num::NonZeroUsize;
/// use orx_pooled_list::NodePool;
///
/// let pool = NodePool::<&str>::builder()
///     .batch_size(NonZeroUsize::new(64).unwrap())
///     .max_batches(4)
///     .build();
///
/// assert_eq!(pool.batch_size(), 64);
/// assert_eq!(pool.max_batches(), Some(4));
/// ```
#[must_use]
pub struct NodePoolBuilder<T> {
    batch_size: usize,
    max_batches: Option<usize>,

    _item: PhantomData<T>,
}

impl<T> core::fmt::Debug for NodePoolBuilder<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodePoolBuilder")
            .field("item_type", &core::any::type_name::<T>())
            .field("batch_size", &self.batch_size)
            .field("max_batches", &self.max_batches)
            .finish()
    }
}

impl<T> Default for NodePoolBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodePoolBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            max_batches: None,
            _item: PhantomData,
        }
    }

    /// Sets the number of nodes allocated together whenever the pool runs out of
    /// free nodes.
    pub fn batch_size(mut self, batch_size: NonZeroUsize) -> Self {
        self.batch_size = batch_size.get();
        self
    }

    /// Sets the maximum number of batches the pool may allocate.
    ///
    /// Once the limit is reached, acquiring a node from an exhausted pool fails with
    /// [`Error::OutOfMemory`], exactly as if the allocator refused the batch.
    ///
    /// [`Error::OutOfMemory`]: crate::Error::OutOfMemory
    pub fn max_batches(mut self, max_batches: usize) -> Self {
        self.max_batches = Some(max_batches);
        self
    }

    /// Builds the node pool with the specified configuration.
    ///
    /// No node is allocated until the first one is acquired.
    #[must_use]
    pub fn build(self) -> NodePool<T> {
        NodePool::from_config(self.batch_size, self.max_batches)
    }
}
