use super::{builder::NodePoolBuilder, pool_id::PoolId, utilization::Utilization};
use crate::{Error, Node, NodeIdx, Result};
use alloc::vec::Vec;
use orx_pinned_vec::PinnedVec;
use orx_split_vec::{Recursive, SplitVec};
use tracing::{debug, warn};

/// Number of nodes allocated together whenever a pool with the default
/// configuration runs out of free nodes.
pub const DEFAULT_BATCH_SIZE: usize = 1024;

/// A pool of reusable list nodes.
///
/// All nodes live in a split vector; every growth appends one batch of nodes as a
/// new fragment, so that existing nodes are never moved and a [`NodeIdx`] keeps
/// addressing the same node for the lifetime of the pool. Nodes which are not in use
/// by any list are threaded into a free list through their `next` links.
///
/// The pool is the sole consumer of the allocator:
/// * acquiring a node from a non-empty free list never allocates;
/// * acquiring a node from an empty free list allocates exactly one batch;
/// * releasing a node never deallocates; the pool does not shrink.
///
/// The pool performs no internal synchronization. It is meant to be used from a
/// single thread, or to be wrapped in a lock by the caller.
///
/// # Examples
///
/// ```
/// use orx_pooled_list::{List, NodePool};
///
/// let mut pool = NodePool::new();
/// let list = List::new(&mut pool).unwrap();
///
/// list.push(&mut pool, 'a').unwrap();
/// assert_eq!(pool.num_nodes(), 1024);
/// assert_eq!(pool.num_free(), 1022);
///
/// list.destroy(&mut pool);
/// assert_eq!(pool.num_free(), 1024);
/// ```
pub struct NodePool<T> {
    id: PoolId,
    nodes: SplitVec<Node<T>, Recursive>,
    free: Option<NodeIdx>,
    num_free: usize,
    num_batches: usize,
    batch_size: usize,
    max_batches: Option<usize>,
}

impl<T> Default for NodePool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodePool<T> {
    /// Creates a new empty pool growing in batches of [`DEFAULT_BATCH_SIZE`] nodes.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a builder to customize the pool configuration.
    pub fn builder() -> NodePoolBuilder<T> {
        NodePoolBuilder::new()
    }

    pub(crate) fn from_config(batch_size: usize, max_batches: Option<usize>) -> Self {
        debug_assert!(batch_size > 0);
        Self {
            id: PoolId::next(),
            nodes: SplitVec::with_recursive_growth(),
            free: None,
            num_free: 0,
            num_batches: 0,
            batch_size,
            max_batches,
        }
    }

    // get

    /// Returns the identity of the pool; lists created by this pool carry the same id.
    pub fn id(&self) -> PoolId {
        self.id
    }

    /// Returns the number of nodes allocated together on every growth.
    #[inline(always)]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Returns the maximum number of batches the pool may allocate; None if unlimited.
    pub fn max_batches(&self) -> Option<usize> {
        self.max_batches
    }

    /// Returns the number of nodes allocated so far.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of nodes waiting in the free list.
    #[inline(always)]
    pub fn num_free(&self) -> usize {
        self.num_free
    }

    /// Returns the number of nodes serving as list heads or elements.
    pub fn num_in_use(&self) -> usize {
        self.nodes.len() - self.num_free
    }

    /// Returns the number of batches allocated so far.
    pub fn num_batches(&self) -> usize {
        self.num_batches
    }

    /// Returns current node utilization of the pool.
    pub fn utilization(&self) -> Utilization {
        Utilization {
            num_nodes: self.num_nodes(),
            num_free: self.num_free,
            num_in_use: self.num_in_use(),
            num_batches: self.num_batches,
        }
    }

    /// Returns a reference to the node with the given `idx`; None if the index does
    /// not belong to this pool.
    pub fn node(&self, idx: NodeIdx) -> Option<&Node<T>> {
        self.nodes.get(idx.position())
    }

    #[inline(always)]
    pub(crate) fn node_at(&self, idx: NodeIdx) -> &Node<T> {
        &self.nodes[idx.position()]
    }

    #[inline(always)]
    pub(crate) fn node_at_mut(&mut self, idx: NodeIdx) -> &mut Node<T> {
        &mut self.nodes[idx.position()]
    }

    // mut

    /// Detaches a node from the free list and returns its index.
    ///
    /// When the free list is empty, the pool first grows by one batch. The returned
    /// node is vacant, unlinked and its count is zero, as if it was freshly allocated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the free list is empty and the pool could not
    /// grow, either because the allocator refused the batch or because the pool
    /// reached its batch limit. The pool is then left unchanged; growth is attempted
    /// again on the next call.
    pub fn acquire_node(&mut self) -> Result<NodeIdx> {
        if self.free.is_none() {
            self.grow()?;
        }

        let Some(idx) = self.free else {
            return Err(Error::OutOfMemory {
                requested: self.batch_size,
            });
        };

        let node = &mut self.nodes[idx.position()];
        self.free = node.next();
        node.reset();
        self.num_free -= 1;

        Ok(idx)
    }

    /// Pushes the node with the given `idx` to the front of the free list.
    ///
    /// Releasing transfers the node to the pool without clearing it; any payload left
    /// in the node is dropped only when the node is acquired again.
    /// Releasing a node which is still linked into a list, or releasing a node twice,
    /// corrupts the chains involved; the pool does not check for it.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not belong to this pool.
    pub fn release_node(&mut self, idx: NodeIdx) {
        let node = &mut self.nodes[idx.position()];
        node.set_next(self.free);
        self.free = Some(idx);
        self.num_free += 1;
    }

    /// Grows the pool batch by batch until at least `additional` nodes are free.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if a batch could not be allocated. Batches
    /// allocated before the failing one are kept in the free list.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        while self.num_free < additional {
            self.grow()?;
        }
        Ok(())
    }

    /// Allocates one batch of vacant nodes and threads them in front of the free list.
    ///
    /// The batch is reserved at once with a fallible reservation; on failure nothing is
    /// allocated and the pool is untouched.
    fn grow(&mut self) -> Result<()> {
        let requested = self.batch_size;

        if self.max_batches.is_some_and(|max| self.num_batches >= max) {
            warn!(
                num_batches = self.num_batches,
                "node pool reached its batch limit"
            );
            return Err(Error::OutOfMemory { requested });
        }

        let mut batch = Vec::new();
        if batch.try_reserve_exact(requested).is_err() {
            warn!(requested, "allocator refused a batch of pool nodes");
            return Err(Error::OutOfMemory { requested });
        }

        let begin = self.nodes.len();
        let end = begin + requested;
        let last_next = self.free;
        batch.extend((begin + 1..end).map(|next| Node::vacant(Some(NodeIdx::new(next)))));
        batch.push(Node::vacant(last_next));

        self.nodes.append(batch);
        self.free = Some(NodeIdx::new(begin));
        self.num_free += requested;
        self.num_batches += 1;

        debug!(
            num_batches = self.num_batches,
            num_nodes = self.nodes.len(),
            "node pool grew by a batch"
        );

        Ok(())
    }
}
