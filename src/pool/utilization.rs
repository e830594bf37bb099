/// Node utilization of a [`NodePool`].
///
/// The result contains the following bits of information:
/// * `num_nodes`: number of nodes allocated so far; the pool never shrinks.
/// * `num_free`: number of nodes waiting in the free list.
/// * `num_in_use`: number of nodes serving as list heads or elements.
/// * `num_batches`: number of batches that the nodes were allocated in.
///
/// Note that `num_free + num_in_use` is always equal to `num_nodes`.
///
/// [`NodePool`]: crate::NodePool
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Utilization {
    /// Number of nodes allocated so far.
    pub num_nodes: usize,
    /// Number of nodes waiting in the free list.
    pub num_free: usize,
    /// Number of nodes serving as list heads or elements.
    pub num_in_use: usize,
    /// Number of batches that the nodes were allocated in.
    pub num_batches: usize,
}
