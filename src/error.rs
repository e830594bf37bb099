use thiserror::Error;

/// Errors reported by the node pool and the list operations built on it.
///
/// Exhaustion of a list is not an error: popping, dequeuing, visiting or
/// searching an empty list yields `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The pool had no free node and could not grow by another batch.
    ///
    /// Either the allocator refused the batch or the pool reached its configured
    /// batch limit. The pool is left exactly as it was before the attempt and a
    /// later call may try to grow again.
    #[error("node pool could not grow by a batch of {requested} nodes")]
    OutOfMemory {
        /// Number of nodes the failed growth attempted to allocate.
        requested: usize,
    },

    /// The list handle does not designate a live list head of the given pool.
    #[error("list handle does not refer to a live list head of this pool")]
    InvalidHead,
}

/// A specialized `Result` type for pool and list operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = core::result::Result<T, Error>;
