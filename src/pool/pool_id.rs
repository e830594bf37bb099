use core::sync::atomic::{AtomicUsize, Ordering};

static NEXT_POOL_ID: AtomicUsize = AtomicUsize::new(0);

/// Identity of a node pool, distinct for every pool created in the process.
///
/// A list remembers the identity of the pool that created it and ignores any other
/// pool it is handed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PoolId {
    id: usize,
}

impl PoolId {
    pub(crate) fn next() -> Self {
        Self {
            id: NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed),
        }
    }
}
