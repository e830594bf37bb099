use crate::{Iter, List, NodePool};
use core::fmt::Debug;

impl<T> Debug for NodePool<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodePool")
            .field("batch_size", &self.batch_size())
            .field("max_batches", &self.max_batches())
            .field("num_batches", &self.num_batches())
            .field("num_nodes", &self.num_nodes())
            .field("num_free", &self.num_free())
            .finish_non_exhaustive()
    }
}

impl<T> Debug for List<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("List").field("head", &self.head()).finish()
    }
}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
