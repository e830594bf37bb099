use super::handle::List;
use crate::{NodePool, Result};
use core::cmp::Ordering;

impl<T> List<T> {
    /// Inserts `value` into its position in the list ordered by `compare`.
    ///
    /// `compare(value, existing, context)` is called with the new value, the payload of
    /// an existing element and the `context` which is passed through unchanged. Scanning
    /// from the first element, `value` is inserted right before the first element for
    /// which `compare` returns `Less` or `Equal`; or at the tail if there is none.
    ///
    /// Therefore, a comparator following the usual `Ord` convention keeps the list in
    /// ascending order, while an inverted comparator keeps it in descending order. A new
    /// value equal to existing ones is placed before the first of them.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidHead`] if the list does not belong to the `pool`.
    /// * [`Error::OutOfMemory`] if the pool has no free node and cannot grow.
    ///
    /// The position is found before a node is acquired; the list is unchanged on error.
    ///
    /// [`Error::InvalidHead`]: crate::Error::InvalidHead
    /// [`Error::OutOfMemory`]: crate::Error::OutOfMemory
    ///
    /// # Examples
    ///
    /// ```
    /// use orx_pooled_list::{List, NodePool};
    ///
    /// let mut pool = NodePool::new();
    /// let list = List::new(&mut pool).unwrap();
    ///
    /// let descending = |a: &u32, b: &u32, _: &()| b.cmp(a);
    /// for x in [5, 1, 3] {
    ///     list.priority_insert(&mut pool, x, &(), descending).unwrap();
    /// }
    ///
    /// assert_eq!(list.iter(&pool).copied().collect::<Vec<_>>(), [5, 3, 1]);
    /// ```
    pub fn priority_insert<C, F>(
        &self,
        pool: &mut NodePool<T>,
        value: T,
        context: &C,
        mut compare: F,
    ) -> Result<()>
    where
        C: ?Sized,
        F: FnMut(&T, &T, &C) -> Ordering,
    {
        self.ensure_valid(pool)?;

        let mut prev = self.head();
        while let Some(next) = pool.node_at(prev).next() {
            let goes_before = pool
                .node_at(next)
                .data()
                .is_none_or(|existing| compare(&value, existing, context).is_le());

            if goes_before {
                break;
            }
            prev = next;
        }

        let idx = pool.acquire_node()?;
        self.link_after(pool, prev, idx, value);
        Ok(())
    }
}
