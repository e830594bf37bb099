use super::{handle::List, identity::Identity};
use crate::NodePool;

impl<T> List<T> {
    /// Removes the first element identical to `value` and returns it.
    ///
    /// Identity is decided by [`Identity`]: references, pointers and shared pointers
    /// match when they point to the same address, regardless of the pointees.
    ///
    /// Returns None if no element is identical to `value`, or if the list does not
    /// belong to the `pool`.
    ///
    /// # Examples
    ///
    /// ```
    /// use orx_pooled_list::{List, NodePool};
    ///
    /// let (a, b) = (String::from("x"), String::from("x"));
    ///
    /// let mut pool = NodePool::new();
    /// let list = List::new(&mut pool).unwrap();
    /// list.push(&mut pool, &a).unwrap();
    ///
    /// assert_eq!(list.remove_value(&mut pool, &&b), None);
    /// assert!(list.remove_value(&mut pool, &&a).is_some());
    /// assert!(list.is_empty(&pool));
    /// ```
    pub fn remove_value(&self, pool: &mut NodePool<T>, value: &T) -> Option<T>
    where
        T: Identity,
    {
        self.remove_by(pool, |x| x.is_same(value))
    }

    /// Removes the first element satisfying the `predicate` and returns it.
    ///
    /// Returns None if no element satisfies the `predicate`, or if the list does not
    /// belong to the `pool`.
    pub fn remove_by<F>(&self, pool: &mut NodePool<T>, mut predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut prev = self.head();
        let mut current = self.head_node(pool)?.next();

        while let Some(idx) = current {
            let node = pool.node_at(idx);
            if node.data().is_some_and(&mut predicate) {
                return self.unlink_after(pool, prev, idx);
            }

            prev = idx;
            current = node.next();
        }

        None
    }

    /// Returns a reference to the first element identical to `value` without removing it.
    ///
    /// Returns None if no element is identical to `value`, or if the list does not
    /// belong to the `pool`.
    pub fn peek_value<'a>(&self, pool: &'a NodePool<T>, value: &T) -> Option<&'a T>
    where
        T: Identity,
    {
        self.peek_by(pool, |x| x.is_same(value))
    }

    /// Returns a reference to the first element satisfying the `predicate` without
    /// removing it.
    pub fn peek_by<'a, F>(&self, pool: &'a NodePool<T>, mut predicate: F) -> Option<&'a T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter(pool).find(|x| predicate(x))
    }
}
