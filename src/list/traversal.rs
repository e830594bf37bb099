use super::handle::List;
use crate::{Node, NodeIdx, NodePool};
use core::iter::FusedIterator;

/// A detached traversal position in a list.
///
/// A cursor holds only the index of the node to be visited next; it borrows neither the
/// list nor the pool. It is created by [`List::begin_traversal`] and moved forward by
/// [`Cursor::advance`]. Mutating the list while a cursor is in use leads to
/// unspecified, yet memory safe, results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pos: Option<NodeIdx>,
}

impl Cursor {
    /// Returns the element at the current position and moves the cursor to the next one.
    ///
    /// Returns None once the elements are exhausted; the cursor then stays done.
    pub fn advance<'a, T>(&mut self, pool: &'a NodePool<T>) -> Option<&'a T> {
        let node = pool.node(self.pos?);
        match node.and_then(|node| node.data().map(|data| (data, node.next()))) {
            Some((data, next)) => {
                self.pos = next;
                Some(data)
            }
            None => {
                self.pos = None;
                None
            }
        }
    }

    /// Returns true if there is no element left to visit.
    pub fn is_done(&self) -> bool {
        self.pos.is_none()
    }
}

/// Iterator over references to the elements of a list, from the first to the last.
///
/// Created by [`List::iter`]. The iterator borrows the pool; hence, the list cannot be
/// mutated while iterating.
pub struct Iter<'a, T> {
    pool: &'a NodePool<T>,
    cursor: Cursor,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let data = self.cursor.advance(self.pool);
        if data.is_some() {
            self.remaining -= 1;
        }
        data
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<T> List<T> {
    /// Begins a traversal from the first element of the list as of now.
    ///
    /// The cursor is empty if the list is empty or does not belong to the `pool`.
    /// Every call starts a new, independent traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use orx_pooled_list::{List, NodePool};
    ///
    /// let mut pool = NodePool::new();
    /// let list = List::new(&mut pool).unwrap();
    /// list.enqueue(&mut pool, 1).unwrap();
    /// list.enqueue(&mut pool, 2).unwrap();
    ///
    /// let mut cursor = list.begin_traversal(&pool);
    /// assert_eq!(cursor.advance(&pool), Some(&1));
    /// assert_eq!(cursor.advance(&pool), Some(&2));
    /// assert_eq!(cursor.advance(&pool), None);
    /// ```
    pub fn begin_traversal(&self, pool: &NodePool<T>) -> Cursor {
        Cursor {
            pos: self.head_node(pool).and_then(Node::next),
        }
    }

    /// Returns an iterator over references to the elements, from the first to the last.
    pub fn iter<'a>(&self, pool: &'a NodePool<T>) -> Iter<'a, T> {
        Iter {
            pool,
            cursor: self.begin_traversal(pool),
            remaining: self.len(pool),
        }
    }
}
