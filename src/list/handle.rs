use crate::{Error, Node, NodeIdx, NodePool, PoolId, Result};
use core::marker::PhantomData;
use tracing::trace;

/// Handle of a singly linked list whose nodes live in a [`NodePool`].
///
/// The list is identified by its head node, which is acquired from the pool when the
/// list is created. The head never carries a payload; it links to the first element
/// and keeps the number of elements of the list.
///
/// Every operation takes the pool that created the list. The handle is neither `Clone`
/// nor `Copy` and [`destroy`] consumes it; hence, a destroyed list cannot be used again.
///
/// Insertion and removal ends combine as follows:
///
/// | insert      | remove      | ordering |
/// |-------------|-------------|----------|
/// | [`push`]    | [`pop`]     | LIFO     |
/// | [`push`]    | [`dequeue`] | FIFO     |
/// | [`enqueue`] | [`pop`]     | FIFO     |
/// | [`enqueue`] | [`dequeue`] | LIFO     |
///
/// [`destroy`]: List::destroy
/// [`push`]: List::push
/// [`pop`]: List::pop
/// [`enqueue`]: List::enqueue
/// [`dequeue`]: List::dequeue
///
/// # Examples
///
/// ```
/// use orx_pooled_list::{List, NodePool};
///
/// let mut pool = NodePool::new();
/// let list = List::new(&mut pool).unwrap();
///
/// list.push(&mut pool, "a").unwrap();
/// list.push(&mut pool, "b").unwrap();
/// list.push(&mut pool, "c").unwrap();
///
/// assert_eq!(list.pop(&mut pool), Some("c"));
/// assert_eq!(list.dequeue(&mut pool), Some("a"));
/// assert_eq!(list.pop(&mut pool), Some("b"));
/// assert_eq!(list.pop(&mut pool), None);
///
/// list.destroy(&mut pool);
/// ```
pub struct List<T> {
    head: NodeIdx,
    pool: PoolId,
    phantom: PhantomData<fn() -> T>,
}

impl<T> List<T> {
    /// Creates a new empty list, acquiring its head node from the `pool`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the pool has no free node and cannot grow.
    pub fn new(pool: &mut NodePool<T>) -> Result<Self> {
        let head = pool.acquire_node()?;
        pool.node_at_mut(head).become_head();
        trace!(head = head.position(), "created list");

        Ok(Self {
            head,
            pool: pool.id(),
            phantom: PhantomData,
        })
    }

    /// Drains all elements of the list back to the `pool` and finally releases the
    /// head node itself.
    ///
    /// Remaining payloads are dropped. Destroying a list which does not belong to the
    /// `pool` does nothing.
    pub fn destroy(self, pool: &mut NodePool<T>) {
        if !self.is_valid_for(pool) {
            return;
        }

        let mut num_drained = 0usize;
        while self.pop(pool).is_some() {
            num_drained += 1;
        }

        pool.node_at_mut(self.head).make_vacant();
        pool.release_node(self.head);
        trace!(head = self.head.position(), num_drained, "destroyed list");
    }

    // get

    /// Returns the index of the head node of the list.
    pub fn head(&self) -> NodeIdx {
        self.head
    }

    /// Returns the identity of the pool that created the list.
    pub fn pool_id(&self) -> PoolId {
        self.pool
    }

    /// Returns true if the list was created by the `pool` and its head is still a live
    /// list head there.
    pub fn is_valid_for(&self, pool: &NodePool<T>) -> bool {
        self.head_node(pool).is_some()
    }

    /// Returns the number of elements of the list; zero if the list is not valid for
    /// the `pool`.
    pub fn len(&self, pool: &NodePool<T>) -> usize {
        self.head_node(pool).map_or(0, Node::num)
    }

    /// Returns whether or not the list has any elements.
    pub fn is_empty(&self, pool: &NodePool<T>) -> bool {
        self.len(pool) == 0
    }

    /// Returns a reference to the first element, the one [`pop`] would remove, without
    /// removing it.
    ///
    /// [`pop`]: List::pop
    pub fn visit_top<'a>(&self, pool: &'a NodePool<T>) -> Option<&'a T> {
        let first = self.head_node(pool)?.next()?;
        pool.node_at(first).data()
    }

    pub(crate) fn head_node<'a>(&self, pool: &'a NodePool<T>) -> Option<&'a Node<T>> {
        match pool.id() == self.pool {
            true => pool.node(self.head).filter(|node| node.is_head()),
            false => None,
        }
    }

    pub(crate) fn ensure_valid(&self, pool: &NodePool<T>) -> Result<()> {
        match self.is_valid_for(pool) {
            true => Ok(()),
            false => Err(Error::InvalidHead),
        }
    }

    // mut

    /// Inserts `value` as the first element of the list; this is the stack push.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidHead`] if the list does not belong to the `pool`.
    /// * [`Error::OutOfMemory`] if the pool has no free node and cannot grow.
    ///
    /// The list is unchanged on error.
    pub fn push(&self, pool: &mut NodePool<T>, value: T) -> Result<()> {
        self.ensure_valid(pool)?;
        let idx = pool.acquire_node()?;
        self.link_after(pool, self.head, idx, value);
        Ok(())
    }

    /// Removes and returns the first element of the list; this is the stack pop.
    ///
    /// Returns None if the list is empty or does not belong to the `pool`.
    pub fn pop(&self, pool: &mut NodePool<T>) -> Option<T> {
        let first = self.head_node(pool)?.next()?;
        self.unlink_after(pool, self.head, first)
    }

    /// Appends `value` as the last element of the list.
    ///
    /// The tail is found by walking the list from its head; hence, the cost of this
    /// operation is linear in the length of the list.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidHead`] if the list does not belong to the `pool`.
    /// * [`Error::OutOfMemory`] if the pool has no free node and cannot grow.
    ///
    /// The list is unchanged on error.
    pub fn enqueue(&self, pool: &mut NodePool<T>, value: T) -> Result<()> {
        self.ensure_valid(pool)?;
        let idx = pool.acquire_node()?;

        let mut last = self.head;
        while let Some(next) = pool.node_at(last).next() {
            last = next;
        }

        self.link_after(pool, last, idx, value);
        Ok(())
    }

    /// Removes and returns the last element of the list.
    ///
    /// Together with [`push`], this realizes first-in-first-out ordering. The tail and
    /// its predecessor are found by walking the list; the cost is linear in its length.
    ///
    /// Returns None if the list is empty or does not belong to the `pool`.
    ///
    /// [`push`]: List::push
    pub fn dequeue(&self, pool: &mut NodePool<T>) -> Option<T> {
        let mut prev = self.head;
        let mut last = self.head_node(pool)?.next()?;

        while let Some(next) = pool.node_at(last).next() {
            prev = last;
            last = next;
        }

        self.unlink_after(pool, prev, last)
    }

    /// Links the acquired node `idx` holding `value` right after `prev`.
    pub(crate) fn link_after(
        &self,
        pool: &mut NodePool<T>,
        prev: NodeIdx,
        idx: NodeIdx,
        value: T,
    ) {
        let next = pool.node_at(prev).next();

        let node = pool.node_at_mut(idx);
        node.set_data(value);
        node.set_next(next);

        pool.node_at_mut(prev).set_next(Some(idx));
        pool.node_at_mut(self.head).increment_num();
    }

    /// Unlinks the node `idx` following `prev`, releases it to the pool and returns
    /// its payload.
    pub(crate) fn unlink_after(
        &self,
        pool: &mut NodePool<T>,
        prev: NodeIdx,
        idx: NodeIdx,
    ) -> Option<T> {
        let node = pool.node_at_mut(idx);
        let next = node.next();
        let value = node.take_data();

        pool.node_at_mut(prev).set_next(next);
        pool.release_node(idx);
        pool.node_at_mut(self.head).decrement_num();

        value
    }
}
