use crate::NodeIdx;
use core::fmt::Debug;

/// Role that a node currently plays in its pool.
#[derive(Clone, PartialEq, Eq)]
pub enum NodeKind<T> {
    /// The node sits in the free list of the pool, or has just been acquired.
    Vacant,
    /// The node is the entry point of a list; it never carries a payload.
    Head,
    /// The node carries a payload of a list.
    Element(T),
}

impl<T> Default for NodeKind<T> {
    fn default() -> Self {
        Self::Vacant
    }
}

impl<T: Debug> Debug for NodeKind<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Vacant => f.write_str("Vacant"),
            Self::Head => f.write_str("Head"),
            Self::Element(data) => f.debug_tuple("Element").field(data).finish(),
        }
    }
}

/// Node of the pool; the sole structural unit of every list.
///
/// * `num` is the number of elements of the list when the node is a head; it is
///   zero otherwise.
/// * `kind` tells whether the node is vacant, a list head or an element.
/// * `next` links the node to the following node of whichever chain owns it,
///   a list or the free list of the pool.
pub struct Node<T> {
    num: usize,
    kind: NodeKind<T>,
    next: Option<NodeIdx>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::vacant(None)
    }
}

impl<T> Node<T> {
    /// Creates a vacant node linked to `next`.
    pub(crate) fn vacant(next: Option<NodeIdx>) -> Self {
        Self {
            num: 0,
            kind: NodeKind::Vacant,
            next,
        }
    }

    // ref

    /// Returns the element count of the list if this node is a head; zero otherwise.
    #[inline(always)]
    pub fn num(&self) -> usize {
        self.num
    }

    /// Returns the role of the node.
    pub fn kind(&self) -> &NodeKind<T> {
        &self.kind
    }

    /// Returns a reference to the payload; None if the node is not an element.
    #[inline(always)]
    pub fn data(&self) -> Option<&T> {
        match &self.kind {
            NodeKind::Element(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the index of the following node.
    #[inline(always)]
    pub fn next(&self) -> Option<NodeIdx> {
        self.next
    }

    /// Returns true if the node is the head of a list.
    #[inline(always)]
    pub fn is_head(&self) -> bool {
        matches!(self.kind, NodeKind::Head)
    }

    /// Returns true if the node carries a payload.
    #[inline(always)]
    pub fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element(_))
    }

    /// Returns true if the node is neither a head nor an element.
    #[inline(always)]
    pub fn is_vacant(&self) -> bool {
        matches!(self.kind, NodeKind::Vacant)
    }

    // mut

    /// Brings the node back to its freshly allocated state, dropping any payload
    /// left behind.
    pub(crate) fn reset(&mut self) {
        self.num = 0;
        self.kind = NodeKind::Vacant;
        self.next = None;
    }

    /// Marks the node vacant, dropping its payload if it had one; `num` and `next`
    /// are kept.
    pub(crate) fn make_vacant(&mut self) {
        self.kind = NodeKind::Vacant;
    }

    pub(crate) fn set_next(&mut self, next: Option<NodeIdx>) {
        self.next = next;
    }

    pub(crate) fn become_head(&mut self) {
        self.num = 0;
        self.kind = NodeKind::Head;
    }

    pub(crate) fn set_data(&mut self, data: T) {
        self.kind = NodeKind::Element(data);
    }

    /// Makes the node vacant and returns its payload if it had one.
    pub(crate) fn take_data(&mut self) -> Option<T> {
        match core::mem::take(&mut self.kind) {
            NodeKind::Element(data) => Some(data),
            _ => None,
        }
    }

    pub(crate) fn increment_num(&mut self) {
        self.num += 1;
    }

    pub(crate) fn decrement_num(&mut self) {
        debug_assert!(self.num > 0);
        self.num -= 1;
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Node")
            .field("num", &self.num)
            .field("kind", &self.kind)
            .field("next", &self.next)
            .finish()
    }
}
