use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;

// Every NodeRef that reaches these accessors points to a node owned by a live list: handles
// supplied by callers are checked for membership first. That is the invariant the unsafe blocks
// below rely on.

pub(crate) type Link<T> = Option<NodeRef<T>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Link<T>,
    pub(crate) next: Link<T>,
}

/// A handle to a node of a [`LinkedList`](super::LinkedList).
///
/// Handles are cheap to copy and compare, but they don't borrow the list, so one may outlive its
/// node. The list only follows a handle after confirming that it refers to one of its own nodes,
/// so a stale or foreign handle is reported as [`NotFound`](crate::error::NotFound) rather than
/// being dereferenced.
pub struct NodeRef<T>(NonNull<Node<T>>);

impl<T> NodeRef<T> {
    /// Moves `node` to the heap and returns a handle to it. The node is leaked until it is
    /// reclaimed with [`NodeRef::take_node`].
    pub(crate) fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Reclaims the node, moving it off the heap.
    ///
    /// # Safety
    /// The node must be owned by a list and must not be used through any other handle afterwards.
    pub(crate) unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak in from_node and is reclaimed only once.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    /// # Safety
    /// The node must be owned by a list that outlives `'a` without mutating this value.
    pub(crate) const unsafe fn value<'a>(self) -> &'a T {
        // SAFETY: Upheld by the caller.
        unsafe { &(*self.0.as_ptr()).value }
    }

    /// # Safety
    /// The node must be owned by a list that is mutably borrowed for `'a`, and no other reference
    /// to this value may exist.
    pub(crate) const unsafe fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: Upheld by the caller.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub(crate) const fn prev(self) -> Link<T> {
        // SAFETY: See the module invariant.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub(crate) const fn next(self) -> Link<T> {
        // SAFETY: See the module invariant.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub(crate) fn set_prev(self, link: Link<T>) {
        // SAFETY: See the module invariant.
        unsafe { (*self.0.as_ptr()).prev = link }
    }

    pub(crate) fn set_next(self, link: Link<T>) {
        // SAFETY: See the module invariant.
        unsafe { (*self.0.as_ptr()).next = link }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodeRef<T> {}

impl<T> Debug for NodeRef<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&self.0).finish()
    }
}
