use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use derive_more::IsVariant;

use super::{Iter, IterMut, Link, Node, NodeRef, Nodes};
use crate::collections::contiguous::ArrayList;
use crate::util::error::NotFound;
use crate::util::fmt::DebugWith;
use crate::util::result::ResultExtension;

/// A list with links in both directions.
///
/// Every insertion returns a [`NodeRef`] to the new node, which can later be used to insert next to
/// that node or remove it without searching by value.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `insert_first/next` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `insert_before/after` | `O(1)`*, `O(n)` |
/// | `remove` | `O(1)`*, `O(n)` |
/// | `get` | `O(1)`*, `O(n)` |
/// | `find` | `O(n)` |
///
/// \* If the provided node is the first or last one. Any other node has to be confirmed as a member
/// of the list by walking it before it is used.
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: usize,
    pub head: NodeRef<T>,
    pub tail: NodeRef<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(contents) => contents.len,
        }
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a handle to the first node, if there is one.
    pub const fn first(&self) -> Option<NodeRef<T>> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(contents.head),
        }
    }

    /// Returns a handle to the last node, if there is one.
    pub const fn last(&self) -> Option<NodeRef<T>> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(contents.tail),
        }
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: The head belongs to self, which is borrowed for the returned lifetime.
        self.first().map(|node| unsafe { node.value() })
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: The head belongs to self, which is mutably borrowed for the returned lifetime.
        self.first().map(|node| unsafe { node.value_mut() })
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: The tail belongs to self, which is borrowed for the returned lifetime.
        self.last().map(|node| unsafe { node.value() })
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: The tail belongs to self, which is mutably borrowed for the returned lifetime.
        self.last().map(|node| unsafe { node.value_mut() })
    }

    /// Adds the provided element to the front of the LinkedList, returning a handle to its node.
    pub fn insert_first(&mut self, value: T) -> NodeRef<T> {
        match &mut self.state {
            Empty => self.insert_only(value),
            Full(contents) => contents.link_between(value, None, Some(contents.head)),
        }
    }

    /// Adds the provided element to the back of the LinkedList, returning a handle to its node. On
    /// an empty list this is the same as [`LinkedList::insert_first`].
    ///
    /// # Examples
    /// ```
    /// # use simple_collections::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.insert_next('b');
    /// list.insert_next('c');
    /// list.insert_first('a');
    /// assert_eq!(list.to_string(), "('a') -> ('b') -> ('c')");
    /// ```
    pub fn insert_next(&mut self, value: T) -> NodeRef<T> {
        match &mut self.state {
            Empty => self.insert_only(value),
            Full(contents) => contents.link_between(value, Some(contents.tail), None),
        }
    }

    /// Inserts `value` directly before `anchor`, returning a handle to the new node.
    ///
    /// # Panics
    /// Panics if `anchor` isn't a node of this list.
    pub fn insert_before(&mut self, value: T, anchor: NodeRef<T>) -> NodeRef<T> {
        self.try_insert_before(value, anchor).throw()
    }

    /// Inserts `value` directly before `anchor`, returning [`NotFound`] (and dropping `value`) if
    /// `anchor` isn't a node of this list.
    pub fn try_insert_before(
        &mut self,
        value: T,
        anchor: NodeRef<T>,
    ) -> Result<NodeRef<T>, NotFound> {
        let contents = self.contents_with(anchor)?;
        Ok(contents.link_between(value, anchor.prev(), Some(anchor)))
    }

    /// Inserts `value` directly after `anchor`, returning a handle to the new node.
    ///
    /// # Panics
    /// Panics if `anchor` isn't a node of this list.
    pub fn insert_after(&mut self, value: T, anchor: NodeRef<T>) -> NodeRef<T> {
        self.try_insert_after(value, anchor).throw()
    }

    /// Inserts `value` directly after `anchor`, returning [`NotFound`] (and dropping `value`) if
    /// `anchor` isn't a node of this list.
    pub fn try_insert_after(
        &mut self,
        value: T,
        anchor: NodeRef<T>,
    ) -> Result<NodeRef<T>, NotFound> {
        let contents = self.contents_with(anchor)?;
        Ok(contents.link_between(value, Some(anchor), anchor.next()))
    }

    /// Removes `node` from the list and returns its value.
    ///
    /// # Panics
    /// Panics if `node` isn't a node of this list.
    pub fn remove(&mut self, node: NodeRef<T>) -> T {
        self.try_remove(node).throw()
    }

    /// Removes `node` from the list and returns its value, or [`NotFound`] if `node` isn't a node
    /// of this list. The handle must not be used again afterwards.
    pub fn try_remove(&mut self, node: NodeRef<T>) -> Result<T, NotFound> {
        self.contents_with(node)?;
        // SAFETY: Membership has just been confirmed.
        unsafe { self.unlink(node) }.ok_or(NotFound)
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.first()?;
        // SAFETY: The head is always a member.
        unsafe { self.unlink(head) }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.last()?;
        // SAFETY: The tail is always a member.
        unsafe { self.unlink(tail) }
    }

    /// Returns a reference to the value of `node`, or None if it isn't a node of this list.
    pub fn get(&self, node: NodeRef<T>) -> Option<&T> {
        if !self.is_member(node) {
            return None;
        }
        // SAFETY: node is a member of self, which is borrowed for the returned lifetime.
        Some(unsafe { node.value() })
    }

    /// Returns a mutable reference to the value of `node`, or None if it isn't a node of this list.
    pub fn get_mut(&mut self, node: NodeRef<T>) -> Option<&mut T> {
        if !self.is_member(node) {
            return None;
        }
        // SAFETY: node is a member of self, which is mutably borrowed for the returned lifetime.
        Some(unsafe { node.value_mut() })
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        *self = LinkedList::new();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Returns true if `node` is one of this list's nodes. The first and last nodes are checked
    /// directly, any other node requires a walk.
    pub fn is_member(&self, node: NodeRef<T>) -> bool {
        match &self.state {
            Empty => false,
            Full(contents) => {
                node == contents.head || node == contents.tail || self.nodes().any(|n| n == node)
            },
        }
    }

    pub(crate) fn nodes(&self) -> Nodes<T> {
        match &self.state {
            Empty => Nodes::empty(),
            Full(contents) => Nodes {
                front: Some(contents.head),
                back: Some(contents.tail),
                remaining: contents.len,
            },
        }
    }

    fn insert_only(&mut self, value: T) -> NodeRef<T> {
        let node = NodeRef::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        self.state = Full(ListContents {
            len: 1,
            head: node,
            tail: node,
        });
        node
    }

    fn contents_with(&mut self, node: NodeRef<T>) -> Result<&mut ListContents<T>, NotFound> {
        if !self.is_member(node) {
            return Err(NotFound);
        }
        match &mut self.state {
            Empty => Err(NotFound),
            Full(contents) => Ok(contents),
        }
    }

    /// Detaches `node`, reconnecting its neighbours, and returns its value.
    ///
    /// # Safety
    /// `node` must be a member of self.
    unsafe fn unlink(&mut self, node: NodeRef<T>) -> Option<T> {
        let Full(contents) = &mut self.state else {
            return None;
        };

        // SAFETY: The caller guarantees membership, and every link to the node is replaced below.
        let Node { value, prev, next } = unsafe { node.take_node() };

        match (prev, next) {
            (None, None) => self.state = Empty,
            (None, Some(next)) => {
                next.set_prev(None);
                contents.head = next;
                contents.len -= 1;
            },
            (Some(prev), None) => {
                prev.set_next(None);
                contents.tail = prev;
                contents.len -= 1;
            },
            (Some(prev), Some(next)) => {
                prev.set_next(Some(next));
                next.set_prev(Some(prev));
                contents.len -= 1;
            },
        }

        Some(value)
    }

    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { head, tail, len }) => {
                assert_eq!(head.prev(), None);
                let mut count = 1;
                let mut curr = *head;
                while let Some(next) = curr.next() {
                    // UNWRAP: This needs to panic if prev is None.
                    assert!(next.prev().unwrap() == curr);
                    curr = next;
                    count += 1;
                }
                assert!(*tail == curr);
                assert_eq!(*len, count);
            },
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns a handle to the first node holding a value equal to `item`.
    pub fn find(&self, item: &T) -> Option<NodeRef<T>> {
        // SAFETY: Every node yielded belongs to self, which is borrowed for the closure's use.
        self.nodes().find(|node| unsafe { node.value() } == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> ListContents<T> {
    /// Creates a node between `prev` and `next` (which must be adjacent, or the ends of the list)
    /// and links it in.
    pub fn link_between(&mut self, value: T, prev: Link<T>, next: Link<T>) -> NodeRef<T> {
        let node = NodeRef::from_node(Node { value, prev, next });

        match prev {
            Some(prev) => prev.set_next(Some(node)),
            None => self.head = node,
        }
        match next {
            Some(next) => next.set_prev(Some(node)),
            None => self.tail = node,
        }

        self.len += 1;
        node
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert_next(item);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut curr = self.first();
        while let Some(node) = curr {
            curr = node.next();
            // SAFETY: Each node is visited once, and the list is never used after this.
            drop(unsafe { node.take_node() });
        }
        self.state = Empty;
    }
}

// SAFETY: The list uniquely owns its nodes, so it can be sent when T can.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: Shared access only hands out &T.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugWith(|f: &mut Formatter<'_>| {
                f.debug_list().entries(self.iter()).finish()
            }))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<ArrayList<String>>()
                .join(") -> (")
        )
    }
}
