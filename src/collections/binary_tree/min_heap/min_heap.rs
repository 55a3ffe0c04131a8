use std::fmt::{self, Debug, Formatter};

use crate::collections::binary_tree::arena::{NodeArena, NodeId, TreeNode};
use crate::collections::binary_tree::traverse::{Traversal, Traverse};

/// A binary min-heap built from linked nodes rather than an implicit array. The tree is always
/// complete and every node's value is greater than or equal to its parent's.
///
/// Positions are numbered from 1 in level order. The path from the root to position `p` is given by
/// the binary digits of `p` after the leading one: 0 descends left, 1 descends right. Values stay
/// in their nodes, so restoring the heap order relinks nodes instead and handles returned by
/// [`insert`](MinHeap::insert) keep referring to the same value.
///
/// # Examples
/// ```
/// # use simple_collections::collections::binary_tree::MinHeap;
/// let mut heap: MinHeap<u8> = [4, 1, 3].into_iter().collect();
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(3));
/// ```
pub struct MinHeap<T> {
    pub(crate) arena: NodeArena<T>,
    pub(crate) root: Option<NodeId>,
    pub(crate) len: usize,
}

impl<T> MinHeap<T> {
    pub fn new() -> MinHeap<T> {
        MinHeap {
            arena: NodeArena::new(),
            root: None,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.arena.get(id)
    }

    /// Returns the smallest value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.root.and_then(|id| self.arena.get(id)).map(|node| &node.value)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    pub fn traverse(&self, order: Traversal) -> Traverse<'_, T> {
        Traverse::new(&self.arena, self.root, self.len, order)
    }

    /// Returns an iterator over the values in level order, which is position order.
    pub fn breadth_first(&self) -> Traverse<'_, T> {
        self.traverse(Traversal::BreadthFirst)
    }

    /// Returns the node at the 1-based level-order `position`, or `None` for position 0 or a
    /// position past the last node.
    pub(crate) fn node_at(&self, position: usize) -> Option<NodeId> {
        if position == 0 {
            return None;
        }

        let mut current = self.root?;
        let depth = usize::BITS - 1 - position.leading_zeros();
        for bit in (0..depth).rev() {
            let node = self.arena.get(current)?;
            let next = if (position >> bit) & 1 == 0 { node.left } else { node.right };
            current = next?;
        }
        Some(current)
    }

    /// Exchanges the positions of `id` and its parent by relinking both nodes, their children, the
    /// sibling of `id` and the grandparent.
    pub(crate) fn swap_with_parent(&mut self, id: NodeId) {
        let Some(parent) = self.arena[id].parent else {
            return;
        };
        let grandparent = self.arena[parent].parent;
        self.arena.replace_child(&mut self.root, grandparent, parent, Some(id));

        let (left, right) = (self.arena[id].left, self.arena[id].right);
        let (parent_left, parent_right) = (self.arena[parent].left, self.arena[parent].right);
        let (new_left, new_right, sibling) = if parent_left == Some(id) {
            (Some(parent), parent_right, parent_right)
        } else {
            (parent_left, Some(parent), parent_left)
        };

        let node = &mut self.arena[id];
        node.parent = grandparent;
        node.left = new_left;
        node.right = new_right;
        self.arena.set_parent(sibling, Some(id));

        let old_parent = &mut self.arena[parent];
        old_parent.parent = Some(id);
        old_parent.left = left;
        old_parent.right = right;
        self.arena.set_parent(left, Some(parent));
        self.arena.set_parent(right, Some(parent));
    }
}

impl<T: Ord> MinHeap<T> {
    /// Adds `value` at the next free position and moves it up until its parent is no greater.
    pub fn insert(&mut self, value: T) -> NodeId {
        let position = self.len + 1;
        let parent = self.node_at(position >> 1);
        let id = self.arena.insert(TreeNode::new(value, parent));

        match parent {
            None => self.root = Some(id),
            Some(parent) if position & 1 == 0 => self.arena[parent].left = Some(id),
            Some(parent) => self.arena[parent].right = Some(id),
        }
        self.len += 1;

        self.bubble_up(id);
        id
    }

    /// Removes and returns the smallest value. The last node takes the root's place and moves down
    /// until neither child is smaller.
    pub fn pop(&mut self) -> Option<T> {
        let root = self.root?;
        let last = self.node_at(self.len)?;

        if last == root {
            self.root = None;
        } else {
            let last_parent = self.arena[last].parent;
            self.arena.replace_child(&mut self.root, last_parent, last, None);

            let (left, right) = (self.arena[root].left, self.arena[root].right);
            let node = &mut self.arena[last];
            node.parent = None;
            node.left = left;
            node.right = right;
            self.arena.set_parent(left, Some(last));
            self.arena.set_parent(right, Some(last));
            self.root = Some(last);
        }

        self.len -= 1;
        let value = self.arena.remove(root).map(|node| node.value);
        if self.root.is_some() {
            self.bubble_down(last);
        }
        value
    }

    fn bubble_up(&mut self, id: NodeId) {
        while let Some(parent) = self.arena[id].parent {
            if self.arena[id].value < self.arena[parent].value {
                self.swap_with_parent(id);
            } else {
                break;
            }
        }
    }

    fn bubble_down(&mut self, id: NodeId) {
        loop {
            let node = &self.arena[id];
            let smaller = match (node.left, node.right) {
                (Some(left), Some(right)) => {
                    if self.arena[right].value < self.arena[left].value { right } else { left }
                },
                (Some(child), None) | (None, Some(child)) => child,
                (None, None) => break,
            };

            if self.arena[smaller].value < self.arena[id].value {
                self.swap_with_parent(smaller);
            } else {
                break;
            }
        }
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = MinHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Debug> Debug for MinHeap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.arena.draw(self.root))
    }
}
