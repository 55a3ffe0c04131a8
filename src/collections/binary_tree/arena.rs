//! Storage for tree nodes. Nodes refer to each other through [`NodeId`]s rather than pointers, so
//! parent links don't create ownership cycles.

use std::fmt::Debug;
use std::ops::{Index, IndexMut};

use crate::collections::contiguous::ArrayList;

/// A handle to a node of a [`BinarySearchTree`](super::BinarySearchTree) or
/// [`MinHeap`](super::MinHeap). A handle to a removed node resolves to nothing until its slot is
/// reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A node of a binary tree: a value plus links to its parent and children.
#[derive(Debug, Clone)]
pub struct TreeNode<T> {
    pub(crate) value: T,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> TreeNode<T> {
    pub(crate) const fn new(value: T, parent: Option<NodeId>) -> TreeNode<T> {
        TreeNode {
            value,
            parent,
            left: None,
            right: None,
        }
    }

    pub const fn value(&self) -> &T {
        &self.value
    }

    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub const fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub const fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns true if exactly one child is present.
    pub const fn has_one_child(&self) -> bool {
        self.left.is_some() != self.right.is_some()
    }
}

/// Slot storage for [`TreeNode`]s. Vacated slots are recycled before the storage grows.
pub struct NodeArena<T> {
    pub(crate) slots: ArrayList<Option<TreeNode<T>>>,
    pub(crate) vacant: ArrayList<usize>,
}

impl<T> NodeArena<T> {
    pub fn new() -> NodeArena<T> {
        NodeArena {
            slots: ArrayList::new(),
            vacant: ArrayList::new(),
        }
    }

    /// Stores `node`, returning its handle.
    pub fn insert(&mut self, node: TreeNode<T>) -> NodeId {
        match self.vacant.remove_last() {
            Some(index) => {
                self.slots[index] = Some(node);
                NodeId(index)
            },
            None => {
                self.slots.add(Some(node));
                NodeId(self.slots.len() - 1)
            },
        }
    }

    /// Removes and returns the node for `id`, vacating its slot.
    pub fn remove(&mut self, id: NodeId) -> Option<TreeNode<T>> {
        let node = self.slots.get_mut(id.0)?.take()?;
        self.vacant.add(id.0);
        Some(node)
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.slots.get(id.0)?.as_ref()
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut TreeNode<T>> {
        self.slots.get_mut(id.0)?.as_mut()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
    }

    /// Points `parent`'s link to `old` at `new` instead. Without a parent, `old` was the root, so
    /// `root` is updated.
    pub(crate) fn replace_child(
        &mut self,
        root: &mut Option<NodeId>,
        parent: Option<NodeId>,
        old: NodeId,
        new: Option<NodeId>,
    ) {
        match parent {
            None => *root = new,
            Some(parent) => {
                let parent = &mut self[parent];
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    parent.right = new;
                }
            },
        }
    }

    pub(crate) fn set_parent(&mut self, child: Option<NodeId>, parent: Option<NodeId>) {
        if let Some(child) = child {
            self[child].parent = parent;
        }
    }
}

impl<T: Debug> NodeArena<T> {
    /// Draws the subtree at `id` sideways: left subtrees above their parent (prefixed with `┌`),
    /// right subtrees below (prefixed with `└`) and `-` for a missing child.
    pub(crate) fn draw(&self, id: Option<NodeId>) -> String {
        match id.and_then(|id| self.get(id)) {
            Some(node) => format!(
                "{}\n({:?})\n{}",
                self.draw(node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<ArrayList<_>>()
                    .join("\n"),
                node.value,
                self.draw(node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<ArrayList<_>>()
                    .join("\n")
            ),
            None => String::from("-"),
        }
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = TreeNode<T>;

    /// # Panics
    /// Panics if `id` refers to a vacant slot. Handles stored in live links never do.
    fn index(&self, id: NodeId) -> &Self::Output {
        match self.get(id) {
            Some(node) => node,
            None => panic!("No node for {id:?}!"),
        }
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("No node for {id:?}!"),
        }
    }
}
