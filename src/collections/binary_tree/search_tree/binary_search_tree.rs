use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::binary_tree::arena::{NodeArena, NodeId, TreeNode};
use crate::collections::binary_tree::traverse::{Traversal, Traverse};
use crate::collections::contiguous::ArrayList;

/// An unbalanced binary search tree. Every value in a node's left subtree is less than or equal to
/// the node's value and every value in its right subtree is greater, so an in-order traversal
/// yields the values sorted.
///
/// Equal values are kept, not merged: a value equal to an existing node descends to its left.
///
/// # Examples
/// ```
/// # use simple_collections::collections::binary_tree::BinarySearchTree;
/// let tree: BinarySearchTree<u8> = [5, 3, 7, 1].into_iter().collect();
/// assert!(tree.exists(&3));
/// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 3, 5, 7]);
/// ```
pub struct BinarySearchTree<T> {
    pub(crate) arena: NodeArena<T>,
    pub(crate) root: Option<NodeId>,
    pub(crate) len: usize,
}

impl<T> BinarySearchTree<T> {
    pub fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
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

    /// Returns the node for `id`, or `None` if it has been removed.
    pub fn node(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.arena.get(id)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Returns an iterator over the values in the given order. Each call starts from the root.
    pub fn traverse(&self, order: Traversal) -> Traverse<'_, T> {
        Traverse::new(&self.arena, self.root, self.len, order)
    }

    pub fn in_order(&self) -> Traverse<'_, T> {
        self.traverse(Traversal::InOrder)
    }

    pub fn pre_order(&self) -> Traverse<'_, T> {
        self.traverse(Traversal::PreOrder)
    }

    pub fn post_order(&self) -> Traverse<'_, T> {
        self.traverse(Traversal::PostOrder)
    }

    pub fn breadth_first(&self) -> Traverse<'_, T> {
        self.traverse(Traversal::BreadthFirst)
    }

    /// Calls `f` on every value, visiting them in the given order.
    pub fn for_each<F: FnMut(&T)>(&self, order: Traversal, f: F) {
        self.traverse(order).for_each(f);
    }

    /// Unlinks the node for `id` and returns its value.
    ///
    /// A node with two children is replaced by its in-order predecessor, the rightmost node of its
    /// left subtree. The predecessor is relinked rather than having its value moved, so handles to
    /// other nodes stay valid.
    pub(crate) fn remove_node(&mut self, id: NodeId) -> Option<T> {
        let TreeNode { parent, left, right, .. } = *self.arena.get(id)?;

        match (left, right) {
            (Some(left), Some(right)) => {
                let mut pred = left;
                while let Some(next) = self.arena[pred].right {
                    pred = next;
                }

                if pred != left {
                    // The predecessor has no right child, so its left child takes its place.
                    if let Some(pred_parent) = self.arena[pred].parent {
                        let pred_left = self.arena[pred].left;
                        self.arena[pred_parent].right = pred_left;
                        self.arena.set_parent(pred_left, Some(pred_parent));
                    }
                    self.arena[pred].left = Some(left);
                    self.arena[left].parent = Some(pred);
                }

                self.arena[pred].right = Some(right);
                self.arena[right].parent = Some(pred);
                self.arena[pred].parent = parent;
                self.arena.replace_child(&mut self.root, parent, id, Some(pred));
            },
            (child, None) | (None, child) => {
                self.arena.set_parent(child, parent);
                self.arena.replace_child(&mut self.root, parent, id, child);
            },
        }

        self.len -= 1;
        self.arena.remove(id).map(|node| node.value)
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `value` as a new leaf and returns its handle. The tree isn't rebalanced.
    pub fn insert(&mut self, value: T) -> NodeId {
        let Some(mut current) = self.root else {
            let id = self.arena.insert(TreeNode::new(value, None));
            self.root = Some(id);
            self.len += 1;
            return id;
        };

        let goes_left = loop {
            let node = &self.arena[current];
            let goes_left = value <= node.value;
            match if goes_left { node.left } else { node.right } {
                Some(next) => current = next,
                None => break goes_left,
            }
        };

        let id = self.arena.insert(TreeNode::new(value, Some(current)));
        let parent = &mut self.arena[current];
        if goes_left {
            parent.left = Some(id);
        } else {
            parent.right = Some(id);
        }
        self.len += 1;
        id
    }

    /// Returns the handle of a node holding `value`, if there is one.
    pub fn find(&self, value: &T) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.arena[id];
            current = match value.cmp(&node.value) {
                Ordering::Equal => return Some(id),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    pub fn exists(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Removes one node holding `value` and returns its value, or `None` if no node holds it.
    ///
    /// # Examples
    /// ```
    /// # use simple_collections::collections::binary_tree::BinarySearchTree;
    /// let mut tree: BinarySearchTree<u8> = [5, 3, 7].into_iter().collect();
    /// assert_eq!(tree.remove(&5), Some(5));
    /// assert_eq!(tree.remove(&5), None);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let id = self.find(value)?;
        self.remove_node(id)
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.arena.draw(self.root))
    }
}

impl<T: Display> Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.in_order()
                .map(|value| value.to_string())
                .collect::<ArrayList<String>>()
                .join(", ")
        )
    }
}
