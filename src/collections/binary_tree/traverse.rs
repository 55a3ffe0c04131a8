use std::iter::FusedIterator;

use super::arena::{NodeArena, NodeId};
use crate::collections::adapters::Stack;
use crate::collections::linked::LinkedList;

/// The order in which [`Traverse`] visits the nodes of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Left subtree, node, right subtree. Yields a search tree's values in sorted order.
    #[default]
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
    /// Level by level from the root, left to right within a level.
    BreadthFirst,
}

enum Frame {
    /// Schedule the node and its subtrees according to the order.
    Expand(NodeId),
    /// Yield the node itself.
    Yield(NodeId),
}

enum Pending {
    DepthFirst(Stack<Frame>),
    /// The frontier, oldest first. Appending and popping the front are both `O(1)`.
    BreadthFirst(LinkedList<NodeId>),
}

/// An iterator over the values of a tree in a given [`Traversal`] order. Every node reachable from
/// the root is visited exactly once.
pub struct Traverse<'a, T> {
    arena: &'a NodeArena<T>,
    order: Traversal,
    pending: Pending,
    remaining: usize,
}

impl<'a, T> Traverse<'a, T> {
    pub(crate) fn new(
        arena: &'a NodeArena<T>,
        root: Option<NodeId>,
        len: usize,
        order: Traversal,
    ) -> Traverse<'a, T> {
        let pending = match order {
            Traversal::BreadthFirst => Pending::BreadthFirst(root.into_iter().collect()),
            _ => Pending::DepthFirst(root.into_iter().map(Frame::Expand).collect()),
        };

        Traverse {
            arena,
            order,
            pending,
            remaining: len,
        }
    }

    /// Advances to the next node, returning its handle rather than its value.
    pub fn next_id(&mut self) -> Option<NodeId> {
        let id = match &mut self.pending {
            Pending::BreadthFirst(frontier) => {
                let id = frontier.pop_front()?;
                let node = self.arena.get(id)?;
                for child in [node.left, node.right].into_iter().flatten() {
                    frontier.insert_next(child);
                }
                id
            },
            Pending::DepthFirst(stack) => loop {
                match stack.pop().ok()? {
                    Frame::Yield(id) => break id,
                    Frame::Expand(id) => {
                        let node = self.arena.get(id)?;
                        // The stack is last-in first-out, so frames are pushed in reverse.
                        let left = node.left.map(Frame::Expand);
                        let right = node.right.map(Frame::Expand);
                        let this = Some(Frame::Yield(id));
                        let frames = match self.order {
                            Traversal::PreOrder => [right, left, this],
                            Traversal::PostOrder => [this, right, left],
                            _ => [right, this, left],
                        };
                        for frame in frames.into_iter().flatten() {
                            stack.push(frame);
                        }
                    },
                }
            },
        };

        self.remaining = self.remaining.saturating_sub(1);
        Some(id)
    }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let id = self.next_id()?;
        arena.get(id).map(|node| &node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Traverse<'_, T> {}

impl<T> FusedIterator for Traverse<'_, T> {}
