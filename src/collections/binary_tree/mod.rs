//! Pointer-style binary trees: [`BinarySearchTree`] and [`MinHeap`].
//!
//! Both keep their nodes in a [`NodeArena`](arena::NodeArena) and link them with [`NodeId`]
//! handles in every direction (parent, left and right), so no node owns another. Traversal in any
//! [`Traversal`] order is shared between them.
//!
//! [`BinarySearchTree`] and [`MinHeap`] are also re-exported under this module.

pub mod arena;
pub mod min_heap;
pub mod search_tree;
pub mod traverse;

#[doc(inline)]
pub use arena::{NodeId, TreeNode};
#[doc(inline)]
pub use min_heap::MinHeap;
#[doc(inline)]
pub use search_tree::BinarySearchTree;
#[doc(inline)]
pub use traverse::{Traversal, Traverse};
