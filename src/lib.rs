//! Fundamental data structures, written from scratch rather than built on top of [`std`]'s
//! collections.
//!
//! # Purpose
//! This crate exists as a learning exercise. Each structure is small enough to read in one sitting,
//! but written carefully enough that it keeps its invariants under any sequence of safe calls.
//!
//! # Contents
//! - [`ArrayList`](collections::contiguous::ArrayList): a growable array with an absolute capacity
//!   ceiling, backed by a raw [`Array`](collections::contiguous::Array).
//! - [`HashTable`](collections::hash::HashTable): open hashing over prime-sized tables, with
//!   fixed-capacity buckets that force a rehash when they overflow.
//! - [`LinkedList`](collections::linked::LinkedList): a doubly linked list with node handles.
//! - [`BinarySearchTree`](collections::binary_tree::BinarySearchTree) and
//!   [`MinHeap`](collections::binary_tree::MinHeap): pointer-style binary trees with parent links,
//!   stored in an arena.
//! - [`Stack`](collections::adapters::Stack) and [`Queue`](collections::adapters::Queue): thin
//!   adapters over the list types.
//!
//! # Error Handling
//! Fallible operations come in pairs: a `try_` method that returns a strongly typed [`Result`] and
//! a plain method that panics with the error's message. Error types are small structs (often ZSTs)
//! that implement [`Error`](std::error::Error), combined into enums when a method can fail in more
//! than one way. They are re-exported from [`error`].
//!
//! # Logging
//! Reallocations and rehashes are reported through the [`log`] facade. No logger is installed by
//! this crate.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

/// Error types shared by all collections.
pub mod error {
    #[doc(inline)]
    pub use crate::util::error::*;
}
