//! The collection types of this crate, grouped by how they store their elements.
//!
//! # Method
//! Higher level structures are built from lower level ones wherever possible: the hash table's
//! bucket table and its buckets are [`ArrayList`](contiguous::ArrayList)s, the trees keep their
//! nodes in an arena backed by one, and the stack and queue adapt the list types.

pub mod adapters;
pub mod binary_tree;
pub mod contiguous;
pub mod hash;
pub mod linked;
