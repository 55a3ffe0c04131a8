//! Linked collection types, currently just [`LinkedList`] and the [`NodeRef`] handles it hands out
//! for its nodes.

pub mod list;

#[doc(inline)]
pub use list::{LinkedList, NodeRef};
