//! A module containing [`LinkedList`] and associated types.
//!
//! Other than the list itself, this includes [`NodeRef`], a copyable handle to a node, and the
//! owned, borrowed and mutable iterators.
//!
//! [`LinkedList`] is also re-exported under the parent module.

mod iter;
mod linked_list;
mod node;

pub use iter::*;
pub use linked_list::*;
pub use node::NodeRef;
pub(crate) use node::*;
