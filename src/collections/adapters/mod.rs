//! Thin adapters over the list types: [`Stack`], a last-in first-out stack backed by a
//! [`LinkedList`](crate::collections::linked::LinkedList), and [`Queue`], a first-in first-out
//! queue backed by an [`ArrayList`](crate::collections::contiguous::ArrayList).
//!
//! Both report reads from an empty collection as
//! [`EmptyCollection`](crate::error::EmptyCollection).

pub mod queue;
pub mod stack;

#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;
