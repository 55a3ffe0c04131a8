//! A module containing [`Array`] and [`IntoIter`] for owned iteration over one.
//!
//! Borrowed iteration uses [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) through
//! `Deref<Target = [T]>`.
//!
//! [`Array`] is also re-exported under the parent module.

mod array;
mod iter;
mod tests;

pub use array::*;
pub use iter::*;
