//! A module containing [`ArrayList`], the growable array store that backs most other collections
//! in this crate.
//!
//! Owned iteration reuses [`IntoIter`] from [`array`](super::array), while borrowed iteration uses
//! [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from [`std::slice`].
//!
//! [`ArrayList`] is also re-exported under the parent module.

mod array_list;
mod iter;
mod tests;

pub use array_list::*;
pub use iter::*;
