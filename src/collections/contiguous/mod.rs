//! Contiguous collection types: [`Array`], a fixed-size heap allocation, and [`ArrayList`], the
//! growable store built on top of it.

pub mod array;
pub mod array_list;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use array_list::ArrayList;
