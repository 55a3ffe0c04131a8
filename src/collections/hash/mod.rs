//! Hash-based collections: [`HashTable`], the fixed-capacity [`Bucket`]s it stores its values in,
//! and [`NativeHasher`], which reports a value's own hash code.
//!
//! [`HashTable`] is also re-exported under this module, as is [`next_prime_after`], which
//! determines the size of a table after it rehashes.

pub mod bucket;
pub mod hasher;
pub mod table;

#[doc(inline)]
pub use bucket::Bucket;
#[doc(inline)]
pub use hasher::{NativeHashBuilder, NativeHasher};
#[doc(inline)]
pub use table::{HashTable, HashTableOptions};
#[doc(inline)]
pub use crate::util::num::next_prime_after;
