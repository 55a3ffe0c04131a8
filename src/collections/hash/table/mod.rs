//! A module containing [`HashTable`] and associated types.
//!
//! Other than the table itself, this includes [`HashTableOptions`] to configure the collision
//! threshold, plus borrowed and owned iterators. Neither iterator follows insertion order: values
//! are visited bucket by bucket, in the order the buckets were installed.
//!
//! [`HashTable`] is also re-exported under the parent module.

mod hash_table;
mod iter;
mod options;
mod tests;

pub use hash_table::*;
pub use iter::*;
pub use options::*;
