/// The collision threshold used when none (or an unusable one) is configured.
pub const DEFAULT_TOTAL_COLLISIONS: usize = 8;

/// Configuration for a [`HashTable`](super::HashTable).
///
/// # Examples
/// ```
/// # use simple_collections::collections::hash::{HashTable, HashTableOptions};
/// let options = HashTableOptions::new().with_total_collisions(2);
/// let table: HashTable<u32> = HashTable::with_options(options);
/// assert_eq!(table.bucket_cap(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashTableOptions {
    /// The maximum number of values a single bucket may hold before the table is forced to
    /// rehash. Values of 1 or less fall back to [`DEFAULT_TOTAL_COLLISIONS`].
    pub total_collisions: usize,
}

impl HashTableOptions {
    pub const fn new() -> HashTableOptions {
        HashTableOptions {
            total_collisions: DEFAULT_TOTAL_COLLISIONS,
        }
    }

    pub const fn with_total_collisions(mut self, total_collisions: usize) -> HashTableOptions {
        self.total_collisions = total_collisions;
        self
    }

    /// Returns the bucket capacity these options produce, after applying the fallback.
    pub const fn bucket_cap(&self) -> usize {
        if self.total_collisions <= 1 {
            DEFAULT_TOTAL_COLLISIONS
        } else {
            self.total_collisions
        }
    }
}

impl Default for HashTableOptions {
    fn default() -> Self {
        Self::new()
    }
}
