//! [`Bucket`], the fixed-capacity collision container stored at each occupied slot of a
//! [`HashTable`](super::HashTable).

use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::slice;

use crate::collections::contiguous::ArrayList;
use crate::collections::contiguous::array_list::IntoIter as ListIntoIter;
use crate::util::fmt::DebugWith;

/// A value stored alongside the hash it was placed with, so that it never has to be re-hashed.
#[derive(Debug, Clone)]
pub(crate) struct Entry<T> {
    pub(crate) hash: u64,
    pub(crate) value: T,
}

/// A collision container holding at most `cap` distinct values.
///
/// Entries cache their hash. Two entries are considered equal only if their hashes are equal and
/// then their values are, so colliding but unequal values always coexist.
///
/// # Time Complexity
/// Every operation other than `len` and `is_full` is a linear scan over at most `cap` entries.
pub struct Bucket<T> {
    key: usize,
    entries: ArrayList<Entry<T>>,
}

impl<T: Eq> Bucket<T> {
    /// Creates an empty Bucket for the table slot `key`, which can hold up to `cap` values.
    ///
    /// # Panics
    /// Panics if `cap` is 0.
    pub fn new(key: usize, cap: usize) -> Bucket<T> {
        Bucket {
            key,
            entries: ArrayList::with_limits(cap, cap),
        }
    }

    /// Returns the table slot this Bucket was created for.
    pub const fn key(&self) -> usize {
        self.key
    }

    /// Returns the maximum number of values the Bucket can hold.
    pub const fn cap(&self) -> usize {
        self.entries.max_cap()
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub const fn is_full(&self) -> bool {
        self.entries.len() >= self.entries.max_cap()
    }

    /// Adds `value`, with its precomputed `hash`, to the Bucket. Returns false (and discards
    /// `value`) if an equal value is already present or the Bucket is full.
    ///
    /// # Examples
    /// ```
    /// # use simple_collections::collections::hash::Bucket;
    /// let mut bucket = Bucket::new(3, 2);
    /// assert!(bucket.add("a", 3));
    /// assert!(!bucket.add("a", 3));
    /// assert!(bucket.add("b", 3));
    /// assert!(!bucket.add("c", 3));
    /// assert_eq!(bucket.len(), 2);
    /// ```
    pub fn add(&mut self, value: T, hash: u64) -> bool {
        if self.is_full() || self.contains(&value, hash) {
            return false;
        }

        self.push(hash, value);
        true
    }

    /// Removes and returns the value equal to `value`, closing the gap it leaves.
    pub fn remove(&mut self, value: &T, hash: u64) -> Option<T> {
        let index = self.position(value, hash)?;
        self.entries.try_remove_at(index).ok().map(|entry| entry.value)
    }

    pub fn contains(&self, value: &T, hash: u64) -> bool {
        self.position(value, hash).is_some()
    }

    pub fn clear(&mut self) {
        let cap = self.cap();
        self.entries = ArrayList::with_limits(cap, cap);
    }

    /// Returns an iterator over the values in the Bucket, in the order they were added.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.entries.iter())
    }

    /// Consumes the Bucket, returning each value paired with its cached hash.
    pub fn into_entries(self) -> IntoEntries<T> {
        IntoEntries(self.entries.into_iter())
    }

    /// Appends an entry without checking for duplicates. The caller must know there is room.
    pub(crate) fn push(&mut self, hash: u64, value: T) {
        self.entries.add(Entry { hash, value });
    }

    /// Returns the cached hashes of every entry.
    pub(crate) fn hashes(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().map(|entry| entry.hash)
    }

    fn position(&self, value: &T, hash: u64) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.hash == hash && entry.value == *value)
    }
}

impl<T: Debug> Debug for Bucket<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bucket")
            .field("key", &self.key)
            .field("values", &DebugWith(|f: &mut Formatter<'_>| {
                f.debug_list().entries(self.entries.iter().map(|e| &e.value)).finish()
            }))
            .field("cap", &self.entries.max_cap())
            .finish()
    }
}

/// A borrowed iterator over the values of a [`Bucket`].
pub struct Iter<'a, T>(slice::Iter<'a, Entry<T>>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|entry| &entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owned iterator over the `(hash, value)` pairs of a [`Bucket`].
pub struct IntoEntries<T>(ListIntoIter<Entry<T>>);

impl<T> Iterator for IntoEntries<T> {
    type Item = (u64, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|entry| (entry.hash, entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoEntries<T> {}

impl<T> FusedIterator for IntoEntries<T> {}
