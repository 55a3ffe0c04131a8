use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash};
use std::iter;
use std::mem;

use super::{HashTableOptions, Iter};
use crate::collections::contiguous::{Array, ArrayList};
use crate::collections::hash::{Bucket, NativeHashBuilder};
use crate::util::error::{CollisionOverflow, InvalidArgument};
use crate::util::fmt::{DebugRaw, DebugWith};
use crate::util::num::next_prime_after;
use crate::util::result::ResultExtension;

/// The bucket-table size used by [`HashTable::new`] and restored by [`HashTable::clear`].
pub const DEFAULT_SIZE: usize = 17;

const GROWTH_NUMERATOR: usize = 13;
const GROWTH_DENOMINATOR: usize = 10;

/// A set of distinct values, stored with open hashing in fixed-capacity [`Bucket`]s.
///
/// Each value lands in the slot `hash % size`. A slot holds a [`Bucket`] of at most
/// [`bucket_cap`](HashTable::bucket_cap) values. When a value would overflow its bucket, the whole
/// table is rehashed into a larger, prime-sized table and the insertion is retried.
///
/// Only occupied slots are visited when iterating: the table keeps a list of them, in the order
/// their buckets were installed.
///
/// It is a logic error for values in a HashTable to be manipulated in a way that changes their
/// hash. Because of this, the API offers no mutable access to them.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the HashTable.
/// - `b`: The bucket capacity (collision threshold).
/// - `s`: The number of occupied slots.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` | `O(b)`, `O(n)`* |
/// | `contains` | `O(b)` |
/// | `remove` | `O(b + s)` |
/// | `to_array` | `O(n)` |
///
/// \* If the value's bucket is full, the table rehashes before adding it.
pub struct HashTable<T: Hash + Eq, B: BuildHasher = NativeHashBuilder> {
    pub(crate) table: ArrayList<Option<Bucket<T>>>,
    pub(crate) occupied: ArrayList<usize>,
    pub(crate) bucket_cap: usize,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

enum SlotState {
    Vacant,
    Open,
    Full,
}

impl<T: Hash + Eq> HashTable<T> {
    /// Creates an empty HashTable of size 17 with the default options.
    ///
    /// # Examples
    /// ```
    /// # use simple_collections::collections::hash::HashTable;
    /// let mut table = HashTable::new();
    /// assert!(table.add("a"));
    /// assert!(!table.add("a"));
    /// assert!(table.contains(&"a"));
    /// assert_eq!(table.size(), 17);
    /// ```
    pub fn new() -> HashTable<T> {
        HashTable::with_options(HashTableOptions::default())
    }

    /// Creates an empty HashTable of size 17 with the provided options.
    pub fn with_options(options: HashTableOptions) -> HashTable<T> {
        HashTable::with_options_and_hasher(options, NativeHashBuilder)
    }

    /// Creates an empty HashTable with exactly `cap` slots. The size isn't rounded to a prime, but
    /// every rehash after this produces one.
    ///
    /// # Panics
    /// Panics if `cap` is 0.
    pub fn with_cap(cap: usize, options: HashTableOptions) -> HashTable<T> {
        HashTable::try_with_cap(cap, options).throw()
    }

    /// Creates an empty HashTable with exactly `cap` slots, returning [`InvalidArgument`] if it is
    /// 0.
    pub fn try_with_cap(
        cap: usize,
        options: HashTableOptions,
    ) -> Result<HashTable<T>, InvalidArgument> {
        HashTable::try_with_cap_and_hasher(cap, options, NativeHashBuilder)
    }

    /// Creates a HashTable containing the provided `items`, sized to the smallest prime greater
    /// than the number of items (or 17 if there are none). Duplicate items are only stored once.
    ///
    /// # Panics
    /// Panics if more than the collision threshold of distinct items share one hash code.
    pub fn from_items<I>(items: I, options: HashTableOptions) -> HashTable<T>
    where
        I: IntoIterator<Item = T>,
    {
        HashTable::from_items_and_hasher(items, options, NativeHashBuilder)
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashTable<T, B> {
    /// Creates an empty HashTable of size 17 that hashes values with the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashTable<T, B> {
        HashTable::with_options_and_hasher(HashTableOptions::default(), hasher)
    }

    /// Like [`HashTable::from_items`], hashing with the provided `hasher`.
    ///
    /// # Panics
    /// Panics if more than the collision threshold of distinct items share one hash code.
    pub fn from_items_and_hasher<I: IntoIterator<Item = T>>(
        items: I,
        options: HashTableOptions,
        hasher: B,
    ) -> HashTable<T, B> {
        let items: ArrayList<T> = items.into_iter().collect();
        let size = if items.is_empty() {
            DEFAULT_SIZE
        } else {
            next_prime_after(items.len())
        };

        let mut table = HashTable::from_parts(size, options.bucket_cap(), hasher);
        table.extend(items);
        table
    }

    pub fn with_options_and_hasher(options: HashTableOptions, hasher: B) -> HashTable<T, B> {
        HashTable::from_parts(DEFAULT_SIZE, options.bucket_cap(), hasher)
    }

    /// Creates an empty HashTable with exactly `cap` slots and the provided `hasher`, returning
    /// [`InvalidArgument`] if `cap` is 0.
    pub fn try_with_cap_and_hasher(
        cap: usize,
        options: HashTableOptions,
        hasher: B,
    ) -> Result<HashTable<T, B>, InvalidArgument> {
        if cap < 1 {
            return Err(InvalidArgument { argument: "cap", value: cap, min: 1 });
        }
        Ok(HashTable::from_parts(cap, options.bucket_cap(), hasher))
    }

    /// Returns the number of values in the HashTable.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashTable contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the bucket table.
    pub const fn size(&self) -> usize {
        self.table.len()
    }

    /// Returns the maximum number of values a single bucket can hold.
    pub const fn bucket_cap(&self) -> usize {
        self.bucket_cap
    }

    /// Returns a reference to the HashTable's [`BuildHasher`].
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Adds `value` to the HashTable, returning false if an equal value is already present.
    ///
    /// # Panics
    /// Panics if more than [`bucket_cap`](HashTable::bucket_cap) distinct values share the hash of
    /// `value`, see [`HashTable::try_add`].
    pub fn add(&mut self, value: T) -> bool {
        self.try_add(value).throw()
    }

    /// Adds `value` to the HashTable, returning false if an equal value is already present.
    ///
    /// If the value's bucket is full, the table is rehashed and the insertion retried. Returns
    /// [`CollisionOverflow`] (leaving the table unchanged) when the bucket is full of values with
    /// exactly the same hash, as no table size could separate them.
    pub fn try_add(&mut self, value: T) -> Result<bool, CollisionOverflow> {
        let hash = self.hasher.hash_one(&value);

        loop {
            let slot = self.slot_for(hash, self.size());
            let state = match &self.table[slot] {
                None => SlotState::Vacant,
                Some(bucket) if bucket.contains(&value, hash) => return Ok(false),
                Some(bucket) if bucket.is_full() => SlotState::Full,
                Some(_) => SlotState::Open,
            };

            match state {
                SlotState::Full => self.rehash(hash)?,
                SlotState::Vacant | SlotState::Open => {
                    self.place(hash, value);
                    self.len += 1;
                    return Ok(true);
                },
            }
        }
    }

    /// Removes the value equal to `value`, returning true if it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns the value equal to `value`, if present. A bucket left empty is evicted
    /// from its slot.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let hash = self.hasher.hash_one(value);
        let slot = self.slot_for(hash, self.size());

        let bucket = self.table[slot].as_mut()?;
        let removed = bucket.remove(value, hash)?;

        if bucket.is_empty() {
            self.table[slot] = None;
            if let Some(index) = self.occupied.index_of(&slot) {
                self.occupied.remove_at(index);
            }
        }

        self.len -= 1;
        Some(removed)
    }

    /// Returns true if the HashTable contains a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        if self.is_empty() {
            return false;
        }

        let hash = self.hasher.hash_one(value);
        self.table[self.slot_for(hash, self.size())]
            .as_ref()
            .is_some_and(|bucket| bucket.contains(value, hash))
    }

    /// Returns an iterator over all values, bucket by bucket.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Removes every value and resets the table to its default size.
    pub fn clear(&mut self) {
        log::debug!("HashTable cleared ({} values in {} slots)", self.len, self.size());

        self.table = HashTable::<T, B>::empty_table(DEFAULT_SIZE);
        self.occupied = ArrayList::new();
        self.len = 0;
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher> HashTable<T, B> {
    /// Returns a densely packed copy of every value, in iteration order.
    pub fn to_array(&self) -> Array<T> {
        Array::from_exact(self.iter().cloned())
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashTable<T, B> {
    pub(crate) fn from_parts(size: usize, bucket_cap: usize, hasher: B) -> HashTable<T, B> {
        HashTable {
            table: HashTable::<T, B>::empty_table(size),
            occupied: ArrayList::new(),
            bucket_cap,
            len: 0,
            hasher,
        }
    }

    pub(crate) fn empty_table(size: usize) -> ArrayList<Option<Bucket<T>>> {
        ArrayList::from_exact((0..size).map(|_| None))
    }

    pub(crate) const fn slot_for(&self, hash: u64, size: usize) -> usize {
        (hash % size as u64) as usize
    }

    /// Stores an entry in its slot, installing a new bucket if the slot is vacant. The caller must
    /// know there is room and that no equal value is present.
    pub(crate) fn place(&mut self, hash: u64, value: T) {
        let slot = self.slot_for(hash, self.size());
        match &mut self.table[slot] {
            Some(bucket) => bucket.push(hash, value),
            vacant @ None => {
                let mut bucket = Bucket::new(slot, self.bucket_cap);
                bucket.push(hash, value);
                *vacant = Some(bucket);
                self.occupied.add(slot);
            },
        }
    }

    /// Moves every entry into a larger table, so that an entry with the `pending` hash can then be
    /// placed without overflowing a bucket.
    ///
    /// The next size is the smallest prime after 1.3 times the current size. If the entries
    /// (including the pending one) would overflow a bucket at that size, the candidate is
    /// discarded in favour of the smallest prime after twice its size, until one fits.
    pub(crate) fn rehash(&mut self, pending: u64) -> Result<(), CollisionOverflow> {
        let identical = self.hashes().filter(|hash| *hash == pending).count();
        if identical >= self.bucket_cap {
            return Err(CollisionOverflow { hash: pending, limit: self.bucket_cap });
        }

        let old_size = self.size();
        let mut candidate = next_prime_after(old_size * GROWTH_NUMERATOR / GROWTH_DENOMINATOR);
        let mut discarded = 0_usize;
        while !self.fits(candidate, pending) {
            discarded += 1;
            candidate = next_prime_after(candidate.saturating_mul(2));
        }

        log::debug!(
            "HashTable rehashing {} values from {old_size} to {candidate} slots \
            ({discarded} candidate sizes discarded)",
            self.len
        );

        let fresh = HashTable::<T, B>::empty_table(candidate);
        let mut old_table = mem::replace(&mut self.table, fresh);
        let old_occupied = mem::take(&mut self.occupied);

        for slot in old_occupied {
            if let Some(bucket) = old_table[slot].take() {
                for (hash, value) in bucket.into_entries() {
                    self.place(hash, value);
                }
            }
        }

        Ok(())
    }

    /// Checks whether every cached hash, plus `pending`, can be placed in a table of size
    /// `candidate` without any bucket exceeding its capacity.
    fn fits(&self, candidate: usize, pending: u64) -> bool {
        let mut counts = ArrayList::from_exact((0..candidate).map(|_| 0_usize));

        for hash in self.hashes().chain(iter::once(pending)) {
            let count = &mut counts[self.slot_for(hash, candidate)];
            *count += 1;
            if *count > self.bucket_cap {
                return false;
            }
        }
        true
    }

    fn hashes(&self) -> impl Iterator<Item = u64> + '_ {
        self.occupied
            .iter()
            .filter_map(|slot| self.table[*slot].as_ref())
            .flat_map(|bucket| bucket.hashes())
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for HashTable<T, B> {
    fn default() -> Self {
        HashTable::with_hasher(B::default())
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashTable<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashTable<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        HashTable::from_items_and_hasher(iter, HashTableOptions::default(), B::default())
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashTable<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|value| other.contains(value))
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashTable<T, B> {}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for HashTable<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("buckets", &DebugWith(|f: &mut Formatter<'_>| {
                f.debug_list().entries(
                    self.table.iter()
                        .map(|slot| DebugRaw(match slot {
                            Some(bucket) => format!("{}", bucket.iter().collect::<ArrayList<_>>()),
                            None => "-".into(),
                        }))
                ).finish()
            }))
            .field("len", &self.len)
            .field("size", &self.size())
            .field("bucket_cap", &self.bucket_cap)
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Display for HashTable<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_set().entries(self.iter()).finish()
    }
}
