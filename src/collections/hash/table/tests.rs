#![cfg(test)]

use super::*;
use std::hash::Hash;
use crate::collections::contiguous::ArrayList;
use crate::error::{CollisionOverflow, InvalidArgument};
use crate::util::hash::ManualHash;
use crate::util::panic::assert_panics;

fn values<T: Hash + Eq + Clone>(table: &HashTable<T>) -> ArrayList<T> {
    table.iter().cloned().collect()
}

#[test]
fn test_overflowing_bucket_rehashes() {
    let mut table = HashTable::new();
    // All of these land in slot 1 of a table of size 17.
    for value in [1_u32, 18, 35, 52, 69, 86, 103, 120] {
        assert!(table.add(value));
    }
    assert_eq!(table.size(), 17, "A full bucket alone shouldn't trigger a rehash.");

    assert!(table.add(137), "Adding to a full bucket should rehash and then succeed.");
    assert_eq!(table.size(), 23, "17 * 1.3 = 22, so the next size should be 23.");

    for value in [10, 20, 30] {
        table.add(value);
    }
    assert!(!table.add(1), "Duplicates should be rejected.");
    assert_eq!(table.len(), 12);

    for value in [1, 18, 35, 52, 69, 86, 103, 120, 137, 10, 20, 30] {
        assert!(table.contains(&value), "No value should be lost in a rehash, missing {value}.");
    }
}

#[test]
fn test_rehash_discards_unfit_sizes() {
    let mut table = HashTable::with_options(HashTableOptions::new().with_total_collisions(2));
    // 391 = 17 * 23 and 782 = 2 * 391, so all three collide at sizes 17 and 23.
    table.add(0_u64);
    table.add(391);
    table.add(782);

    assert_eq!(table.size(), 47, "Size 23 should be skipped in favour of the prime after 46.");
    assert_eq!(table.len(), 3);
    assert!(table.contains(&0) && table.contains(&391) && table.contains(&782));
}

#[test]
fn test_hash_collisions() {
    let mut table = HashTable::new();
    table.add(ManualHash::new(0, "zero"));
    table.add(ManualHash::new(0, "one"));
    table.add(ManualHash::new(2, "two"));
    table.add(ManualHash::new(0, "three"));
    table.add(ManualHash::new(2, "four"));
    table.add(ManualHash::new(1, "five"));
    assert_eq!(table.len(), 6, "Colliding but unequal values should all be kept.");

    assert!(table.remove(&ManualHash::new(0, "zero")));
    assert!(table.remove(&ManualHash::new(2, "two")));
    assert!(
        !table.remove(&ManualHash::new(1, "zero")),
        "Equal values with another hash shouldn't match."
    );

    assert_eq!(
        *table.into_iter().map(|i| i.value()).collect::<ArrayList<_>>(),
        ["one", "three", "four", "five"],
        "Iteration should follow occupied slot order, then bucket order."
    );
}

#[test]
fn test_identical_hashes_overflow() {
    let mut table = HashTable::with_options(HashTableOptions::new().with_total_collisions(2));
    table.add(ManualHash::new(4, 'a'));
    table.add(ManualHash::new(4, 'b'));

    assert_eq!(
        table.try_add(ManualHash::new(4, 'c')),
        Err(CollisionOverflow { hash: 4, limit: 2 })
    );
    assert_eq!(table.len(), 2, "A failed add should leave the table unchanged.");
    assert_eq!(table.size(), 17);
    assert_eq!(
        table.try_add(ManualHash::new(4, 'a')),
        Ok(false),
        "Duplicates are rejected before a rehash is considered."
    );

    assert_panics!({ table.add(ManualHash::new(4, 'd')); }, "share the hash 4");
}

#[test]
fn test_remove_evicts_empty_buckets() {
    let mut table = HashTable::new();
    table.add(5_u8);
    table.add(22);
    table.add(3);
    assert_eq!(table.occupied.as_array(), &[5, 3]);

    assert_eq!(table.take(&5), Some(5));
    assert_eq!(table.occupied.as_array(), &[5, 3], "A bucket with values left should stay.");
    assert_eq!(table.take(&22), Some(22));
    assert_eq!(table.occupied.as_array(), &[3], "An emptied bucket should be evicted.");
    assert!(table.table[5].is_none());

    assert_eq!(table.take(&22), None);
    assert_eq!(table.len(), 1, "Removing a missing value shouldn't change the count.");
}

#[test]
fn test_iteration_order() {
    let table: HashTable<u8> = [5, 22, 3].into_iter().collect();
    assert_eq!(table.size(), 5, "from_items should size the table to the prime after its length.");
    assert_eq!(values(&table).as_array(), &[5, 22, 3]);
    assert_eq!(&*table.to_array(), &[5, 22, 3]);
    assert_eq!(table.iter().len(), 3);

    let mut table = HashTable::new();
    table.add(5_u8);
    table.add(3);
    table.add(22);
    assert_eq!(
        values(&table).as_array(),
        &[5, 22, 3],
        "Values sharing a bucket should be visited together."
    );
}

#[test]
fn test_clear_and_options() {
    let mut table: HashTable<u32> = (0..40).collect();
    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.size(), DEFAULT_SIZE, "Clearing should reset the table size.");
    assert!(!table.contains(&3));
    assert_eq!(table.iter().count(), 0);

    let table: HashTable<u32> =
        HashTable::with_options(HashTableOptions::new().with_total_collisions(1));
    assert_eq!(table.bucket_cap(), DEFAULT_TOTAL_COLLISIONS);

    assert_eq!(
        HashTable::<u32>::try_with_cap(0, HashTableOptions::default()).err(),
        Some(InvalidArgument { argument: "cap", value: 0, min: 1 })
    );
    assert_eq!(HashTable::<u32>::with_cap(4, HashTableOptions::default()).size(), 4);
}

#[test]
fn test_equality_and_display() {
    let a: HashTable<&str> = ["x", "y"].into_iter().collect();
    let mut b = HashTable::new();
    b.add("y");
    b.add("x");
    assert_eq!(a, b, "Equality shouldn't depend on order or size.");
    b.remove(&"x");
    assert_ne!(a, b);
    assert_eq!(format!("{b}"), r#"#{"y"}"#);
}
