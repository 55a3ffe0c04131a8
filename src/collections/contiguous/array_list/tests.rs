#![cfg(test)]

use super::*;
use crate::error::{CapacityExhausted, IndexOrExhausted, IndexOutOfRange, InvalidArgument};
use crate::util::alloc::DropCounter;
use crate::util::panic::assert_panics;

#[test]
fn test_growth_rule() {
    let mut list = ArrayList::with_cap(4);
    for i in 0..4 {
        list.add(i);
    }
    assert_eq!(list.cap(), 4, "Filling to capacity shouldn't grow.");

    list.add(4);
    assert_eq!(list.len(), 5);
    assert_eq!(list.cap(), 8, "Adding one past capacity should double it.");

    list.reserve(20);
    // required = 8 + 20, factor = 28 / 8 + 1 = 4
    assert_eq!(list.cap(), 32, "Large reservations should grow by a whole factor of the cap.");
    assert_eq!(list.as_array(), &[0, 1, 2, 3, 4], "Growth should preserve existing values.");
}

#[test]
fn test_growth_is_clamped() {
    let mut list = ArrayList::with_limits(4, 6);
    list.add('a').add('b').add('c').add('d').add('e');
    assert_eq!(list.cap(), 6, "Growth should never exceed max_cap.");

    list.add('f');
    assert_eq!(
        list.try_add('g').map(|_| ()),
        Err(CapacityExhausted { requested: 1, available: 0 })
    );
    assert_eq!(list.len(), 6, "A failed add should leave the list unchanged.");

    assert_panics!({ list.add('g'); }, "Capacity exhausted");
}

#[test]
fn test_invalid_capacities() {
    assert_eq!(
        ArrayList::<u8>::try_with_cap(0).err(),
        Some(InvalidArgument { argument: "cap", value: 0, min: 1 })
    );
    assert_eq!(
        ArrayList::<u8>::try_with_limits(5, 4).err(),
        Some(InvalidArgument { argument: "max_cap", value: 4, min: 5 })
    );
    assert!(ArrayList::<u8>::try_with_limits(5, 5).is_ok());
    assert_panics!({ ArrayList::<u8>::with_cap(0); }, "`cap`");
}

#[test]
fn test_remove_first_keeps_capacity() {
    let mut list = ArrayList::from_exact((1..9).map(|i| i * 10));
    let cap = list.cap();

    assert_eq!(list.remove_at(0), 10);
    assert_eq!(list.len(), 7);
    assert_eq!(list.cap(), cap, "Removing the first element shouldn't change the capacity.");
    assert_eq!(list.as_array(), &[20, 30, 40, 50, 60, 70, 80]);
}

#[test]
fn test_remove_cases() {
    let mut list: ArrayList<char> = "abcdef".chars().collect();

    assert_eq!(list.remove_at(5), 'f', "Removing the last element should return it.");
    assert_eq!(list.remove_at(2), 'c', "Removing a middle element should return it.");
    assert_eq!(list.as_array(), &['a', 'b', 'd', 'e'], "The gap should be closed.");

    assert_eq!(list.try_remove_at(4), Err(IndexOutOfRange { index: 4, len: 4 }));
    assert_eq!(list.remove_first(), Some('a'));
    assert_eq!(list.remove_last(), Some('e'));
    assert_eq!(list.as_array(), &['b', 'd']);

    list.clear();
    assert_eq!(list.remove_first(), None);
    assert_eq!(list.remove_last(), None);
}

#[test]
fn test_insert_and_replace() {
    let mut list = ArrayList::with_cap(2);
    list.insert(0, 2);
    list.insert(0, 0);
    list.insert(1, 1);
    list.insert(3, 3);
    assert_eq!(list.as_array(), &[0, 1, 2, 3]);

    assert!(matches!(
        list.try_insert(5, 5),
        Err(IndexOrExhausted::IndexOutOfRange(_))
    ));

    assert_eq!(list.replace(2, 20), 2);
    assert_eq!(list.try_replace(4, 40), Err(IndexOutOfRange { index: 4, len: 4 }));
    assert_eq!(list.as_array(), &[0, 1, 20, 3]);

    let mut full = ArrayList::with_limits(1, 1);
    full.add(0);
    assert!(full.try_insert(0, 1).is_err_and(|e| e.is_capacity_exhausted()));
}

#[test]
fn test_logical_bounds() {
    let mut list = ArrayList::with_cap(10);
    list.add(1).add(2);
    assert_eq!(list.get(1), Some(&2));
    assert_eq!(list.get(2), None, "Slots past len shouldn't be readable.");
    assert_eq!(list.first(), Some(&1));
    assert_eq!(list.last(), Some(&2));
    assert_panics!({ list[5]; });
}

#[test]
fn test_search() {
    let list = ArrayList::from(['x', 'y', 'x', 'z']);
    assert_eq!(list.index_of(&'x'), Some(0));
    assert_eq!(list.last_index_of(&'x'), Some(2));
    assert_eq!(list.index_of(&'w'), None);
    assert!(list.contains(&'z'));
}

#[test]
fn test_clear_resets() {
    let counter = DropCounter::new();
    let mut list = ArrayList::with_cap(30);
    for _ in 0..25 {
        list.add(counter.clone());
    }
    list.clear();
    assert_eq!(counter.drops(), 25, "Clearing should drop every element.");
    assert!(list.is_empty());
    assert_eq!(list.cap(), DEFAULT_CAP, "Clearing should restore the default capacity.");
}

#[test]
fn test_drop_counts() {
    let counter = DropCounter::new();
    let mut list = ArrayList::new();
    for _ in 0..5 {
        list.add(counter.clone());
    }
    let removed = list.remove_at(0);
    assert_eq!(counter.drops(), 0, "Removal should move the value out without dropping it.");
    drop(removed);
    drop(list);
    assert_eq!(counter.drops(), 5);

    let counter = DropCounter::new();
    let list = ArrayList::from_exact((0..4).map(|_| counter.clone()));
    let mut iter = list.into_iter();
    iter.next();
    drop(iter);
    assert_eq!(counter.drops(), 4);
}

#[test]
fn test_into_iter_keeps_spare_capacity() {
    let counter = DropCounter::new();
    let mut list = ArrayList::with_cap(16);
    for _ in 0..3 {
        list.add(counter.clone());
    }

    let mut iter = list.into_iter();
    assert_eq!(iter.len(), 3, "Only the live values should be yielded.");
    drop(iter.next());
    assert_eq!(counter.drops(), 1);
    drop(iter);
    assert_eq!(counter.drops(), 3, "Unyielded values should be dropped with the iterator.");

    let mut list = ArrayList::with_cap(8);
    list.extend(['a', 'b', 'c']);
    let mut iter = list.into_iter();
    assert_eq!(iter.next_back(), Some('c'));
    assert_eq!(iter.collect::<String>(), "ab");
}

#[test]
fn test_into_array_trims() {
    let mut list = ArrayList::with_cap(16);
    list.extend([3, 1, 4]);
    let arr = list.into_array();
    assert_eq!(arr.size(), 3, "into_array should trim to len.");
    assert_eq!(&*arr, &[3, 1, 4]);

    let list = ArrayList::from(arr);
    assert_eq!(list.cap(), 3);
    assert_eq!(list.into_iter().rev().collect::<ArrayList<_>>().as_array(), &[4, 1, 3]);
}

#[test]
fn test_clone_and_eq() {
    let mut list: ArrayList<String> = ["a", "b"].into_iter().map(String::from).collect();
    let copy = list.clone();
    assert_eq!(list, copy);
    list[0].push('!');
    assert_ne!(list, copy, "Clones should own independent values.");
    assert_eq!(format!("{copy}"), r#"["a", "b"]"#);
}
