#![cfg(test)]

use std::mem::MaybeUninit;

use super::*;
use crate::util::alloc::DropCounter;
use crate::util::panic::assert_panics;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct ZeroSized;

#[test]
fn test_zst_support() {
    let arr = Array::from_exact([ZeroSized; 5]);
    assert_eq!(arr.size(), 5);
    assert_eq!(arr[4], ZeroSized, "Indexing a ZST Array should work.");
    assert_eq!(arr.iter().count(), 5, "Should iterate over the right number of ZST instances.");

    let mut raw = arr.forget_init();
    let old_ptr = raw.ptr;
    raw.realloc(30);
    assert_eq!(raw.ptr, old_ptr, "Pointer shouldn't change when reallocated for a ZST.");
    assert_eq!(raw.size(), 30);
}

#[test]
fn test_realloc() {
    let mut raw = Array::from_exact(0..5_usize).forget_init();
    raw.realloc(10);
    for i in 5..10 {
        raw[i] = MaybeUninit::new(i);
    }

    // SAFETY: The first five values were initialized by from_exact, the rest just now.
    let arr = unsafe { raw.assume_init() };
    assert_eq!(
        &*arr,
        &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        "When growing, existing values should remain in place."
    );

    let mut raw: Array<MaybeUninit<u8>> = Array::new_uninit(4);
    raw.realloc(0);
    assert_eq!(raw.size(), 0, "Shrinking to zero should leave an empty Array.");

    assert_panics!({
        let mut raw: Array<MaybeUninit<u64>> = Array::new_uninit(1);
        raw.realloc(isize::MAX as usize);
    }, "Capacity overflow");
}

#[test]
fn test_drop_counts() {
    let counter = DropCounter::new();
    let arr = Array::from_exact((0..6).map(|_| counter.clone()));
    drop(arr);
    assert_eq!(counter.drops(), 6, "Dropping an Array should drop all of its values.");

    let counter = DropCounter::new();
    let mut iter = Array::from_exact((0..6).map(|_| counter.clone())).into_iter();
    let first = iter.next();
    let last = iter.next_back();
    assert_eq!(counter.drops(), 0, "Yielded values are moved out, not dropped.");
    drop(iter);
    assert_eq!(counter.drops(), 4, "Dropping the iterator should drop only the remainder.");
    drop((first, last));
    assert_eq!(counter.drops(), 6);
}

#[test]
fn test_into_iter_order() {
    let arr = Array::from(['a', 'b', 'c', 'd']);
    let mut iter = arr.clone().into_iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some('a'));
    assert_eq!(iter.next_back(), Some('d'));
    assert_eq!(iter.collect::<String>(), "bc");
    assert_eq!(arr.iter().rev().collect::<String>(), "dcba");
}
