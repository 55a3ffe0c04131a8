#![cfg(test)]

use super::*;
use crate::collections::binary_tree::{NodeId, Traversal};
use crate::collections::contiguous::ArrayList;

/// Checks the heap order and the parent links of every node.
fn verify_heap<T: Ord>(heap: &MinHeap<T>) {
    let mut ids = heap.breadth_first();
    let mut visited = 0;
    while let Some(id) = ids.next_id() {
        visited += 1;
        let node = heap.node(id).expect("Traversal yielded a removed node.");
        for child in [node.left(), node.right()].into_iter().flatten() {
            let child = heap.node(child).expect("A link refers to a removed node.");
            assert_eq!(child.parent(), Some(id), "A child doesn't link back to its parent.");
            assert!(child.value() >= node.value(), "A child is smaller than its parent.");
        }
    }
    assert_eq!(visited, heap.len());
}

fn level_order(heap: &MinHeap<i32>) -> ArrayList<i32> {
    heap.breadth_first().copied().collect()
}

#[test]
fn test_ordered_inserts_keep_positions() {
    let values = [2, 4, 8, 9, 7, 10, 9, 15, 20, 13];
    let heap: MinHeap<i32> = values.into_iter().collect();
    verify_heap(&heap);
    assert_eq!(heap.len(), 10);
    assert_eq!(level_order(&heap).as_array(), &values);
}

#[test]
fn test_insert_bubbles_up() {
    let mut heap = MinHeap::new();
    heap.insert(5);
    heap.insert(3);
    assert_eq!(level_order(&heap).as_array(), &[3, 5]);

    heap.insert(1);
    assert_eq!(level_order(&heap).as_array(), &[1, 5, 3]);

    // Position 4 is the left child of position 2.
    heap.insert(4);
    verify_heap(&heap);
    assert_eq!(level_order(&heap).as_array(), &[1, 4, 3, 5]);
    assert_eq!(heap.peek(), Some(&1));
}

#[test]
fn test_handles_follow_values() {
    let mut heap = MinHeap::new();
    let ids: ArrayList<(NodeId, i32)> = [9, 6, 3, 8, 1]
        .into_iter()
        .map(|v| (heap.insert(v), v))
        .collect();
    verify_heap(&heap);

    for (id, value) in ids.iter() {
        assert_eq!(
            heap.node(*id).map(|n| n.value()),
            Some(value),
            "Nodes should never swap values."
        );
    }
    assert_eq!(heap.root(), ids.get(4).map(|(id, _)| *id));
}

#[test]
fn test_pop_yields_sorted() {
    let mut heap: MinHeap<i32> = [1, 4, 3, 5].into_iter().collect();
    assert_eq!(heap.pop(), Some(1));
    verify_heap(&heap);
    assert_eq!(level_order(&heap).as_array(), &[3, 4, 5]);

    let mut heap: MinHeap<i32> = [12, 7, 7, 30, 2, 19, 4, 4, 25, 0, 11].into_iter().collect();
    let mut popped = ArrayList::new();
    while let Some(value) = heap.pop() {
        verify_heap(&heap);
        popped.add(value);
    }
    assert_eq!(popped.as_array(), &[0, 2, 4, 4, 7, 7, 11, 12, 19, 25, 30]);
    assert!(heap.is_empty());
    assert_eq!(heap.root(), None);
}

#[test]
fn test_empty_heap() {
    let mut heap: MinHeap<u8> = MinHeap::new();
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.breadth_first().next(), None);

    heap.insert(3);
    heap.clear();
    assert!(heap.is_empty());
    heap.insert(2);
    assert_eq!(heap.pop(), Some(2));
}

#[test]
fn test_debug_draws_tree() {
    let heap: MinHeap<u8> = [1, 2].into_iter().collect();
    assert_eq!(format!("{heap:?}"), "┌    ┌    -\n┌    (2)\n┌    └    -\n(1)\n└    -");
}

#[test]
fn test_breadth_first_over_large_heap() {
    let n = 50_000;
    let heap: MinHeap<u32> = (0..n).collect();
    assert_eq!(heap.len(), n as usize);

    let traversal = heap.breadth_first();
    assert_eq!(traversal.len(), n as usize);
    assert!(traversal.copied().eq(0..n), "Ascending inserts should keep level order.");
    assert_eq!(heap.breadth_first().count(), heap.traverse(Traversal::PreOrder).count());
}
