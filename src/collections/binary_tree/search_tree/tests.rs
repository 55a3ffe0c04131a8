#![cfg(test)]

use super::*;
use crate::collections::binary_tree::traverse::Traversal;
use crate::collections::binary_tree::NodeId;
use crate::collections::contiguous::ArrayList;

const SCENARIO: [i32; 9] = [5, 3, 7, 1, 4, 9, 2, 6, 8];

fn collect(tree: &BinarySearchTree<i32>, order: Traversal) -> ArrayList<i32> {
    tree.traverse(order).copied().collect()
}

/// Checks that every child links back to its parent and that the root has no parent.
fn verify_links<T>(tree: &BinarySearchTree<T>) {
    if let Some(root) = tree.root() {
        assert_eq!(tree.node(root).and_then(|n| n.parent()), None, "The root has a parent.");
    }

    let mut ids = tree.traverse(Traversal::PreOrder);
    let mut visited = 0;
    while let Some(id) = ids.next_id() {
        visited += 1;
        let node = tree.node(id).expect("Traversal yielded a removed node.");
        for child in [node.left(), node.right()].into_iter().flatten() {
            assert_eq!(
                tree.node(child).and_then(|c| c.parent()),
                Some(id),
                "Child {child:?} doesn't link back to {id:?}."
            );
        }
    }
    assert_eq!(visited, tree.len(), "Every node should be reachable from the root.");
}

#[test]
fn test_traversal_orders() {
    let tree: BinarySearchTree<i32> = SCENARIO.into_iter().collect();
    verify_links(&tree);

    assert_eq!(collect(&tree, Traversal::InOrder).as_array(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(collect(&tree, Traversal::PreOrder).as_array(), &[5, 3, 1, 2, 4, 7, 6, 9, 8]);
    assert_eq!(collect(&tree, Traversal::PostOrder).as_array(), &[2, 1, 4, 3, 6, 8, 9, 7, 5]);
    assert_eq!(
        collect(&tree, Traversal::BreadthFirst).as_array(),
        &[5, 3, 7, 1, 4, 6, 9, 2, 8]
    );

    assert_eq!(tree.in_order().len(), 9);
    assert_eq!(
        tree.in_order().copied().collect::<ArrayList<_>>(),
        collect(&tree, Traversal::InOrder),
        "Traversals should restart on every call."
    );

    let mut sum = 0;
    tree.for_each(Traversal::PostOrder, |value| sum += value);
    assert_eq!(sum, 45);
}

#[test]
fn test_find_and_exists() {
    let tree: BinarySearchTree<i32> = SCENARIO.into_iter().collect();
    let six = tree.find(&6);
    assert_eq!(six.and_then(|id| tree.node(id)).map(|n| *n.value()), Some(6));
    assert!(six.and_then(|id| tree.node(id)).is_some_and(|n| n.is_leaf()));
    assert!(tree.exists(&8));
    assert!(!tree.exists(&10));
    assert_eq!(tree.find(&0), None);

    let one = tree.find(&1).and_then(|id| tree.node(id));
    assert!(one.is_some_and(|n| n.has_one_child()), "1 should only have 2 as a child.");
}

#[test]
fn test_remove_root_with_two_children() {
    let mut tree: BinarySearchTree<i32> = SCENARIO.into_iter().collect();
    assert_eq!(tree.remove(&5), Some(5));
    verify_links(&tree);

    assert_eq!(tree.len(), 8);
    assert_eq!(
        tree.root().and_then(|id| tree.node(id)).map(|n| *n.value()),
        Some(4),
        "The predecessor should replace the root."
    );
    assert_eq!(collect(&tree, Traversal::InOrder).as_array(), &[1, 2, 3, 4, 6, 7, 8, 9]);
    assert_eq!(collect(&tree, Traversal::PreOrder).as_array(), &[4, 3, 1, 2, 7, 6, 9, 8]);
}

#[test]
fn test_remove_adjacent_predecessor() {
    let mut tree: BinarySearchTree<i32> = [5, 3, 7, 1].into_iter().collect();
    // 3 has no right child, so it is the predecessor of 5 and keeps its own left subtree.
    assert_eq!(tree.remove(&5), Some(5));
    verify_links(&tree);
    assert_eq!(collect(&tree, Traversal::PreOrder).as_array(), &[3, 1, 7]);
}

#[test]
fn test_remove_leaf_and_single_child() {
    let mut tree: BinarySearchTree<i32> = SCENARIO.into_iter().collect();
    let seven = tree.find(&7);

    assert_eq!(tree.remove(&8), Some(8));
    verify_links(&tree);
    assert_eq!(tree.remove(&1), Some(1));
    verify_links(&tree);
    assert_eq!(tree.remove(&9), Some(9));
    verify_links(&tree);

    assert_eq!(collect(&tree, Traversal::PreOrder).as_array(), &[5, 3, 2, 4, 7, 6]);
    assert_eq!(tree.find(&7), seven, "Removals shouldn't move unrelated nodes.");
    assert_eq!(tree.remove(&1), None, "Removing an absent value should fail.");
    assert_eq!(tree.len(), 6);
}

#[test]
fn test_remove_root_with_one_child() {
    let mut tree: BinarySearchTree<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(tree.remove(&1), Some(1));
    verify_links(&tree);
    assert_eq!(tree.root().and_then(|id| tree.node(id)).map(|n| *n.value()), Some(2));

    assert_eq!(tree.remove(&2), Some(2));
    assert_eq!(tree.remove(&3), Some(3));
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
    assert_eq!(tree.in_order().next(), None);
}

#[test]
fn test_ties_descend_left() {
    let mut tree = BinarySearchTree::new();
    let first = tree.insert(2);
    let second = tree.insert(2);
    tree.insert(3);
    tree.insert(2);
    verify_links(&tree);

    assert_eq!(tree.node(first).and_then(|n| n.left()), Some(second));
    assert_eq!(collect(&tree, Traversal::InOrder).as_array(), &[2, 2, 2, 3]);

    for _ in 0..3 {
        assert_eq!(tree.remove(&2), Some(2));
        verify_links(&tree);
    }
    assert_eq!(tree.remove(&2), None);
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_removed_handles_resolve_to_nothing() {
    let mut tree = BinarySearchTree::new();
    let id: NodeId = tree.insert('m');
    tree.insert('a');
    tree.remove(&'a');
    tree.remove(&'m');
    assert!(tree.node(id).is_none());

    tree.clear();
    assert!(tree.is_empty());
    tree.insert('z');
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_formatting() {
    let tree: BinarySearchTree<u8> = [5, 3, 7, 1].into_iter().collect();
    assert_eq!(format!("{tree}"), "[1, 3, 5, 7]");

    let single: BinarySearchTree<u8> = [7].into_iter().collect();
    assert_eq!(format!("{single:?}"), "┌    -\n(7)\n└    -");
}
