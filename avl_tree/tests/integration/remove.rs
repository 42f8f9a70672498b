/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for the removal path: count decrements, the three structural
//! deletion shapes, pop, and error behavior.

use avl_tree::{AvlTree, RemoveOutcome, TreeError};

use crate::helpers::{BALANCED_SEVEN, inorder, root_key, tree_of};

#[test]
fn test_remove_leaf() {
    let mut tree = tree_of(&BALANCED_SEVEN);

    assert_eq!(tree.remove(1), Ok(RemoveOutcome::Removed));

    assert_eq!(inorder(&tree), vec![2, 3, 4, 5, 6, 7]);
    assert_eq!(tree.len(), 6);
    assert!(!tree.contains(1));
    tree.assert_invariants();
}

#[test]
fn test_remove_one_child_node() {
    // 3
    //  \        removing 3 splices 4 into its place
    //   4
    let mut tree = tree_of(&[2, 1, 3, 4]);

    assert_eq!(tree.remove(3), Ok(RemoveOutcome::Removed));

    assert_eq!(inorder(&tree), vec![1, 2, 4]);
    tree.assert_invariants();
}

#[test]
fn test_remove_two_children_uses_successor() {
    let mut tree = tree_of(&BALANCED_SEVEN);

    // 4 has two children; its in-order successor 5 replaces it.
    assert_eq!(tree.remove(4), Ok(RemoveOutcome::Removed));

    assert_eq!(root_key(&tree), 5);
    assert_eq!(inorder(&tree), vec![1, 2, 3, 5, 6, 7]);
    assert!(!tree.contains(4));
    tree.assert_invariants();
}

#[test]
fn test_successor_keeps_node_identity() {
    let mut tree = tree_of(&BALANCED_SEVEN);
    let root_id = tree.root().expect("non-empty");

    tree.remove(4).expect("4 is present");

    // The root node object survived; only its content was replaced.
    assert_eq!(tree.root(), Some(root_id));
    assert_eq!(tree.node(root_id).expect("root is live").key(), 5);
}

#[test]
fn test_successor_carries_its_count() {
    let mut tree = tree_of(&[4, 2, 6, 5]);
    tree.insert(5); // successor of 4 now has count 2

    tree.remove(4).expect("4 is present");

    assert_eq!(tree.count(5), 2);
    assert_eq!(tree.len(), 4);
    tree.assert_invariants();
}

#[test]
fn test_remove_root_of_small_trees() {
    let mut tree = tree_of(&[1]);
    assert_eq!(tree.remove(1), Ok(RemoveOutcome::Removed));
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
    tree.assert_invariants();

    let mut tree = tree_of(&[1, 2]);
    assert_eq!(tree.remove(1), Ok(RemoveOutcome::Removed));
    assert_eq!(root_key(&tree), 2);
    tree.assert_invariants();
}

#[test]
fn test_remove_decrements_duplicates_first() {
    let mut tree = AvlTree::new();
    for _ in 0..3 {
        tree.insert(7);
    }

    assert_eq!(tree.remove(7), Ok(RemoveOutcome::Decremented));
    assert_eq!(tree.count(7), 2);
    assert_eq!(tree.remove(7), Ok(RemoveOutcome::Decremented));
    assert_eq!(tree.count(7), 1);
    assert!(tree.contains(7));

    // The node only disappears at count zero.
    assert_eq!(tree.remove(7), Ok(RemoveOutcome::Removed));
    assert!(!tree.contains(7));
    assert!(tree.is_empty());
}

#[test]
fn test_remove_errors_do_not_mutate() {
    let mut tree = tree_of(&BALANCED_SEVEN);
    let before = inorder(&tree);

    assert_eq!(tree.remove(99), Err(TreeError::KeyNotFound(99)));
    assert_eq!(inorder(&tree), before);
    assert_eq!(tree.len(), 7);

    let mut empty = AvlTree::new();
    assert_eq!(empty.remove(1), Err(TreeError::EmptyTree));
    assert!(empty.is_empty());
}

#[test]
fn test_remove_all_round_trip() {
    let keys: Vec<i64> = (0..64).collect();
    let mut tree = tree_of(&keys);

    // Remove in an order unrelated to insertion.
    for &key in keys.iter().rev() {
        tree.remove(key).expect("key is present");
        tree.assert_invariants();
    }

    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.node_count(), 0);
}

#[test]
fn test_remove_rebalances_deep_tree() {
    let mut tree = tree_of(&(0..32).collect::<Vec<_>>());

    // Gut one flank; the rebalancer must keep the height logarithmic.
    for key in 0..24 {
        tree.remove(key).expect("key is present");
    }

    assert_eq!(inorder(&tree), (24..32).collect::<Vec<_>>());
    assert!(tree.height() <= 4, "height {} exceeds bound", tree.height());
    tree.assert_invariants();
}

#[test]
fn test_pop_returns_root_key() {
    let mut tree = tree_of(&BALANCED_SEVEN);

    // Pop takes whatever sits at the root — not the minimum.
    assert_eq!(tree.pop(), Ok(4));
    assert!(!tree.contains(4));
    assert_eq!(tree.len(), 6);

    // The successor 5 moved into the root, so it pops next.
    assert_eq!(tree.pop(), Ok(5));
    tree.assert_invariants();
}

#[test]
fn test_pop_until_empty() {
    let mut tree = tree_of(&[3, 1, 4, 1, 5, 9, 2, 6]);
    let mut popped = Vec::new();

    while !tree.is_empty() {
        popped.push(tree.pop().expect("tree is non-empty"));
    }

    assert_eq!(tree.len(), 0);
    assert_eq!(tree.node_count(), 0);
    // 8 logical elements went in (1 was inserted twice).
    assert_eq!(popped.len(), 8);
    tree.assert_invariants();
}

#[test]
fn test_pop_empty_tree() {
    let mut tree = AvlTree::new();
    assert_eq!(tree.pop(), Err(TreeError::EmptyTree));
    assert!(tree.is_empty());
}
