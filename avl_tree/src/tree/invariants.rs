/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Structural invariant checks.
//!
//! The sweep recomputes everything the tree caches — heights, size, node
//! count — from scratch and compares against the maintained values, on top
//! of the ordering, balance, and parent-link checks. Mutating operations
//! run it automatically in debug builds, so every `cargo test` mutation is
//! followed by a full audit.

use super::AvlTree;
use crate::arena::NodeId;

/// Ground-truth values recomputed for a subtree.
struct SubtreeStats {
    /// 1-based height of the subtree.
    height: u32,
    /// Logical elements (sum of duplicate counts).
    logical: u64,
    /// Physical nodes.
    nodes: usize,
}

impl AvlTree {
    /// Verify every structural invariant of the tree, panicking with a
    /// descriptive message on the first violation.
    ///
    /// Checks, for every node: binary-search ordering within the ancestor
    /// key window, the AVL balance window, parent-link consistency, and
    /// height-cache correctness. Tree-wide: `len()` equals the sum of
    /// duplicate counts, the arena holds exactly the reachable nodes, and
    /// an empty tree has size 0.
    ///
    /// Runs automatically after every mutation when `debug_assertions` are
    /// enabled; call it explicitly from tests otherwise.
    pub fn assert_invariants(&self) {
        let Some(root) = self.root else {
            assert_eq!(self.size, 0, "empty tree must have size 0");
            assert_eq!(
                self.nodes.len(),
                0,
                "empty tree must not retain arena nodes"
            );
            return;
        };

        assert!(self.size > 0, "non-empty tree must have size > 0");
        assert_eq!(
            self.nodes[root].parent, None,
            "root must not have a parent"
        );

        let stats = self.check_subtree(root, None, None);
        assert_eq!(
            stats.logical, self.size,
            "size must equal the sum of duplicate counts"
        );
        assert_eq!(
            stats.nodes,
            self.nodes.len(),
            "arena must hold exactly the nodes reachable from the root"
        );
    }

    /// Recursively check the subtree at `id` against the open key window
    /// `(lower, upper)`, returning recomputed ground-truth stats.
    fn check_subtree(&self, id: NodeId, lower: Option<i64>, upper: Option<i64>) -> SubtreeStats {
        let node = &self.nodes[id];

        if let Some(lower) = lower {
            assert!(
                node.key > lower,
                "BST ordering violated: key {} is not above its ancestor window ({lower}, _)",
                node.key
            );
        }
        if let Some(upper) = upper {
            assert!(
                node.key < upper,
                "BST ordering violated: key {} is not below its ancestor window (_, {upper})",
                node.key
            );
        }
        assert!(node.count >= 1, "node {} has count 0", node.key);

        let left = node.left.map(|child| {
            assert_eq!(
                self.nodes[child].parent,
                Some(id),
                "left child of key {} has an inconsistent parent link",
                node.key
            );
            self.check_subtree(child, lower, Some(node.key))
        });
        let right = node.right.map(|child| {
            assert_eq!(
                self.nodes[child].parent,
                Some(id),
                "right child of key {} has an inconsistent parent link",
                node.key
            );
            self.check_subtree(child, Some(node.key), upper)
        });

        let left_height = left.as_ref().map_or(0, |stats| stats.height);
        let right_height = right.as_ref().map_or(0, |stats| stats.height);

        let expected_height = 1 + left_height.max(right_height);
        assert_eq!(
            node.height, expected_height,
            "stale height cache at key {}: stored {}, recomputed {expected_height}",
            node.key, node.height
        );

        let imbalance = left_height.abs_diff(right_height);
        assert!(
            imbalance <= 1,
            "AVL balance violated at key {}: left height {left_height}, right height {right_height}",
            node.key
        );

        SubtreeStats {
            height: expected_height,
            logical: u64::from(node.count)
                + left.as_ref().map_or(0, |stats| stats.logical)
                + right.as_ref().map_or(0, |stats| stats.logical),
            nodes: 1
                + left.as_ref().map_or(0, |stats| stats.nodes)
                + right.as_ref().map_or(0, |stats| stats.nodes),
        }
    }
}
