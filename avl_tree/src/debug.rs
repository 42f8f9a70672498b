/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Debug and introspection utilities.
//!
//! A stats snapshot and a sideways text dump of the tree structure, for
//! diagnostics and tests. Neither is part of the operational surface.

use crate::arena::NodeId;
use crate::tree::AvlTree;

/// Aggregate snapshot of a tree's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Logical elements, counting duplicates.
    pub num_entries: u64,
    /// Physical nodes (distinct keys).
    pub num_nodes: usize,
    /// Tree height in levels (0 when empty).
    pub height: u32,
}

impl AvlTree {
    /// Snapshot the tree's aggregate shape.
    pub fn summary(&self) -> Summary {
        Summary {
            num_entries: self.len(),
            num_nodes: self.node_count(),
            height: self.height(),
        }
    }

    /// Render the tree sideways as text, one node per line.
    ///
    /// The right subtree is printed above its parent and the left below, so
    /// the dump reads as the tree rotated 90 degrees counter-clockwise.
    /// Each line shows the key, its duplicate count, and the node's 0-based
    /// height:
    ///
    /// ```text
    ///         7 (x1) [h=0]
    ///     6 (x1) [h=1]
    ///         5 (x2) [h=0]
    /// 4 (x1) [h=2]
    ///         3 (x1) [h=0]
    ///     2 (x1) [h=1]
    ///         1 (x1) [h=0]
    /// ```
    ///
    /// Returns an empty string for an empty tree.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.root {
            self.render_node(root, 0, &mut out);
        }
        out
    }

    fn render_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let node = &self.nodes[id];

        if let Some(right) = node.right {
            self.render_node(right, depth + 1, out);
        }

        for _ in 0..depth {
            out.push_str("    ");
        }
        out.push_str(&format!(
            "{} (x{}) [h={}]\n",
            node.key,
            node.count,
            node.height - 1
        ));

        if let Some(left) = node.left {
            self.render_node(left, depth + 1, out);
        }
    }
}
