/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read path: lookup and order queries.
//!
//! Everything here is non-mutating and allocation-free: iterative descents
//! for key lookup and min/max, parent-link walks for depth.

use std::cmp::Ordering;

use super::AvlTree;
use crate::arena::NodeId;
use crate::error::TreeError;

impl AvlTree {
    /// Find the node holding `key`.
    ///
    /// Iterative descent from the root: left on smaller, right on greater.
    /// O(height), no allocation.
    pub fn search(&self, key: i64) -> Option<NodeId> {
        let mut scan = self.root;
        while let Some(id) = scan {
            let node = &self.nodes[id];
            scan = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// `true` if `key` is present in the tree.
    pub fn contains(&self, key: i64) -> bool {
        self.search(key).is_some()
    }

    /// Number of occurrences of `key` in the tree; 0 when absent.
    pub fn count(&self, key: i64) -> u32 {
        self.search(key).map_or(0, |id| self.nodes[id].count)
    }

    /// The node holding the smallest key (the all-left descent's end).
    pub fn min_node(&self) -> Option<NodeId> {
        let mut scan = self.root?;
        while let Some(left) = self.nodes[scan].left {
            scan = left;
        }
        Some(scan)
    }

    /// The node holding the largest key (the all-right descent's end).
    pub fn max_node(&self) -> Option<NodeId> {
        let mut scan = self.root?;
        while let Some(right) = self.nodes[scan].right {
            scan = right;
        }
        Some(scan)
    }

    /// The smallest key in the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree is empty.
    pub fn min(&self) -> Result<i64, TreeError> {
        self.min_node()
            .map(|id| self.nodes[id].key)
            .ok_or(TreeError::EmptyTree)
    }

    /// The largest key in the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree is empty.
    pub fn max(&self) -> Result<i64, TreeError> {
        self.max_node()
            .map(|id| self.nodes[id].key)
            .ok_or(TreeError::EmptyTree)
    }

    /// Height of the subtree rooted at `id`, reported 0-based by
    /// convention: a leaf has height 0. (Internally heights are cached
    /// 1-based; this subtracts one.)
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleHandle`] if the handle no longer refers to a live
    /// node.
    pub fn node_height(&self, id: NodeId) -> Result<u32, TreeError> {
        let node = self.node(id).ok_or(TreeError::StaleHandle)?;
        Ok(node.height - 1)
    }

    /// Distance from the node at `id` to the root, following parent links;
    /// the root has depth 0.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleHandle`] if the handle no longer refers to a live
    /// node.
    pub fn depth(&self, id: NodeId) -> Result<u32, TreeError> {
        if self.node(id).is_none() {
            return Err(TreeError::StaleHandle);
        }

        let mut depth = 0;
        let mut scan = id;
        while let Some(parent) = self.nodes[scan].parent {
            scan = parent;
            depth += 1;
        }
        Ok(depth)
    }
}
