/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: removal.

use super::{AvlTree, RemoveOutcome};
use crate::arena::NodeId;
use crate::error::TreeError;

impl AvlTree {
    /// Remove one occurrence of `key`.
    ///
    /// With duplicates present only the count is decremented. Otherwise the
    /// node is structurally deleted: a leaf is unlinked, a one-child node
    /// is spliced over, and a two-child node has its key and count replaced
    /// by its in-order successor's (preserving the node's identity) before
    /// the successor — which never has a left child — is spliced out
    /// instead. The tree is then rebalanced upward from the ex-parent of
    /// whichever node was unlinked.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree is empty,
    /// [`TreeError::KeyNotFound`] if the key is absent. Both leave the tree
    /// untouched.
    pub fn remove(&mut self, key: i64) -> Result<RemoveOutcome, TreeError> {
        let outcome = self.remove_inner(key)?;
        tracing::trace!(key, outcome = ?outcome, "remove");

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Ok(outcome)
    }

    /// Remove and return the ROOT key.
    ///
    /// Note the semantics: this pops whatever key currently sits at the
    /// root of the balanced tree — NOT the minimum. Callers wanting
    /// priority-queue behavior should pair [`min`](Self::min) with
    /// [`remove`](Self::remove).
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree is empty.
    pub fn pop(&mut self) -> Result<i64, TreeError> {
        let root = self.root.ok_or(TreeError::EmptyTree)?;
        let key = self.nodes[root].key;

        self.remove(key)?;
        tracing::debug!(key, "pop");

        Ok(key)
    }

    fn remove_inner(&mut self, key: i64) -> Result<RemoveOutcome, TreeError> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        let id = self.search(key).ok_or(TreeError::KeyNotFound(key))?;

        if self.nodes[id].count > 1 {
            self.nodes[id].count -= 1;
            self.size -= 1;
            return Ok(RemoveOutcome::Decremented);
        }

        let two_children = self.nodes[id].left.is_some() && self.nodes[id].right.is_some();
        let rebalance_start = if two_children {
            // Replace this node's content with its in-order successor's,
            // then delete the successor instead. The node's id stays live.
            let mut successor = self.nodes[id]
                .right
                .expect("two-child node must have a right child");
            while let Some(left) = self.nodes[successor].left {
                successor = left;
            }

            let (successor_key, successor_count) = {
                let node = &self.nodes[successor];
                (node.key, node.count)
            };
            let node = &mut self.nodes[id];
            node.key = successor_key;
            node.count = successor_count;

            self.splice_out(successor)
        } else {
            self.splice_out(id)
        };

        self.size -= 1;
        if let Some(start) = rebalance_start {
            self.rebalance_from(start);
        }

        Ok(RemoveOutcome::Removed)
    }

    /// Unlink a node with at most one child, freeing it and returning its
    /// ex-parent (the rebalancing start point), or `None` if it was the
    /// root.
    ///
    /// # Panics
    ///
    /// Panics if the node has two children — callers route those through
    /// successor replacement first, so reaching here with two children is a
    /// broken invariant.
    fn splice_out(&mut self, id: NodeId) -> Option<NodeId> {
        let (parent, child) = {
            let node = &self.nodes[id];
            let child = match (node.left, node.right) {
                (None, None) => None,
                (Some(child), None) | (None, Some(child)) => Some(child),
                (Some(_), Some(_)) => {
                    unreachable!("spliced node cannot have two children")
                }
            };
            (node.parent, child)
        };

        if let Some(child) = child {
            self.nodes[child].parent = parent;
        }
        match parent {
            Some(parent) => {
                if self.nodes[parent].left == Some(id) {
                    self.nodes[parent].left = child;
                } else {
                    self.nodes[parent].right = child;
                }
            }
            None => self.root = child,
        }

        self.nodes.remove(id);
        parent
    }
}
