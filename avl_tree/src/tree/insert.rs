/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: insertion.

use std::cmp::Ordering;

use super::{AvlTree, InsertOutcome};
use crate::node::AvlNode;

impl AvlTree {
    /// Insert one occurrence of `key`.
    ///
    /// If the key is already present its duplicate count is incremented and
    /// the structure is untouched — heights cannot change, so no
    /// rebalancing runs. Otherwise a new leaf is attached at the descent's
    /// end and the tree is rebalanced upward from it.
    ///
    /// Never fails: arena growth goes through `Vec`, which aborts the
    /// process on allocation failure like every other collection.
    pub fn insert(&mut self, key: i64) -> InsertOutcome {
        let outcome = self.insert_inner(key);
        tracing::trace!(key, outcome = ?outcome, "insert");

        #[cfg(debug_assertions)]
        self.assert_invariants();

        outcome
    }

    fn insert_inner(&mut self, key: i64) -> InsertOutcome {
        let Some(mut scan) = self.root else {
            let id = self.nodes.insert(AvlNode::new(key));
            self.root = Some(id);
            self.size += 1;
            return InsertOutcome::Inserted;
        };

        // Descend to the key's node or to the attach point.
        loop {
            let next = match key.cmp(&self.nodes[scan].key) {
                Ordering::Equal => {
                    self.nodes[scan].count += 1;
                    self.size += 1;
                    return InsertOutcome::Incremented;
                }
                Ordering::Less => self.nodes[scan].left,
                Ordering::Greater => self.nodes[scan].right,
            };
            match next {
                Some(child) => scan = child,
                None => break,
            }
        }

        let id = self.nodes.insert(AvlNode::child_of(key, scan));
        if key < self.nodes[scan].key {
            self.nodes[scan].left = Some(id);
        } else {
            self.nodes[scan].right = Some(id);
        }
        self.size += 1;

        self.rebalance_from(id);

        InsertOutcome::Inserted
    }
}
