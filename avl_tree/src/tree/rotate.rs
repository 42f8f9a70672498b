/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Rotations and the upward rebalancing walk.
//!
//! A rotation is a local restructuring of three nodes that preserves the
//! search ordering while shifting subtree heights. The rebalancer walks
//! from a mutated node to the root, refreshing cached heights and rotating
//! wherever the balance factor leaves the [-1, 1] window. One upward pass
//! is enough: a single (or double) rotation fully restores the invariant
//! for the subtree it roots, and ancestors only ever see a height change
//! the walk's own recomputation captures.

use super::AvlTree;
use crate::arena::{NodeArena, NodeId};

/// Which child slot of its parent a node occupies.
///
/// Captured from the structural parent/child relation before a rotation
/// re-links anything, so the grandparent re-link never depends on key
/// comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChildSlot {
    Left,
    Right,
}

impl AvlTree {
    /// Walk from `start` up to the root, refreshing heights and restoring
    /// the balance invariant at every level.
    ///
    /// `start` is the lowest node whose subtree a mutation may have
    /// disturbed: the freshly attached leaf on insertion, the ex-parent of
    /// a spliced-out node on deletion.
    ///
    /// # Balance cases
    ///
    /// With `balance = height(right) - height(left)`:
    /// - `balance >= 2` and the right child leans right (or is even):
    ///   Right-Right, one left rotation.
    /// - `balance >= 2` and the right child leans left: Right-Left, rotate
    ///   the child right first, then rotate left.
    /// - The `balance <= -2` cases mirror these with left/right swapped.
    pub(crate) fn rebalance_from(&mut self, start: NodeId) {
        let mut scan = Some(start);

        while let Some(id) = scan {
            update_height(&mut self.nodes, id);
            let balance = balance_of(&self.nodes, id);

            let subtree = if balance >= 2 {
                let child = self.nodes[id]
                    .right
                    .expect("right-heavy node must have a right child");
                if height_of(&self.nodes, self.nodes[child].right)
                    < height_of(&self.nodes, self.nodes[child].left)
                {
                    rotate_right(&mut self.nodes, child);
                }
                rotate_left(&mut self.nodes, id)
            } else if balance <= -2 {
                let child = self.nodes[id]
                    .left
                    .expect("left-heavy node must have a left child");
                if height_of(&self.nodes, self.nodes[child].left)
                    < height_of(&self.nodes, self.nodes[child].right)
                {
                    rotate_left(&mut self.nodes, child);
                }
                rotate_right(&mut self.nodes, id)
            } else {
                id
            };

            // A rotation replaced `id` as the subtree root; if the new root
            // has no parent it is the tree root now.
            if self.nodes[subtree].parent.is_none() {
                self.root = Some(subtree);
            }

            scan = self.nodes[subtree].parent;
        }
    }
}

/// Height of an optional subtree; an absent child contributes 0.
fn height_of(nodes: &NodeArena, id: Option<NodeId>) -> u32 {
    id.map_or(0, |id| nodes[id].height)
}

/// Refresh a node's cached height from its children.
fn update_height(nodes: &mut NodeArena, id: NodeId) {
    let left = height_of(nodes, nodes[id].left);
    let right = height_of(nodes, nodes[id].right);
    nodes[id].height = 1 + left.max(right);
}

/// Balance factor of a node: height(right) - height(left).
fn balance_of(nodes: &NodeArena, id: NodeId) -> i64 {
    let left = height_of(nodes, nodes[id].left);
    let right = height_of(nodes, nodes[id].right);
    i64::from(right) - i64::from(left)
}

/// Which child slot of `parent` holds `child`.
///
/// # Panics
///
/// Panics if `child` is not a child of `parent`.
fn slot_in(nodes: &NodeArena, parent: NodeId, child: NodeId) -> ChildSlot {
    if nodes[parent].left == Some(child) {
        ChildSlot::Left
    } else {
        assert_eq!(
            nodes[parent].right,
            Some(child),
            "parent link does not match either child slot"
        );
        ChildSlot::Right
    }
}

/// Left rotation around `z`, for a right-heavy subtree.
///
/// ```text
///   Z                                Y
///  /  \                            /   \
/// T1   Y     rotate_left(Z)       Z      X
///     /  \   - - - - - - - ->    / \    / \
///    T2   X                     T1  T2 T3  T4
///        / \
///      T3  T4
/// ```
///
/// `Y` takes `Z`'s structural position (including the grandparent's child
/// slot, captured before any re-link), `Z` becomes `Y`'s left child and
/// adopts `T2`. `Z`'s height settles first, then `Y`'s, since `Z` now sits
/// below `Y`. Returns the new subtree root `Y`.
fn rotate_left(nodes: &mut NodeArena, z: NodeId) -> NodeId {
    let y = nodes[z].right.expect("left rotation requires a right child");
    let t2 = nodes[y].left;
    let parent = nodes[z].parent;
    let slot = parent.map(|p| slot_in(nodes, p, z));

    nodes[y].left = Some(z);
    nodes[y].parent = parent;
    nodes[z].right = t2;
    nodes[z].parent = Some(y);
    if let Some(t2) = t2 {
        nodes[t2].parent = Some(z);
    }

    match (parent, slot) {
        (Some(p), Some(ChildSlot::Left)) => nodes[p].left = Some(y),
        (Some(p), Some(ChildSlot::Right)) => nodes[p].right = Some(y),
        _ => {}
    }

    update_height(nodes, z);
    update_height(nodes, y);

    y
}

/// Right rotation around `z`, for a left-heavy subtree.
///
/// ```text
///        Z                                Y
///       / \                             /   \
///      Y   T4     rotate_right(Z)      X      Z
///     / \         - - - - - - - ->    / \    / \
///    X   T3                          T1 T2  T3  T4
///   / \
/// T1   T2
/// ```
///
/// Mirror image of [`rotate_left`]. Returns the new subtree root `Y`.
fn rotate_right(nodes: &mut NodeArena, z: NodeId) -> NodeId {
    let y = nodes[z].left.expect("right rotation requires a left child");
    let t3 = nodes[y].right;
    let parent = nodes[z].parent;
    let slot = parent.map(|p| slot_in(nodes, p, z));

    nodes[y].right = Some(z);
    nodes[y].parent = parent;
    nodes[z].left = t3;
    nodes[z].parent = Some(y);
    if let Some(t3) = t3 {
        nodes[t3].parent = Some(z);
    }

    match (parent, slot) {
        (Some(p), Some(ChildSlot::Left)) => nodes[p].left = Some(y),
        (Some(p), Some(ChildSlot::Right)) => nodes[p].right = Some(y),
        _ => {}
    }

    update_height(nodes, z);
    update_height(nodes, y);

    y
}
