/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Arena storage for AVL tree nodes.
//!
//! Nodes are stored in a slab and addressed by index, so child and parent
//! relations are plain copies instead of owned pointers. Rotations re-link
//! indices without moving nodes, and teardown is a single slab reset.

use std::ops::{Index, IndexMut};

use versioned_slab::{Key, Slab};

use crate::AvlNode;

/// Handle to a node stored in an [`AvlTree`](crate::AvlTree).
///
/// Wraps a [`versioned_slab::Key`]. The handle stays valid until the node
/// it refers to is removed from its tree; after that, resolving it via
/// [`AvlTree::node`](crate::AvlTree::node) yields `None` instead of an
/// unrelated node that reused the slot. Handles are only meaningful for the
/// tree that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NodeId(Key);

impl NodeId {
    /// Return the underlying slab [`Key`].
    pub const fn key(self) -> Key {
        self.0
    }
}

impl From<Key> for NodeId {
    fn from(key: Key) -> Self {
        Self(key)
    }
}

/// Arena storage for [`AvlNode`]s.
///
/// A newtype over [`Slab<AvlNode>`] providing type-safe indexing via
/// [`NodeId`] instead of raw [`Key`].
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Slab<AvlNode>,
}

impl NodeArena {
    /// Create a new empty arena.
    pub(crate) const fn new() -> Self {
        Self { nodes: Slab::new() }
    }

    /// Number of nodes currently stored in the arena.
    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Store a node, returning its id.
    pub(crate) fn insert(&mut self, node: AvlNode) -> NodeId {
        NodeId(self.nodes.insert(node))
    }

    /// Remove a node from the arena, returning it.
    ///
    /// # Panics
    ///
    /// Panics if the id is stale.
    pub(crate) fn remove(&mut self, id: NodeId) -> AvlNode {
        self.nodes.remove(id.key())
    }

    /// Resolve an id to a node, or `None` if the id is stale.
    pub(crate) fn get(&self, id: NodeId) -> Option<&AvlNode> {
        self.nodes.get(id.key())
    }

    /// Drop every node and invalidate all outstanding ids.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Memory used by the arena, in bytes.
    pub(crate) const fn mem_usage(&self) -> usize {
        self.nodes.mem_usage()
    }
}

impl Index<NodeId> for NodeArena {
    type Output = AvlNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.key()]
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.key()]
    }
}
