/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

#![warn(missing_docs)]

//! AvlTree - A self-balancing binary search tree over integer keys.
//!
//! This crate implements an AVL tree with multiset semantics: inserting a
//! key that is already present increments a per-node duplicate count rather
//! than allocating a second node. The balance invariant (the heights of any
//! node's subtrees differ by at most one) is restored after every insertion
//! and deletion by an upward rebalancing walk applying single and double
//! rotations.
//!
//! # Arena Storage
//!
//! All nodes live in a [`NodeId`]-indexed arena backed by a versioned slab.
//! Child and parent relations are plain indices instead of owned pointers,
//! which gives better cache locality, makes the parent back-links needed by
//! the rebalancing walk trivially safe, and turns whole-tree teardown into
//! a single arena reset. Node handles returned by [`AvlTree::search`] carry
//! a slot version, so a handle kept across a removal is detected as stale
//! rather than resolving to an unrelated node that reused the slot.
//!
//! # Example
//!
//! ```
//! use avl_tree::{AvlTree, Traversal};
//!
//! let mut tree = AvlTree::new();
//! for key in [4, 2, 6, 1, 3, 5, 7] {
//!     tree.insert(key);
//! }
//!
//! // Perfectly balanced: three levels, key 4 at the root.
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.len(), 7);
//!
//! let inorder: Vec<i64> = tree.traverse(Traversal::InOrder).collect();
//! assert_eq!(inorder, vec![1, 2, 3, 4, 5, 6, 7]);
//!
//! tree.remove(4)?;
//! assert!(!tree.contains(4));
//! # Ok::<(), avl_tree::TreeError>(())
//! ```

mod arena;
mod debug;
mod error;
mod iter;
mod node;
mod tree;

pub use arena::NodeId;
pub use debug::Summary;
pub use error::TreeError;
pub use iter::{Keys, Leaves, Traversal};
pub use node::AvlNode;
pub use tree::{AvlTree, InsertOutcome, RemoveOutcome};
