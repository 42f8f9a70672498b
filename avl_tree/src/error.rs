/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Error type for tree operations.

use thiserror::Error;

/// Errors returned by [`AvlTree`](crate::AvlTree) operations.
///
/// All failures are synchronous return values; an operation that fails
/// leaves the tree exactly as it was. Internal invariant violations are
/// never reported through this type — they panic, since a broken tree is a
/// defect and not a recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The requested key is not present in the tree.
    #[error("key {0} is not in the tree")]
    KeyNotFound(i64),

    /// The operation is meaningless on an empty tree.
    #[error("operation requires a non-empty tree")]
    EmptyTree,

    /// The node handle refers to a node that no longer exists.
    #[error("node handle does not refer to a live node")]
    StaleHandle,
}
