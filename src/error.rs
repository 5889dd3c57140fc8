//! Error types returned by tree queries.

use thiserror::Error;

/// Returned by [`min`](crate::OrderedTree::min) and
/// [`max`](crate::OrderedTree::max) when the tree has no nodes. There is no
/// extreme value to reference in an empty tree, so the caller gets an explicit
/// failure instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("tree is empty")]
pub struct EmptyTreeError;
