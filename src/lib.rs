//! This crate exposes [`OrderedTree`], an ordered-set container backed by
//! an unbalanced Binary Search Tree (BST).
//!
//! ## How it works
//!
//! Each stored value lives in its own node, and each node owns up to two
//! children. The children are placed so that everything reachable through a
//! node's left child is less than the node's own value, and everything
//! reachable through its right child is greater. A value is stored at most
//! once; re-inserting it is a no-op.
//!
//! That placement rule is what makes the container useful: a lookup follows
//! a single branch at every node, so it finishes in `O(height)` steps, and
//! walking the tree left-node-right yields the values in ascending order
//! with no extra bookkeeping.
//!
//! This tree does no rebalancing, so its height depends on the insertion
//! order: sorted input degrades it to a linked list and `O(n)` operations.
//! Every operation here is loop- or explicit-stack-based, so even such a
//! degenerate tree cannot overflow the call stack.
//!
//! ## Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! for value in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(value);
//! }
//!
//! assert!(tree.contains(&4));
//! assert_eq!(tree.min(), Ok(&1));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod tree;

pub use error::EmptyTreeError;
pub use tree::OrderedTree;

#[cfg(test)]
pub(crate) mod test;
