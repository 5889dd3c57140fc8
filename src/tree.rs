//! An unbalanced BST storing each distinct value once, in order.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! // Inserting the same value again is a no-op.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing a value reports whether it was present.
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::EmptyTreeError;

/// An owned child slot: either empty or the sole owner of a subtree.
type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

/// An ordered set backed by an unbalanced Binary Search Tree. This can be
/// used for inserting, finding, and removing values of any type with a total
/// order.
///
/// Duplicates are not stored: inserting a value that is already present
/// leaves the tree untouched. The tree does no rebalancing, so operations run
/// in `O(height)` where `height` is `O(n)` in the worst case (values inserted
/// in sorted order) and `O(lg n)` for lucky insertion orders.
pub struct OrderedTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    // The derived drop would recurse through the `Box` chain and could blow
    // the stack on a degenerate tree, so tear down iteratively instead.
    fn drop(&mut self) {
        self.clear();
    }
}

/// Cloning rebuilds the tree by re-inserting the source's values in
/// pre-order: the root is inserted first and stays the root, and every later
/// value takes the same branch it took in the source. The clone is therefore
/// shape-identical to the source and shares no nodes with it.
impl<T> Clone for OrderedTree<T>
where
    T: Ord + Clone,
{
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        let mut to_visit: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = to_visit.pop() {
            copy.insert(node.value.clone());
            // Right before left so the left subtree is replayed first.
            to_visit.extend(node.right.as_deref());
            to_visit.extend(node.left.as_deref());
        }
        copy
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns how many values the tree holds.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Inserts the given value into the tree. Returns `true` if the value was
    /// newly inserted and `false` if it was already present, in which case
    /// the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            match value.cmp(&node.value) {
                Ordering::Less => cur = &mut node.left,
                Ordering::Greater => cur = &mut node.right,
                Ordering::Equal => return false,
            }
        }
        *cur = Some(Box::new(Node {
            value,
            left: None,
            right: None,
        }));
        self.len += 1;
        true
    }

    /// Returns `true` if the given value is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match value.cmp(&node.value) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Removes the given value from the tree. Returns `true` if the value was
    /// present. Removing a value that isn't in the tree (or removing from an
    /// empty tree) is a no-op.
    ///
    /// A node with at most one child is spliced out: its slot is replaced by
    /// its sole child, or emptied. A node with two children instead has the
    /// minimum of its right subtree promoted into its slot. That minimum is
    /// greater than everything in the left subtree and less than everything
    /// remaining in the right subtree, so the BST invariant holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.remove(&1));
    /// assert!(!tree.contains(&1));
    /// assert!(!tree.remove(&1));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        // Walk down to the link owning the matching node, if there is one.
        // The direction is decided on a short-lived shared borrow so `cur`
        // carries no loan out of the loop.
        let mut cur = &mut self.root;
        loop {
            let ordering = match cur.as_deref() {
                None => return false,
                Some(node) => value.cmp(&node.value),
            };
            match ordering {
                Ordering::Less => cur = &mut cur.as_mut().expect("compared against this node").left,
                Ordering::Greater => {
                    cur = &mut cur.as_mut().expect("compared against this node").right
                }
                Ordering::Equal => break,
            }
        }

        let two_children = cur
            .as_deref()
            .map_or(false, |node| node.left.is_some() && node.right.is_some());
        if two_children {
            let node = cur.as_deref_mut().expect("two children imply a node");
            let successor = Node::pop_min(&mut node.right);
            node.value = successor.value;
        } else if let Some(node) = cur.take() {
            *cur = node.left.or(node.right);
        }
        self.len -= 1;
        true
    }

    /// Returns a reference to the smallest value in the tree, or
    /// [`EmptyTreeError`] if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{EmptyTreeError, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.min(), Err(EmptyTreeError));
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// assert_eq!(tree.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T, EmptyTreeError> {
        let mut node = self.root.as_deref().ok_or(EmptyTreeError)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    /// Returns a reference to the largest value in the tree, or
    /// [`EmptyTreeError`] if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{EmptyTreeError, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.max(), Err(EmptyTreeError));
    ///
    /// tree.insert(2);
    /// tree.insert(3);
    /// assert_eq!(tree.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&T, EmptyTreeError> {
        let mut node = self.root.as_deref().ok_or(EmptyTreeError)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }

    /// Removes every value from the tree. Calling this on an empty tree is a
    /// no-op.
    pub fn clear(&mut self) {
        // Detach each node's children before the node itself is dropped so no
        // `Box` drop ever recurses into a subtree.
        let mut to_drop: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = to_drop.pop() {
            to_drop.extend(node.left.take());
            to_drop.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Returns an iterator over the values of the tree in ascending order.
    /// On an empty tree the iterator yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for value in [2, 3, 1] {
    ///     tree.insert(value);
    /// }
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// A lazy in-order iterator over an [`OrderedTree`], yielding its values in
/// ascending order. The iterator keeps an explicit stack of the nodes on the
/// path to the next value instead of recursing.
pub struct Iter<'a, T> {
    /// Nodes whose value (and right subtree) have not been yielded yet, with
    /// the next one to yield on top.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

impl<T> Node<T> {
    /// Unlinks and returns the leftmost node under `link`, replacing its slot
    /// with its right child. Panics if `link` is empty.
    fn pop_min(link: &mut Link<T>) -> Box<Self> {
        let mut cur = link;
        while cur.as_ref().map_or(false, |node| node.left.is_some()) {
            cur = &mut cur.as_mut().expect("left child was just checked").left;
        }
        let mut node = cur.take().expect("pop_min requires a non-empty link");
        *cur = node.right.take();
        node
    }
}
