//! The owning [`BinarySearchTree`].
//!
//! # Examples
//!
//! ```
//! use search_tree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//! for x in [10, 2, 45, 12, 6, 4, 5, 1, 3, 25, 55] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.depth(), 5);
//! assert_eq!(tree.balance_factor(), Some(-1));
//! assert_eq!(tree.find_lca(&4, &6).map(|n| *n.value()), Some(6));
//!
//! // Rebalancing may pick a new root, so look it up again afterwards.
//! tree.balance();
//! assert_eq!(tree.root().map(|n| *n.value()), Some(2));
//! assert_eq!(
//!     tree.iter().copied().collect::<Vec<_>>(),
//!     vec![1, 2, 3, 4, 5, 6, 10, 12, 25, 45, 55]
//! );
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::lca;
use crate::metrics;
use crate::node::{Link, Node};
use crate::rotate;
use crate::traverse::{self, Inorder};

/// A Binary Search Tree whose values are also their ordering keys.
///
/// Smaller values go left, equal or larger values go right, so duplicates are kept. Inserting
/// never rebalances; call [`balance`][Self::balance] for that.
///
/// Cloning, comparing, formatting and dropping never recurse, so they are fine on trees built
/// from sorted input.
#[derive(Clone, PartialEq, Eq)]
pub struct BinarySearchTree<T> {
    root: Link<T>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    // Pre-order values pin down the shape of a tree of distinct values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("preorder", &self.preorder_iterative())
            .finish()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node, if the tree has any nodes.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The root slot. Pass this to functions that restructure a subtree in place, like
    /// [`rotate::balance`].
    pub fn root_mut(&mut self) -> &mut Link<T> {
        &mut self.root
    }

    /// Detaches the whole tree, leaving it empty. Useful for rotating the root:
    /// take it, rotate it, and [`set_root`][Self::set_root] the result.
    pub fn take_root(&mut self) -> Link<T> {
        self.root.take()
    }

    /// Replaces the root and returns the previous one.
    pub fn set_root(&mut self, root: Link<T>) -> Link<T> {
        std::mem::replace(&mut self.root, root)
    }

    /// Returns true if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the values in the tree. This walks every node.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Iterates over the values in order.
    pub fn iter(&self) -> Inorder<'_, T> {
        Inorder::new(self.root())
    }

    /// In-order values. See [`traverse::inorder`].
    pub fn inorder(&self) -> Vec<&T> {
        traverse::inorder(self.root())
    }

    /// Pre-order values. See [`traverse::preorder`].
    pub fn preorder(&self) -> Vec<&T> {
        traverse::preorder(self.root())
    }

    /// Post-order values. See [`traverse::postorder`].
    pub fn postorder(&self) -> Vec<&T> {
        traverse::postorder(self.root())
    }

    /// Pre-order values collected with an explicit stack. See [`traverse::preorder_iterative`].
    pub fn preorder_iterative(&self) -> Vec<&T> {
        traverse::preorder_iterative(self.root())
    }

    /// Number of levels in the tree. See [`metrics::depth`].
    pub fn depth(&self) -> usize {
        metrics::depth(self.root())
    }

    /// Balance factor of the root. See [`metrics::balance_factor`].
    pub fn balance_factor(&self) -> Option<isize> {
        metrics::balance_factor(self.root())
    }

    /// Runs one rebalancing pass from the root and returns how many rotations it made. See
    /// [`rotate::balance`].
    pub fn balance(&mut self) -> usize {
        let rotations = rotate::balance(&mut self.root);
        debug!(rotations, "rebalance pass finished");
        rotations
    }
}

impl<T> BinarySearchTree<T>
where
    T: Ord,
{
    /// Inserts `value` as a new leaf. Values smaller than a node go to its left, everything
    /// else (including equal values) goes to its right.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.preorder(), vec![&2, &1, &2]);
    /// assert_eq!(tree.root().and_then(|n| n.right()).map(|n| *n.value()), Some(2));
    /// ```
    pub fn insert(&mut self, value: T) {
        let mut depth = 1;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < *node.value() {
                node.left_mut()
            } else {
                node.right_mut()
            };
            depth += 1;
        }

        *slot = Some(Node::new_boxed(value));
        trace!(depth, "inserted value");
    }

    /// Returns true if some node holds `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [3, 1, 4].into_iter().collect();
    /// assert!(tree.contains(&4));
    /// assert!(!tree.contains(&5));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        lca::find(self.root(), value).is_some()
    }

    /// Lowest common ancestor of `a` and `b`. See [`lca::find_lca`].
    pub fn find_lca(&self, a: &T, b: &T) -> Option<&Node<T>> {
        lca::find_lca(self.root(), a, b)
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Inorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
