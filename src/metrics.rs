//! Shape measurements of a subtree.

use crate::node::Node;

/// Number of levels in the subtree rooted at `node`. A missing node has depth 0 and a leaf has
/// depth 1.
///
/// # Examples
///
/// ```
/// use search_tree::{metrics::depth, BinarySearchTree};
///
/// let mut tree = BinarySearchTree::new();
/// assert_eq!(depth(tree.root()), 0);
///
/// tree.extend([2, 1, 3, 4]);
/// assert_eq!(depth(tree.root()), 3);
/// ```
pub fn depth<T>(node: Option<&Node<T>>) -> usize {
    match node {
        None => 0,
        Some(n) => 1 + depth(n.left()).max(depth(n.right())),
    }
}

/// How much deeper the right subtree of `node` is than its left subtree.
///
/// Positive means right-heavy, negative means left-heavy. This only describes `node` itself,
/// not the subtrees below it. Returns `None` for a missing node.
///
/// # Examples
///
/// ```
/// use search_tree::{metrics::balance_factor, BinarySearchTree};
///
/// let mut tree = BinarySearchTree::new();
/// assert_eq!(balance_factor(tree.root()), None);
///
/// tree.extend([1, 2, 3]);
/// assert_eq!(balance_factor(tree.root()), Some(2));
/// ```
pub fn balance_factor<T>(node: Option<&Node<T>>) -> Option<isize> {
    node.map(|n| depth(n.right()) as isize - depth(n.left()) as isize)
}
