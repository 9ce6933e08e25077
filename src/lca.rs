//! Searches that lean on the ordering invariant instead of visiting every node.

use std::cmp::Ordering;

use crate::node::Node;

/// Finds the lowest common ancestor of the nodes holding `a` and `b`.
///
/// Walks down from `root`: while both values are smaller than the current value it goes left,
/// while both are larger it goes right. The first node where they split (or where one of them
/// matches) is the answer. Returns `None` if the walk runs off the tree.
///
/// Both values are expected to be in the tree. That isn't checked. If either is missing the
/// result is just the node where the walk stopped.
///
/// # Examples
///
/// ```
/// use search_tree::{lca::find_lca, BinarySearchTree};
///
/// let tree: BinarySearchTree<_> = [10, 2, 45, 12, 6, 4, 5, 1, 3, 25, 55]
///     .into_iter()
///     .collect();
///
/// assert_eq!(find_lca(tree.root(), &4, &6).map(|n| *n.value()), Some(6));
/// assert_eq!(find_lca(tree.root(), &1, &55).map(|n| *n.value()), Some(10));
/// ```
pub fn find_lca<'a, T>(root: Option<&'a Node<T>>, a: &T, b: &T) -> Option<&'a Node<T>>
where
    T: Ord,
{
    let mut current = root;
    while let Some(node) = current {
        let value = node.value();
        current = if a < value && b < value {
            node.left()
        } else if a > value && b > value {
            node.right()
        } else {
            return Some(node);
        };
    }

    None
}

/// Finds the first node on the search path from `root` that holds `value`.
///
/// Equal values are inserted to the right so any duplicates of the returned node live in its
/// right subtree.
pub fn find<'a, T>(root: Option<&'a Node<T>>, value: &T) -> Option<&'a Node<T>>
where
    T: Ord,
{
    let mut current = root;
    while let Some(node) = current {
        current = match value.cmp(node.value()) {
            Ordering::Less => node.left(),
            Ordering::Equal => return Some(node),
            Ordering::Greater => node.right(),
        };
    }

    None
}
