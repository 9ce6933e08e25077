//! Single rotations and the rebalancing sweep built on top of them.
//!
//! Rotations consume the node at the top of the subtree and return the node that replaces it.
//! Whoever owned the old node (a parent's child slot or the tree's root) has to store the
//! returned node in its place.
//!
//! # Examples
//!
//! ```
//! use search_tree::{rotate, traverse, BinarySearchTree};
//!
//! let mut tree: BinarySearchTree<_> = [1, 2, 3].into_iter().collect();
//!
//! // Lift 2 over 1.
//! let root = tree.take_root().unwrap();
//! let root = rotate::rotate_right(root).unwrap();
//! tree.set_root(Some(root));
//!
//! assert_eq!(traverse::preorder(tree.root()), vec![&2, &1, &3]);
//! ```

use tracing::{debug, trace};

use crate::error::RotationError;
use crate::metrics::balance_factor;
use crate::node::{Link, Node};
use crate::util::Direction;

/// Lifts the right child of `node` into its place.
///
/// `node` becomes the left child of its old right child, and adopts that child's old left
/// subtree as its new right subtree. The in-order sequence of the subtree is unchanged.
///
/// # Errors
///
/// Returns a [`RotationError`] holding `node` if it has no right child.
pub fn rotate_right<T>(mut node: Box<Node<T>>) -> Result<Box<Node<T>>, RotationError<T>> {
    let Some(mut new_root) = node.take_right() else {
        debug!("rotate_right rejected: no right child");
        return Err(RotationError::new(Direction::Right, node));
    };

    node.set_right(new_root.take_left());
    new_root.set_left(Some(node));
    Ok(new_root)
}

/// Lifts the left child of `node` into its place.
///
/// `node` becomes the right child of its old left child, and adopts that child's old right
/// subtree as its new left subtree. The in-order sequence of the subtree is unchanged.
///
/// # Errors
///
/// Returns a [`RotationError`] holding `node` if it has no left child.
pub fn rotate_left<T>(mut node: Box<Node<T>>) -> Result<Box<Node<T>>, RotationError<T>> {
    let Some(mut new_root) = node.take_left() else {
        debug!("rotate_left rejected: no left child");
        return Err(RotationError::new(Direction::Left, node));
    };

    node.set_left(new_root.take_right());
    new_root.set_right(Some(node));
    Ok(new_root)
}

/// Rotates `node` in the given direction. See [`rotate_left`] and [`rotate_right`].
pub fn rotate<T>(
    node: Box<Node<T>>,
    direction: Direction,
) -> Result<Box<Node<T>>, RotationError<T>> {
    match direction {
        Direction::Left => rotate_left(node),
        Direction::Right => rotate_right(node),
    }
}

/// Makes a single top-down pass over the subtree in `slot`, rotating every unbalanced node
/// once, and returns how many rotations were made.
///
/// A right-heavy node (positive [`balance_factor`]) gets [`rotate_right`], a left-heavy node
/// gets [`rotate_left`]. The rotated subtree is stored back in `slot` and the pass continues
/// into the new children without re-checking the new root. This is a heuristic: it does not
/// promise any bound on the resulting depth.
///
/// # Examples
///
/// ```
/// use search_tree::{metrics::depth, rotate::balance, BinarySearchTree};
///
/// let mut tree: BinarySearchTree<_> = (1..=7).collect();
/// assert_eq!(depth(tree.root()), 7);
///
/// let rotations = balance(tree.root_mut());
/// assert_eq!(rotations, 3);
/// assert_eq!(depth(tree.root()), 4);
/// ```
pub fn balance<T>(slot: &mut Link<T>) -> usize {
    let Some(node) = slot.take() else {
        return 0;
    };

    let factor = balance_factor(Some(&*node)).unwrap_or(0);
    let direction = match factor {
        f if f > 0 => Some(Direction::Right),
        f if f < 0 => Some(Direction::Left),
        _ => None,
    };

    let (node, rotations) = match direction {
        Some(direction) => {
            trace!(balance_factor = factor, %direction, "rebalancing node");
            // A non-zero balance factor means the heavier side has a child, so this can't be
            // rejected. Fall back to the untouched node all the same.
            (
                rotate(node, direction).unwrap_or_else(RotationError::into_node),
                1,
            )
        }
        None => (node, 0),
    };

    let node = slot.insert(node);
    rotations + balance(node.left_mut()) + balance(node.right_mut())
}
