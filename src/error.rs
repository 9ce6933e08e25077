use std::fmt;

use crate::node::Node;
use crate::util::Direction;

/// Returned when a rotation is asked to lift a child that isn't there.
///
/// The rejected node is handed back untouched so the caller can put it back where it came
/// from instead of losing the subtree.
///
/// # Examples
///
/// ```
/// use search_tree::{rotate::rotate_right, BinarySearchTree, Direction};
///
/// let mut tree = BinarySearchTree::new();
/// tree.insert(2);
/// tree.insert(1);
///
/// let root = tree.take_root().unwrap();
/// let err = rotate_right(root).unwrap_err();
/// assert_eq!(err.direction(), Direction::Right);
///
/// tree.set_root(Some(err.into_node()));
/// assert_eq!(tree.inorder(), vec![&1, &2]);
/// ```
#[derive(thiserror::Error)]
#[error("{direction} requires a {} child to lift but the node has none", .direction.pivot())]
pub struct RotationError<T> {
    direction: Direction,
    node: Box<Node<T>>,
}

impl<T> RotationError<T> {
    pub(crate) fn new(direction: Direction, node: Box<Node<T>>) -> Self {
        Self { direction, node }
    }

    /// The rotation that was attempted.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The node that couldn't be rotated.
    pub fn node(&self) -> &Node<T> {
        &self.node
    }

    /// Gives back ownership of the node that couldn't be rotated.
    pub fn into_node(self) -> Box<Node<T>> {
        self.node
    }
}

/// Manual implementation of `Debug` so errors can be reported (and `unwrap_err`ed) for values
/// that aren't `Debug` themselves.
impl<T> fmt::Debug for RotationError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotationError")
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}
