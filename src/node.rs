//! The building block of a [`BinarySearchTree`][crate::BinarySearchTree].
//!
//! A [`Node`] owns its value and, exclusively, both of its children. There are no parent
//! pointers: restructuring a tree means moving boxed children from one node to another.
//!
//! `Clone`, `PartialEq` and `Drop` walk the subtree with an explicit stack, so they are safe on
//! long, list-shaped trees. `Debug` only shows a node's value and its children's values.

use std::fmt;

/// An owned, possibly empty, child position. Both the tree root and each child of a [`Node`]
/// are a `Link`.
pub type Link<T> = Option<Box<Node<T>>>;

/// A single value in a tree along with the two subtrees hanging off of it.
///
/// `Node` performs no validation of its own. Its setters can happily break the ordering
/// invariant. Keeping it is up to whoever holds the node.
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a leaf node.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Creates a boxed leaf node, ready to be stored in a [`Link`].
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replaces the value stored in this node, returning the old one.
    pub fn set_value(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// The left child slot. Rotations and the rebalance pass rewire through this.
    pub fn left_mut(&mut self) -> &mut Link<T> {
        &mut self.left
    }

    /// The right child slot.
    pub fn right_mut(&mut self) -> &mut Link<T> {
        &mut self.right
    }

    /// Attaches `left` as the left subtree and returns whatever was there before.
    pub fn set_left(&mut self, left: Link<T>) -> Link<T> {
        std::mem::replace(&mut self.left, left)
    }

    /// Attaches `right` as the right subtree and returns whatever was there before.
    pub fn set_right(&mut self, right: Link<T>) -> Link<T> {
        std::mem::replace(&mut self.right, right)
    }

    /// Detaches and returns the left subtree.
    pub fn take_left(&mut self) -> Link<T> {
        self.left.take()
    }

    /// Detaches and returns the right subtree.
    pub fn take_right(&mut self) -> Link<T> {
        self.right.take()
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T> Clone for Node<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        // Collect the descendants so that walking the list backwards visits every child before
        // its parent, then build the copies bottom-up on a second stack.
        let mut order = Vec::new();
        let mut pending: Vec<&Node<T>> = Vec::new();
        pending.extend(self.left());
        pending.extend(self.right());
        while let Some(node) = pending.pop() {
            order.push(node);
            pending.extend(node.left());
            pending.extend(node.right());
        }

        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for node in order.into_iter().rev() {
            let copy = node.copy_with_children(&mut built);
            built.push(Box::new(copy));
        }

        self.copy_with_children(&mut built)
    }
}

impl<T> Node<T>
where
    T: Clone,
{
    /// Copies this node's value and adopts its already copied children from the top of `built`.
    /// The right child's copy sits above the left child's.
    fn copy_with_children(&self, built: &mut Vec<Box<Node<T>>>) -> Self {
        let right = self.right.as_ref().and_then(|_| built.pop());
        let left = self.left.as_ref().and_then(|_| built.pop());
        Self {
            value: self.value.clone(),
            left,
            right,
        }
    }
}

impl<T> PartialEq for Node<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some((a, b)) = pairs.pop() {
            if a.value != b.value {
                return false;
            }
            for children in [(a.left(), b.left()), (a.right(), b.right())] {
                match children {
                    (None, None) => {}
                    (Some(x), Some(y)) => pairs.push((x, y)),
                    _ => return false,
                }
            }
        }

        true
    }
}

impl<T> Eq for Node<T> where T: Eq {}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

impl<T> Drop for Node<T> {
    // The derived drop recurses once per level which overflows the stack on long, list-shaped
    // trees (e.g. ascending inserts). Unhook the descendants and drop them one at a time.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
