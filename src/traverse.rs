//! Depth-first traversals of a subtree.
//!
//! The recursive walks ([`inorder`], [`preorder`], [`postorder`]) collect references to the
//! values they visit. [`preorder_iterative`] produces the same sequence as [`preorder`] using an
//! explicit stack, and the [`Preorder`] and [`Inorder`] iterators do the same lazily so long,
//! skewed trees can be walked without recursing once per level.
//!
//! # Examples
//!
//! ```
//! use search_tree::{traverse, BinarySearchTree};
//!
//! let tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
//!
//! assert_eq!(traverse::inorder(tree.root()), vec![&1, &2, &3]);
//! assert_eq!(traverse::preorder(tree.root()), vec![&2, &1, &3]);
//! assert_eq!(traverse::postorder(tree.root()), vec![&1, &3, &2]);
//! assert_eq!(traverse::preorder_iterative(tree.root()), vec![&2, &1, &3]);
//! ```

use crate::node::Node;

/// Left subtree, then the node, then the right subtree. Sorted when the ordering invariant
/// holds.
pub fn inorder<T>(root: Option<&Node<T>>) -> Vec<&T> {
    let mut out = Vec::new();
    inorder_into(root, &mut out);
    out
}

/// The node, then its left subtree, then its right subtree.
pub fn preorder<T>(root: Option<&Node<T>>) -> Vec<&T> {
    let mut out = Vec::new();
    preorder_into(root, &mut out);
    out
}

/// Left subtree, then right subtree, then the node.
pub fn postorder<T>(root: Option<&Node<T>>) -> Vec<&T> {
    let mut out = Vec::new();
    postorder_into(root, &mut out);
    out
}

/// Same order as [`preorder`] but driven by an explicit stack instead of recursion.
pub fn preorder_iterative<T>(root: Option<&Node<T>>) -> Vec<&T> {
    Preorder::new(root).collect()
}

fn inorder_into<'a, T>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
    if let Some(n) = node {
        inorder_into(n.left(), out);
        out.push(n.value());
        inorder_into(n.right(), out);
    }
}

fn preorder_into<'a, T>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
    if let Some(n) = node {
        out.push(n.value());
        preorder_into(n.left(), out);
        preorder_into(n.right(), out);
    }
}

fn postorder_into<'a, T>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
    if let Some(n) = node {
        postorder_into(n.left(), out);
        postorder_into(n.right(), out);
        out.push(n.value());
    }
}

/// Lazy pre-order walk over a subtree.
///
/// Pops a node, yields its value, then pushes the right child followed by the left child so
/// the left subtree is popped first.
#[derive(Clone, Debug)]
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Preorder<'a, T> {
    /// Starts a walk at `root`. An empty root yields nothing.
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.value())
    }
}

/// Lazy in-order walk over a subtree. Backs [`BinarySearchTree::iter`][crate::BinarySearchTree::iter].
#[derive(Clone, Debug)]
pub struct Inorder<'a, T> {
    // Nodes whose left subtree is being (or has been) visited but who haven't been yielded.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Inorder<'a, T> {
    /// Starts a walk at `root`. An empty root yields nothing.
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}
