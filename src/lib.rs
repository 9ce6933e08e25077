//! An unbalanced Binary Search Tree (BST) with rotations, a rebalancing sweep, and ancestor
//! queries, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure built out of `Node`s. Each `Node` stores a value
//! and up to two child `Node`s. In this crate the value is also the key used for ordering, and
//! the invariant every insertion maintains is:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value strictly less than its
//!    own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value greater than or equal
//!    to its own value. Duplicates are therefore allowed and end up to the right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Visiting the left subtree, then the subtree root, then the right subtree yields the values
//! in sorted order. Searching takes `O(depth)` where `depth` is the longest path from the root
//! to a leaf. Inserting values in sorted order makes that path as long as the tree itself, which
//! is what [rotations][rotate] are for: they shift a child up into its parent's place without
//! disturbing the sorted order.
//!
//! ## Layout
//!
//! - [`BinarySearchTree`] owns the root and offers the whole API as methods.
//! - The [`traverse`], [`metrics`], [`rotate`] and [`lca`] modules hold the same operations as
//!   free functions over any subtree root, so they can be applied below the root too.
//!
//! Nothing here logs unless the application installs a [`tracing`] subscriber.
//!
//! # Examples
//!
//! ```
//! use search_tree::BinarySearchTree;
//!
//! let tree: BinarySearchTree<_> = [10, 2, 45, 12, 6, 4, 5, 1, 3, 25, 55]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(tree.find_lca(&1, &55).map(|n| *n.value()), Some(10));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod lca;
pub mod metrics;
mod node;
pub mod rotate;
pub mod traverse;
mod tree;
mod util;

pub use error::RotationError;
pub use node::{Link, Node};
pub use tree::BinarySearchTree;
pub use util::Direction;
