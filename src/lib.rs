//! This crate exposes an ordered set of integer keys backed by an
//! unbalanced Binary Search Tree (BST), in two flavors that behave
//! identically: a [`recursive`] one and an [`iterative`] one.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. Here a `Node` stores a single
//! integer key and owns up to two child `Node`s. The invariants kept by
//! every tree in this crate are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a
//!    value greater than _or equal to_ its own value.
//!
//! The second rule is "right-biased": adding a key that is already present
//! adds another node on the right, so the set really behaves like a multiset.
//! Removing a key removes exactly one of its nodes.
//!
//! Nothing here rebalances. Searching costs `O(height)` and inserting keys in
//! sorted order produces a chain whose height equals the number of keys. The
//! [`iterative`] tree never recurses so it is the one to reach for when such
//! chains may get very long.
//!
//! # Examples
//!
//! ```
//! use bst_set::{recursive::Tree, OrderedSet};
//!
//! let mut tree = Tree::new();
//! for x in [5, 3, 8, 1, 4, 7, 9] {
//!     assert!(tree.add(x));
//! }
//!
//! assert!(tree.contains(4));
//! assert!(!tree.contains(6));
//!
//! // 5 has two children so its in-order predecessor takes its place.
//! assert!(tree.remove(5));
//! assert_eq!(tree.root(), Some(4));
//! assert!(!tree.remove(5));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod command;
pub mod iterative;
mod node;
pub mod recursive;


/// The operations shared by every tree variant in this crate.
pub trait OrderedSet {
    /// Adds `value` to the set. Duplicates are accepted as new nodes so this
    /// always returns `true`.
    fn add(&mut self, value: i64) -> bool;

    /// Returns whether at least one node holds `value`.
    fn contains(&self, value: i64) -> bool;

    /// Removes one node holding `value`. Returns `false`, leaving the tree
    /// untouched, when there is no such node.
    fn remove(&mut self, value: i64) -> bool;

    /// The number of nodes in the tree, counting duplicates.
    fn len(&self) -> usize;

    /// Whether the tree has no nodes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of nodes on the longest path from the root to a leaf.
    fn height(&self) -> usize;
}
