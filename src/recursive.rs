//! An unbalanced BST whose operations recurse down the tree. Every mutating step takes a subtree
//! by value and hands back the (possibly new) subtree root, which the caller stores back into
//! its own child slot.
//!
//! Recursion goes as deep as the tree is tall. Keys added in sorted order make the tree a chain
//! so prefer [`iterative::Tree`][crate::iterative::Tree] for large, possibly sorted inputs.
//!
//! # Examples
//!
//! ```
//! use bst_set::{recursive::Tree, OrderedSet};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(1));
//!
//! tree.add(1);
//! assert!(tree.contains(1));
//!
//! // Adding the same key again adds a second node.
//! tree.add(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Removing takes out one node at a time.
//! assert!(tree.remove(1));
//! assert!(tree.contains(1));
//! assert!(tree.remove(1));
//! assert!(!tree.contains(1));
//! assert!(!tree.remove(1));
//! ```

use std::cmp::Ordering;

use tracing::trace;

use crate::node::{self, Link, Node};
use crate::OrderedSet;

/// A Binary Search Tree of `i64` keys. Keys equal to a node's key go into its right subtree.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    root: Link,
    len: usize,
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The key stored at the root, if the tree has any nodes.
    pub fn root(&self) -> Option<i64> {
        self.root.as_ref().map(|n| n.value)
    }

    /// Drops every node in the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// In tests, after a mutation, assert that the BST invariant still holds everywhere.
    fn check(&self) {
        if cfg!(test) {
            node::assert_ordered(&self.root);
        }
    }
}

impl OrderedSet for Tree {
    /// Adds `value` to the tree. This always succeeds.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::{recursive::Tree, OrderedSet};
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.add(3));
    /// assert!(tree.add(3));
    /// assert_eq!(tree.len(), 2);
    /// ```
    fn add(&mut self, value: i64) -> bool {
        self.root = Some(insert(self.root.take(), value));
        self.len += 1;
        self.check();
        true
    }

    fn contains(&self, value: i64) -> bool {
        find(&self.root, value)
    }

    /// Removes one node holding `value` from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::{recursive::Tree, OrderedSet};
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    ///
    /// assert!(tree.remove(1));
    /// assert!(!tree.contains(1));
    /// assert!(!tree.remove(1));
    /// ```
    fn remove(&mut self, value: i64) -> bool {
        let removed = match remove(self.root.take(), value) {
            Removal::NotFound(tree) => {
                self.root = tree;
                false
            }
            Removal::Removed(Detached { node, rest }) => {
                debug_assert_eq!(node.value, value);
                self.root = rest;
                self.len -= 1;
                true
            }
        };
        self.check();
        removed
    }

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> usize {
        height(&self.root)
    }
}

/// A node cut out of a subtree along with what is left of that subtree.
struct Detached {
    node: Box<Node>,
    rest: Link,
}

/// The outcome of removing a key from a subtree.
enum Removal {
    /// No node had the key. This holds the subtree exactly as it was handed in.
    NotFound(Link),
    /// A node with the key was cut out.
    Removed(Detached),
}

fn insert(tree: Link, value: i64) -> Box<Node> {
    match tree {
        None => {
            trace!(value, "inserting into empty slot");
            Node::new(value)
        }
        Some(mut n) => {
            if value < n.value {
                n.left = Some(insert(n.left.take(), value));
            } else {
                n.right = Some(insert(n.right.take(), value));
            }
            n
        }
    }
}

fn find(tree: &Link, value: i64) -> bool {
    match tree {
        None => false,
        Some(n) => match value.cmp(&n.value) {
            Ordering::Less => find(&n.left, value),
            Ordering::Equal => true,
            Ordering::Greater => find(&n.right, value),
        },
    }
}

fn remove(tree: Link, value: i64) -> Removal {
    let Some(mut n) = tree else {
        return Removal::NotFound(None);
    };

    match value.cmp(&n.value) {
        Ordering::Less => match remove(n.left.take(), value) {
            Removal::NotFound(left) => {
                n.left = left;
                Removal::NotFound(Some(n))
            }
            Removal::Removed(Detached { node, rest }) => {
                n.left = rest;
                Removal::Removed(Detached {
                    node,
                    rest: Some(n),
                })
            }
        },
        Ordering::Greater => match remove(n.right.take(), value) {
            Removal::NotFound(right) => {
                n.right = right;
                Removal::NotFound(Some(n))
            }
            Removal::Removed(Detached { node, rest }) => {
                n.right = rest;
                Removal::Removed(Detached {
                    node,
                    rest: Some(n),
                })
            }
        },
        Ordering::Equal => {
            let rest = match (n.left.take(), n.right.take()) {
                (None, None) => {
                    trace!(value, "removing leaf");
                    None
                }
                (Some(child), None) | (None, Some(child)) => {
                    trace!(value, child = child.value, "removing node with one child");
                    Some(child)
                }
                // If we have two children we have to figure out which node to promote. We
                // choose this node's predecessor, the largest node in its left subtree.
                (Some(left), Some(right)) => {
                    let Detached {
                        node: mut predecessor,
                        rest,
                    } = remove_largest(left);
                    trace!(value, predecessor = predecessor.value, "promoting predecessor");
                    predecessor.left = rest;
                    predecessor.right = Some(append_rightmost(predecessor.right.take(), right));
                    Some(predecessor)
                }
            };
            Removal::Removed(Detached { node: n, rest })
        }
    }
}

/// Cuts the largest node out of a non-empty subtree. That node's left subtree takes its place.
///
/// When the largest key is held by several nodes, they form a run down the right spine and the
/// topmost of them is the one cut out. It keeps the rest of the run as its right subtree, so
/// nothing left behind is equal to it.
fn remove_largest(n: Box<Node>) -> Detached {
    let mut largest = &n;
    while let Some(right) = &largest.right {
        largest = right;
    }
    let largest = largest.value;

    detach_first(n, largest)
}

fn detach_first(mut n: Box<Node>, largest: i64) -> Detached {
    match n.right.take() {
        Some(right) if n.value < largest => {
            let Detached { node, rest } = detach_first(right, largest);
            n.right = rest;
            Detached {
                node,
                rest: Some(n),
            }
        }
        right => {
            n.right = right;
            let rest = n.left.take();
            Detached { node: n, rest }
        }
    }
}

/// Hangs `tail` off the rightmost node of `tree`. Every key in `tail` must be at least as large
/// as every key in `tree`.
fn append_rightmost(tree: Link, tail: Box<Node>) -> Box<Node> {
    match tree {
        None => tail,
        Some(mut n) => {
            n.right = Some(append_rightmost(n.right.take(), tail));
            n
        }
    }
}

fn height(tree: &Link) -> usize {
    match tree {
        None => 0,
        Some(n) => height(&n.left).max(height(&n.right)) + 1,
    }
}
