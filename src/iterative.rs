//! An unbalanced BST whose operations walk the tree with loops instead of recursion. It behaves
//! exactly like [`recursive::Tree`][crate::recursive::Tree], node for node, but stack usage
//! doesn't grow with the height of the tree. That makes it safe for degenerate trees built from
//! sorted input.
//!
//! # Examples
//!
//! ```
//! use bst_set::{iterative::Tree, OrderedSet};
//!
//! let mut tree = Tree::new();
//!
//! // Sorted input gives a chain as tall as the tree is large.
//! for x in 0..10_000 {
//!     tree.add(x);
//! }
//! assert_eq!(tree.height(), 10_000);
//!
//! assert!(tree.contains(9_999));
//! assert!(tree.remove(9_999));
//! assert!(!tree.contains(9_999));
//! ```

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

    fn check(&self) {
        if cfg!(test) {
            node::assert_ordered(&self.root);
        }
    }
}

impl OrderedSet for Tree {
    fn add(&mut self, value: i64) -> bool {
        let mut slot = &mut self.root;
        while let Some(n) = slot {
            slot = if value < n.value {
                &mut n.left
            } else {
                &mut n.right
            };
        }
        trace!(value, "inserting into empty slot");
        *slot = Some(Node::new(value));

        self.len += 1;
        self.check();
        true
    }

    fn contains(&self, value: i64) -> bool {
        let mut current = self.root.as_deref();
        while let Some(n) = current {
            if value == n.value {
                return true;
            }
            current = if value < n.value {
                n.left.as_deref()
            } else {
                n.right.as_deref()
            };
        }
        false
    }

    fn remove(&mut self, value: i64) -> bool {
        // Find the slot holding the first node with `value`. Nothing is moved until we know it
        // exists.
        let mut slot = &mut self.root;
        while slot.as_deref().is_some_and(|n| n.value != value) {
            let Some(n) = slot else { break };
            slot = if value < n.value {
                &mut n.left
            } else {
                &mut n.right
            };
        }
        let Some(mut removed) = slot.take() else {
            return false;
        };

        *slot = match removed.right.take() {
            None => {
                trace!(value, "removing node without a right child");
                removed.left.take()
            }
            Some(right) => match take_largest(&mut removed.left) {
                None => {
                    trace!(value, "removing node without a left child");
                    Some(right)
                }
                // Two children. Promote this node's predecessor, the largest node in its left
                // subtree.
                Some(mut predecessor) => {
                    trace!(value, predecessor = predecessor.value, "promoting predecessor");
                    predecessor.left = removed.left.take();

                    let mut tail = &mut predecessor.right;
                    while let Some(n) = tail {
                        tail = &mut n.right;
                    }
                    *tail = Some(right);

                    Some(predecessor)
                }
            },
        };

        self.len -= 1;
        self.check();
        true
    }

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> usize {
        node::height(&self.root)
    }
}

/// Cuts the largest node out of the subtree in `slot`, putting that node's left subtree in its
/// place. Returns `None` if `slot` is empty.
///
/// When several nodes hold the largest key, the topmost is taken and keeps the others as its
/// right subtree.
fn take_largest(slot: &mut Link) -> Option<Box<Node>> {
    let mut rightmost = slot.as_deref()?;
    while let Some(right) = rightmost.right.as_deref() {
        rightmost = right;
    }
    let largest = rightmost.value;

    let mut slot = slot;
    while slot.as_deref().is_some_and(|n| n.value < largest) {
        let Some(n) = slot else { break };
        slot = &mut n.right;
    }

    let mut node = slot.take()?;
    *slot = node.left.take();
    Some(node)
}
