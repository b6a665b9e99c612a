/// An owning child slot. `None` is an absent child.
pub(crate) type Link = Option<Box<Node>>;

/// A single key in a tree along with the two subtrees it owns. The value is
/// never changed after the node is created. Removal moves whole nodes around
/// instead.
// TODO stack based Clone. The derived one recurses once per level.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) value: i64,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    pub(crate) fn new(value: i64) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

impl Drop for Node {
    // The default drop glue recurses into `left` and `right` which blows the stack on long
    // chains. Instead, detach every descendant onto a work list so each `Node` is dropped
    // childless.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = self.left.take().into_iter().collect();
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Counts the nodes on the longest path down from `root` without recursing.
pub(crate) fn height(root: &Link) -> usize {
    let mut deepest = 0;
    let mut pending: Vec<(&Node, usize)> = root.as_deref().map(|n| (n, 1)).into_iter().collect();

    while let Some((node, depth)) = pending.pop() {
        deepest = deepest.max(depth);
        pending.extend(node.left.as_deref().map(|n| (n, depth + 1)));
        pending.extend(node.right.as_deref().map(|n| (n, depth + 1)));
    }

    deepest
}

/// Panics unless every left descendant of a node is smaller than it and every right descendant
/// is greater or equal. Each pending node carries the half-open range `[low, high)` its
/// ancestors allow.
pub(crate) fn assert_ordered(root: &Link) {
    let mut pending: Vec<(&Node, Option<i64>, Option<i64>)> =
        root.as_deref().map(|n| (n, None, None)).into_iter().collect();

    while let Some((node, low, high)) = pending.pop() {
        if let Some(low) = low {
            assert!(node.value >= low, "{} must be at least {}", node.value, low);
        }
        if let Some(high) = high {
            assert!(node.value < high, "{} must be below {}", node.value, high);
        }
        pending.extend(node.left.as_deref().map(|n| (n, low, Some(node.value))));
        pending.extend(node.right.as_deref().map(|n| (n, Some(node.value), high)));
    }
}
