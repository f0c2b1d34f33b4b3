//! Expression tree node
//!
//! Leaves hold operand tokens, internal nodes hold operator tokens and
//! always own exactly two children. Nodes are only created by
//! [`construct_tree`](super::construct_tree), which keeps that invariant,
//! and are never mutated afterwards.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::traversal::{traverse, TraversalOrder};

/// One node of a binary expression tree.
///
/// Drop, equality, hashing, [`depth`](Self::depth) and
/// [`node_count`](Self::node_count) use explicit work stacks, so arbitrarily
/// deep trees are safe. `Debug`, `Serialize` and [`diagram`](Self::diagram)
/// still recurse per level.
#[derive(Debug, Eq, Serialize)]
pub struct TreeNode {
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    left: Option<Box<TreeNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// A leaf holding an operand token.
    pub(crate) fn leaf(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            left: None,
            right: None,
        }
    }

    /// An internal node combining two existing subtrees under an operator.
    pub(crate) fn branch(value: impl Into<String>, left: TreeNode, right: TreeNode) -> Self {
        Self {
            value: value.into(),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// The token this node holds.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Left child, absent for leaves.
    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    /// Right child, absent for leaves.
    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }

    /// True when the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of levels on the longest root-to-leaf path. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(node.left().map(|child| (child, level + 1)));
            pending.extend(node.right().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Total number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.left());
            pending.extend(node.right());
        }
        count
    }
}

impl Drop for TreeNode {
    fn drop(&mut self) {
        // Detach children so each box is freed with no subtree below it.
        let mut pending: Vec<Box<TreeNode>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.value != b.value {
                return false;
            }
            match ((a.left(), a.right()), (b.left(), b.right())) {
                ((None, None), (None, None)) => {}
                ((Some(al), Some(ar)), (Some(bl), Some(br))) => {
                    pending.push((al, bl));
                    pending.push((ar, br));
                }
                _ => return false,
            }
        }
        true
    }
}

/// Hashes the prefix rendering, which determines the tree uniquely.
impl Hash for TreeNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for token in traverse(Some(self), TraversalOrder::Prefix) {
            token.hash(state);
        }
    }
}

/// Fully parenthesized infix form, tokens separated by single spaces.
impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens = traverse(Some(self), TraversalOrder::Infix);
        f.write_str(&tokens.join(" "))
    }
}
