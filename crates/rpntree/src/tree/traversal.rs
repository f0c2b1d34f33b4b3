//! Prefix, infix and postfix renderings
//!
//! All three orders run through one engine. The order only decides
//! where a node's own token lands relative to its children's tokens:
//!
//! ```text
//! prefix:  value left right
//! infix:   ( left value right )
//! postfix: left right value
//! ```
//!
//! Under infix a leaf is emitted bare; only operator subtrees are wrapped.
//!
//! The engine keeps its pending work on a heap stack rather than the call
//! stack, so tree depth is bounded only by memory.

use std::fmt;

use serde::Serialize;

use super::TreeNode;

/// Infix opening parenthesis token
pub const OPEN_PAREN: &str = "(";
/// Infix closing parenthesis token
pub const CLOSE_PAREN: &str = ")";

/// Which rendering to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    /// Operator before its operands
    Prefix,
    /// Operator between its operands, fully parenthesized
    Infix,
    /// Operator after its operands
    Postfix,
}

impl TraversalOrder {
    /// Every order, in prefix/infix/postfix sequence.
    pub const ALL: [TraversalOrder; 3] = [
        TraversalOrder::Prefix,
        TraversalOrder::Infix,
        TraversalOrder::Postfix,
    ];

    /// Lowercase name of the order.
    pub fn name(self) -> &'static str {
        match self {
            TraversalOrder::Prefix => "prefix",
            TraversalOrder::Infix => "infix",
            TraversalOrder::Postfix => "postfix",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render a tree (or no tree) as a token sequence in the given order.
///
/// An absent root yields an empty sequence. The returned tokens borrow from
/// the tree, except the infix parentheses which are static.
pub fn traverse(root: Option<&TreeNode>, order: TraversalOrder) -> Vec<&str> {
    let mut out = Vec::with_capacity(root.map_or(0, TreeNode::node_count));
    let mut pending: Vec<Step<'_>> = root.map(Step::Visit).into_iter().collect();

    while let Some(step) = pending.pop() {
        let node = match step {
            Step::Emit(token) => {
                out.push(token);
                continue;
            }
            Step::Visit(node) => node,
        };

        if order == TraversalOrder::Infix && node.is_leaf() {
            out.push(node.value());
            continue;
        }

        // Steps are popped last-in first-out, so each arm lists its output
        // back to front.
        let left = node.left().map(Step::Visit);
        let right = node.right().map(Step::Visit);
        let value = Some(Step::Emit(node.value()));
        match order {
            TraversalOrder::Prefix => pending.extend([right, left, value].into_iter().flatten()),
            TraversalOrder::Infix => pending.extend(
                [
                    Some(Step::Emit(CLOSE_PAREN)),
                    right,
                    value,
                    left,
                    Some(Step::Emit(OPEN_PAREN)),
                ]
                .into_iter()
                .flatten(),
            ),
            TraversalOrder::Postfix => pending.extend([value, right, left].into_iter().flatten()),
        }
    }
    out
}

/// Pending work for [`traverse`].
enum Step<'a> {
    /// Expand a subtree according to the order
    Visit(&'a TreeNode),
    /// Append a token as is
    Emit(&'a str),
}

/// Prefix (Polish) rendering.
pub fn prefix_print(root: Option<&TreeNode>) -> Vec<&str> {
    traverse(root, TraversalOrder::Prefix)
}

/// Fully parenthesized infix rendering.
pub fn infix_print(root: Option<&TreeNode>) -> Vec<&str> {
    traverse(root, TraversalOrder::Infix)
}

/// Postfix (reverse Polish) rendering.
pub fn postfix_print(root: Option<&TreeNode>) -> Vec<&str> {
    traverse(root, TraversalOrder::Postfix)
}
