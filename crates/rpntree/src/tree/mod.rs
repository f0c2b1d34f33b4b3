//! Binary expression trees built from postfix tokens
//!
//! ```
//! use rpntree::ExpressionTree;
//!
//! let tree = ExpressionTree::from_postfix(&["3", "4", "+", "2", "*"]).unwrap();
//! assert_eq!(tree.prefix(), vec!["*", "+", "3", "4", "2"]);
//! assert_eq!(tree.infix(), vec!["(", "(", "3", "+", "4", ")", "*", "2", ")"]);
//! assert_eq!(tree.postfix(), vec!["3", "4", "+", "2", "*"]);
//! ```

mod build;
mod diagram;
mod node;
mod traversal;

pub use build::construct_tree;
pub use node::TreeNode;
pub use traversal::{
    infix_print, postfix_print, prefix_print, traverse, TraversalOrder, CLOSE_PAREN, OPEN_PAREN,
};

use crate::error::TreeError;

/// An owned, possibly empty, expression tree.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExpressionTree {
    root: Option<TreeNode>,
}

impl ExpressionTree {
    /// Build from postfix tokens. See [`construct_tree`].
    pub fn from_postfix<S: AsRef<str>>(tokens: &[S]) -> Result<Self, TreeError> {
        construct_tree(tokens).map(|root| Self { root })
    }

    /// Root node, absent for an empty tree.
    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_ref()
    }

    /// Take ownership of the root node.
    pub fn into_root(self) -> Option<TreeNode> {
        self.root
    }

    /// True when built from an empty token sequence.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Render in the given order.
    pub fn traverse(&self, order: TraversalOrder) -> Vec<&str> {
        traverse(self.root(), order)
    }

    /// Prefix rendering.
    pub fn prefix(&self) -> Vec<&str> {
        prefix_print(self.root())
    }

    /// Fully parenthesized infix rendering.
    pub fn infix(&self) -> Vec<&str> {
        infix_print(self.root())
    }

    /// Postfix rendering.
    pub fn postfix(&self) -> Vec<&str> {
        postfix_print(self.root())
    }
}

impl From<TreeNode> for ExpressionTree {
    fn from(root: TreeNode) -> Self {
        Self { root: Some(root) }
    }
}
