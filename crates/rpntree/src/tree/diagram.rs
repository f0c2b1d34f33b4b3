//! Console diagram of an expression tree

use termtree::Tree;

use super::TreeNode;

impl TreeNode {
    /// Convert into a `termtree::Tree` for drawing. Left child is listed first.
    pub fn diagram(&self) -> Tree<String> {
        let leaves: Vec<_> = [self.left(), self.right()]
            .into_iter()
            .flatten()
            .map(TreeNode::diagram)
            .collect();

        Tree::new(self.value().to_string()).with_leaves(leaves)
    }
}
