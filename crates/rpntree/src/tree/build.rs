//! Tree construction from postfix tokens

use tracing::debug;

use super::TreeNode;
use crate::error::TreeError;
use crate::operator::is_operator;

/// Build an expression tree from a postfix token sequence.
///
/// Operand tokens are stored verbatim. For each operator the two most
/// recently built subtrees are combined: the first one popped becomes the
/// right child, the second the left child.
///
/// Returns `Ok(None)` for an empty sequence. Fails with
/// [`TreeError::MalformedExpression`] when an operator lacks two operands or
/// when anything other than a single tree remains at the end.
pub fn construct_tree<S: AsRef<str>>(tokens: &[S]) -> Result<Option<TreeNode>, TreeError> {
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut stack: Vec<TreeNode> = Vec::with_capacity(tokens.len() / 2 + 1);

    for token in tokens {
        let token = token.as_ref();

        if !is_operator(token) {
            stack.push(TreeNode::leaf(token));
            continue;
        }

        // Pop order matters: right first.
        let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
            return Err(TreeError::insufficient_operands(token));
        };
        stack.push(TreeNode::branch(token, left, right));
    }

    match (stack.pop(), stack.len()) {
        (Some(root), 0) => {
            debug!(tokens = tokens.len(), depth = root.depth(), "constructed expression tree");
            Ok(Some(root))
        }
        (root, rest) => Err(TreeError::unresolved(rest + usize::from(root.is_some()))),
    }
}
