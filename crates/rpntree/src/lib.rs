//! # rpntree
//!
//! Binary expression trees from postfix (reverse Polish) tokens, and a
//! stack-based postfix evaluator.
//!
//! The two halves are independent:
//!
//! - **Expression trees** keep operand tokens as opaque strings. A tree is
//!   built once from postfix tokens and rendered in prefix, fully
//!   parenthesized infix, or postfix order.
//! - **Evaluation** works on `i64` values. It consumes a whitespace-separated
//!   postfix string and returns an integer, or a typed error where division
//!   by zero is its own kind.
//!
//! ```
//! use rpntree::{construct_tree, evaluate_postfix, infix_print};
//!
//! let root = construct_tree(&["3", "4", "-"]).unwrap();
//! assert_eq!(infix_print(root.as_ref()), vec!["(", "3", "-", "4", ")"]);
//!
//! assert_eq!(evaluate_postfix("3 4 -"), Ok(-1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod eval;
pub mod operator;
pub mod tree;

// Re-export main types
pub use context::EvalContext;
pub use error::{EvalError, OperatorParseError, Result, RpnError, TreeError};
pub use eval::{evaluate_postfix, Evaluator};
pub use operator::{is_operator, Operator};
pub use tree::{
    construct_tree, infix_print, postfix_print, prefix_print, traverse, ExpressionTree,
    TraversalOrder, TreeNode,
};

/// rpntree version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
