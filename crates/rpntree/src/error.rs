//! Error types for tree construction and postfix evaluation

use thiserror::Error;

use crate::operator::Operator;

/// Errors raised while building an expression tree from postfix tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The token sequence does not describe exactly one expression.
    ///
    /// Covers both an operator arriving without two operands and operands
    /// left over once every token has been consumed.
    #[error("malformed expression: {0}")]
    MalformedExpression(String),
}

impl TreeError {
    pub(crate) fn insufficient_operands(operator: &str) -> Self {
        Self::MalformedExpression(format!(
            "insufficient operands for operator '{}'",
            operator
        ))
    }

    pub(crate) fn unresolved(count: usize) -> Self {
        Self::MalformedExpression(format!("{} operand(s) left unresolved", count))
    }
}

/// Errors raised while evaluating a postfix expression.
///
/// Positions are zero-based indices into the whitespace-split token stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Input was empty or contained only whitespace
    #[error("empty expression")]
    EmptyExpression,

    /// A non-operator token is not a base-10 integer
    #[error("invalid token '{token}' at position {position}")]
    InvalidToken {
        /// The offending token, verbatim
        token: String,
        /// Token index
        position: usize,
    },

    /// An operator found fewer than two values on the stack
    #[error("insufficient operands for operator '{operator}' at position {position}")]
    InsufficientOperands {
        /// The operator that could not be applied
        operator: Operator,
        /// Token index
        position: usize,
    },

    /// Division with a zero right-hand operand
    #[error("division by zero at position {position}")]
    DivisionByZero {
        /// Token index of the `/`
        position: usize,
    },

    /// More than one value remained after the last token
    #[error("too many operands: {remaining} values left on the stack")]
    TooManyOperands {
        /// Stack depth after the last token
        remaining: usize,
    },

    /// The result of an operation does not fit in an `i64`
    #[error("integer overflow applying '{operator}' at position {position}")]
    IntegerOverflow {
        /// The operator whose result overflowed
        operator: Operator,
        /// Token index
        position: usize,
    },

    /// The expression has more tokens than the context allows
    #[error("expression has {count} tokens, limit is {limit}")]
    TooManyTokens {
        /// Number of tokens in the expression
        count: usize,
        /// Configured limit
        limit: usize,
    },
}

impl EvalError {
    /// True for [`EvalError::DivisionByZero`].
    ///
    /// Callers that treat division by zero as a distinct outcome (for
    /// example a `DIVZERO` sentinel) branch on this.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, EvalError::DivisionByZero { .. })
    }
}

/// A string that is not one of `+ - * /`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operator '{0}'")]
pub struct OperatorParseError(pub String);

/// Umbrella error for callers that drive both components
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RpnError {
    /// Tree construction failed
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// Evaluation failed
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// Operator parsing failed
    #[error(transparent)]
    Operator(#[from] OperatorParseError),
}

/// Result type alias for rpntree operations
pub type Result<T> = std::result::Result<T, RpnError>;
