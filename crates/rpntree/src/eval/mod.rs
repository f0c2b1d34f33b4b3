//! Stack-based postfix evaluation
//!
//! Expressions are whitespace-separated tokens, each either a base-10 `i64`
//! literal or one of `+ - * /`. Checks happen in this order as tokens are
//! consumed:
//!
//! 1. empty or blank input
//! 2. an operand that does not parse
//! 3. an operator with fewer than two values available
//! 4. division by zero, then overflow
//! 5. more than one value left at the end

pub mod arith;

use tracing::{debug, trace};

use crate::context::EvalContext;
use crate::error::EvalError;
use crate::operator::Operator;

/// An explicit-stack postfix machine.
///
/// The stack is cleared at the start of every [`evaluate`](Self::evaluate)
/// call, so one instance can be reused across expressions.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    stack: Vec<i64>,
    ctx: EvalContext,
}

impl Evaluator {
    /// Create an evaluator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator with the given context.
    pub fn with_context(ctx: EvalContext) -> Self {
        Self {
            stack: Vec::new(),
            ctx,
        }
    }

    /// The context this evaluator was created with.
    pub fn context(&self) -> &EvalContext {
        &self.ctx
    }

    /// Evaluate one postfix expression.
    pub fn evaluate(&mut self, expression: &str) -> Result<i64, EvalError> {
        self.stack.clear();

        let tokens: Vec<&str> = expression.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(EvalError::EmptyExpression);
        }

        if let Some(limit) = self.ctx.max_tokens {
            if tokens.len() > limit {
                return Err(EvalError::TooManyTokens {
                    count: tokens.len(),
                    limit,
                });
            }
        }

        for (position, token) in tokens.iter().copied().enumerate() {
            match Operator::from_token(token) {
                Some(op) => self.apply(op, position)?,
                None => self.push_operand(token, position)?,
            }

            if self.ctx.trace {
                trace!(position, token, stack = ?self.stack, "postfix step");
            }
        }

        let remaining = self.stack.len();
        match self.stack.pop() {
            Some(value) if remaining == 1 => {
                debug!(expression, value, "evaluated postfix expression");
                Ok(value)
            }
            _ => Err(EvalError::TooManyOperands { remaining }),
        }
    }

    fn push_operand(&mut self, token: &str, position: usize) -> Result<(), EvalError> {
        let value = token.parse::<i64>().map_err(|_| EvalError::InvalidToken {
            token: token.to_string(),
            position,
        })?;
        self.stack.push(value);
        Ok(())
    }

    fn apply(&mut self, op: Operator, position: usize) -> Result<(), EvalError> {
        // First pop is the right-hand operand.
        let (Some(right), Some(left)) = (self.stack.pop(), self.stack.pop()) else {
            return Err(EvalError::InsufficientOperands {
                operator: op,
                position,
            });
        };

        let result = arith::apply(op, left, right, position)?;
        self.stack.push(result);
        Ok(())
    }
}

/// Evaluate a postfix expression with a fresh [`Evaluator`].
///
/// ```
/// use rpntree::{evaluate_postfix, EvalError};
///
/// assert_eq!(evaluate_postfix("5 1 2 + 4 * + 3 -"), Ok(14));
/// assert!(matches!(evaluate_postfix("4 0 /"), Err(EvalError::DivisionByZero { .. })));
/// ```
pub fn evaluate_postfix(expression: &str) -> Result<i64, EvalError> {
    Evaluator::new().evaluate(expression)
}
