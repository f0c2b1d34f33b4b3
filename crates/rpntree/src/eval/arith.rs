//! Checked integer arithmetic for the four operators

use crate::error::EvalError;
use crate::operator::Operator;

/// Apply `left OP right`.
///
/// Division truncates toward zero, so `-7 / 2` is `-3`. A zero divisor is
/// reported as [`EvalError::DivisionByZero`] before any overflow check.
pub fn apply(op: Operator, left: i64, right: i64, position: usize) -> Result<i64, EvalError> {
    let result = match op {
        Operator::Add => left.checked_add(right),
        Operator::Sub => left.checked_sub(right),
        Operator::Mul => left.checked_mul(right),
        Operator::Div => {
            if right == 0 {
                return Err(EvalError::DivisionByZero { position });
            }
            left.checked_div(right)
        }
    };

    result.ok_or(EvalError::IntegerOverflow {
        operator: op,
        position,
    })
}
