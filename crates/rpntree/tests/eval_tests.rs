use pretty_assertions::assert_eq;
use rpntree::*;

// Mirrors the fixture convention: DIVZERO marks an expected division by zero
fn eval_or_sentinel(expr: &str) -> String {
    match evaluate_postfix(expr) {
        Ok(value) => value.to_string(),
        Err(e) if e.is_division_by_zero() => "DIVZERO".to_string(),
        Err(e) => format!("error: {}", e),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Successful Evaluation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_simple_addition() {
    assert_eq!(evaluate_postfix("3 4 +"), Ok(7));
}

#[test]
fn test_eval_nested() {
    assert_eq!(evaluate_postfix("5 1 2 + 4 * + 3 -"), Ok(14));
    assert_eq!(evaluate_postfix("2 3 4 * +"), Ok(14));
    assert_eq!(evaluate_postfix("2 3 + 4 *"), Ok(20));
}

#[test]
fn test_eval_single_value() {
    assert_eq!(evaluate_postfix("42"), Ok(42));
    assert_eq!(evaluate_postfix("-5"), Ok(-5));
}

#[test]
fn test_eval_operand_order() {
    assert_eq!(evaluate_postfix("3 4 -"), Ok(-1));
    assert_eq!(evaluate_postfix("8 2 /"), Ok(4));
    assert_eq!(evaluate_postfix("2 8 /"), Ok(0));
}

#[test]
fn test_eval_negative_literals() {
    assert_eq!(evaluate_postfix("-3 -4 -"), Ok(1));
    assert_eq!(evaluate_postfix("-3 -4 *"), Ok(12));
}

#[test]
fn test_eval_irregular_whitespace() {
    assert_eq!(evaluate_postfix("  3   4  + "), Ok(7));
    assert_eq!(evaluate_postfix("10\t2 /"), Ok(5));
}

#[test]
fn test_eval_truncating_division() {
    assert_eq!(evaluate_postfix("-7 2 /"), Ok(-3));
    assert_eq!(evaluate_postfix("7 -2 /"), Ok(-3));
    assert_eq!(evaluate_postfix("-7 -2 /"), Ok(3));
    assert_eq!(evaluate_postfix("7 2 /"), Ok(3));
}

// ═══════════════════════════════════════════════════════════════════════
// Error Kinds
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_empty() {
    assert_eq!(evaluate_postfix(""), Err(EvalError::EmptyExpression));
    assert_eq!(evaluate_postfix("   "), Err(EvalError::EmptyExpression));
}

#[test]
fn test_eval_division_by_zero() {
    assert_eq!(
        evaluate_postfix("4 0 /"),
        Err(EvalError::DivisionByZero { position: 2 })
    );
    assert_eq!(
        evaluate_postfix("1 1 1 - /"),
        Err(EvalError::DivisionByZero { position: 4 })
    );
}

#[test]
fn test_eval_invalid_token() {
    assert_eq!(
        evaluate_postfix("2 foo +"),
        Err(EvalError::InvalidToken {
            token: "foo".to_string(),
            position: 1
        })
    );
    assert!(matches!(
        evaluate_postfix("2 3.5 +"),
        Err(EvalError::InvalidToken { .. })
    ));
    assert!(matches!(
        evaluate_postfix("2 3 %"),
        Err(EvalError::InvalidToken { .. })
    ));
}

#[test]
fn test_eval_literal_out_of_range() {
    assert!(matches!(
        evaluate_postfix("9223372036854775808 1 +"),
        Err(EvalError::InvalidToken { position: 0, .. })
    ));
}

#[test]
fn test_eval_insufficient_operands() {
    assert_eq!(
        evaluate_postfix("+"),
        Err(EvalError::InsufficientOperands {
            operator: Operator::Add,
            position: 0
        })
    );
    assert!(matches!(
        evaluate_postfix("1 -"),
        Err(EvalError::InsufficientOperands { .. })
    ));
}

#[test]
fn test_eval_too_many_operands() {
    assert_eq!(
        evaluate_postfix("1 2"),
        Err(EvalError::TooManyOperands { remaining: 2 })
    );
    assert_eq!(
        evaluate_postfix("1 2 3 +"),
        Err(EvalError::TooManyOperands { remaining: 2 })
    );
}

#[test]
fn test_eval_overflow() {
    assert_eq!(
        evaluate_postfix("9223372036854775807 1 +"),
        Err(EvalError::IntegerOverflow {
            operator: Operator::Add,
            position: 2
        })
    );
    assert!(matches!(
        evaluate_postfix("-9223372036854775808 -1 /"),
        Err(EvalError::IntegerOverflow { .. })
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// Error Ordering
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_first_failure_wins() {
    // division by zero is hit before the bad token
    assert!(evaluate_postfix("1 0 / x").unwrap_err().is_division_by_zero());
    // bad token is hit before the operator runs short
    assert!(matches!(
        evaluate_postfix("x +"),
        Err(EvalError::InvalidToken { .. })
    ));
    // operator runs short before leftovers are counted
    assert!(matches!(
        evaluate_postfix("1 + 2 3"),
        Err(EvalError::InsufficientOperands { .. })
    ));
}

#[test]
fn test_eval_sentinel_convention() {
    let cases = [
        ("3 4 +", "7"),
        ("5 1 2 + 4 * + 3 -", "14"),
        ("4 0 /", "DIVZERO"),
        ("-7 2 /", "-3"),
        ("1 2", "error: too many operands: 2 values left on the stack"),
    ];
    for (expr, expected) in cases {
        assert_eq!(eval_or_sentinel(expr), expected, "expression {:?}", expr);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Evaluator Reuse and Context
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_evaluator_reuse_after_failure() {
    let mut evaluator = Evaluator::new();
    assert!(evaluator.evaluate("4 0 /").is_err());
    assert!(evaluator.evaluate("1 2 3").is_err());
    assert_eq!(evaluator.evaluate("6 7 *"), Ok(42));
}

#[test]
fn test_evaluator_token_limit() {
    let mut evaluator = Evaluator::with_context(EvalContext::with_max_tokens(5));
    assert_eq!(evaluator.evaluate("1 2 + 3 *"), Ok(9));
    assert_eq!(
        evaluator.evaluate("1 2 + 3 * 4 -"),
        Err(EvalError::TooManyTokens { count: 7, limit: 5 })
    );
}

#[test]
fn test_parallel_evaluation() {
    let expressions = ["3 4 +", "5 1 2 + 4 * + 3 -", "4 0 /", "-7 2 /"];

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = expressions
            .iter()
            .map(|expr| scope.spawn(move || eval_or_sentinel(expr)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, vec!["7", "14", "DIVZERO", "-3"]);
}
