//! The four binary arithmetic operators shared by both components

use std::fmt;
use std::str::FromStr;

use crate::error::OperatorParseError;

/// A binary arithmetic operator token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Every operator, in symbol order `+ - * /`.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// Classify a token. Anything other than an exact operator symbol is an operand.
    pub fn from_token(token: &str) -> Option<Operator> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    /// The token text for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }
}

/// True when `token` is one of `+ - * /`.
pub fn is_operator(token: &str) -> bool {
    Operator::from_token(token).is_some()
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = OperatorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::from_token(s).ok_or_else(|| OperatorParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_token(op.symbol()), Some(op));
            assert_eq!(op.to_string(), op.symbol());
        }
    }

    #[test]
    fn test_operands_are_not_operators() {
        for token in ["3", "-3", "x", "++", " +", "", "%", "^"] {
            assert!(!is_operator(token), "{:?} classified as operator", token);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!("*".parse::<Operator>(), Ok(Operator::Mul));
        assert_eq!(
            "mod".parse::<Operator>(),
            Err(OperatorParseError("mod".to_string()))
        );
    }
}
