//! Evaluation context configuration

/// Configuration for postfix evaluation.
///
/// Passed to [`Evaluator`](crate::Evaluator) and consulted once per call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvalContext {
    /// Upper bound on the number of tokens in one expression
    pub max_tokens: Option<usize>,

    /// Whether to emit a trace event per token (for debugging)
    pub trace: bool,
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context that rejects expressions longer than `limit` tokens.
    pub fn with_max_tokens(limit: usize) -> Self {
        Self {
            max_tokens: Some(limit),
            ..Default::default()
        }
    }

    /// Enable per-token tracing.
    pub fn traced(mut self) -> Self {
        self.trace = true;
        self
    }
}
