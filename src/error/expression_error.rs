use thiserror::Error;

use crate::error::{ParseError, RuntimeError};

/// The underlying reason an expression could not be evaluated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// The expression could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression parsed but failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// A failed evaluation of one expression of the script.
///
/// Carries the expression text exactly as written in the source line, before
/// any variable substitution, so the message points at what the user wrote.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Error on line {line}: Error evaluating expression `{expression}`. {cause}")]
pub struct ExpressionError {
    /// The original expression text.
    pub expression: String,
    /// The 1-based source line of the expression.
    pub line:       usize,
    /// What went wrong. Included in the message, not reported as a source.
    pub cause:      EvalError,
}

impl ExpressionError {
    /// Wraps `cause` with the expression text and line it belongs to.
    pub fn new(expression: &str, line: usize, cause: impl Into<EvalError>) -> Self {
        Self { expression: expression.to_string(),
               line,
               cause: cause.into() }
    }
}
