use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include syntax mistakes, unexpected tokens and
/// invalid literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression, such as unknown variables, type mismatches, division by zero
/// or integer overflow.
pub mod runtime_error;
/// Expression errors.
///
/// Ties a parse or runtime failure to the expression text and source line it
/// came from. This is the error that aborts a script run.
pub mod expression_error;

pub use expression_error::{EvalError, ExpressionError};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error that aborts a script run.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// An expression failed to evaluate.
    #[error(transparent)]
    Expression(#[from] ExpressionError),
    /// Writing program output failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
