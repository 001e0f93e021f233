/// Core evaluation logic.
///
/// Defines the `Evaluator`, the result type, and the pipeline that turns
/// expression text into a value: tokenize, substitute, parse, evaluate.
pub mod core;

/// Variable substitution.
///
/// Replaces identifier tokens bound in the environment with literal tokens
/// holding their current values.
pub mod substitution;

/// Unary operator evaluation.
///
/// Handles numeric negation and identity and logical `not`.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements arithmetic and comparison operators for all value kinds.
pub mod binary;
