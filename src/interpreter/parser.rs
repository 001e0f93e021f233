/// Parser entry points.
///
/// Defines the result type and the functions that turn a token stream into
/// one complete expression.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence levels for logical, comparison, additive and
/// multiplicative operators.
pub mod binary;

/// Unary and primary parsing.
///
/// Handles prefix signs, exponentiation, literals, identifiers and
/// parenthesized groups.
pub mod unary;
