/// Binary operator dispatch.
///
/// Routes each operator to the arithmetic or comparison implementation.
pub mod core;

/// Arithmetic on numbers and strings.
///
/// Implements `+ - * / // % **` including string concatenation and
/// repetition, numeric promotion and overflow checks.
pub mod scalar;

/// Equality and ordering.
///
/// Compares numbers with numbers and strings with strings; mixed kinds are
/// unequal and cannot be ordered.
pub mod comparison;
