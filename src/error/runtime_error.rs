use thiserror::Error;

/// Represents all errors that can occur while evaluating an expression.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    /// An identifier was still unbound after variable substitution.
    #[error("Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// An operator was applied to values of incompatible types.
    #[error("Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
    },
    /// Attempted division or modulo by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// Integer arithmetic overflowed.
    #[error("Integer overflow while trying to compute result.")]
    Overflow,
}
