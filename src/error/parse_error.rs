use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing of an
/// expression.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The lexer found text that does not form any token.
    #[error("Invalid token: {token}.")]
    InvalidToken {
        /// The offending slice of source text.
        token: String,
    },
    /// Found an unexpected token while parsing.
    #[error("Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// Reached the end of the expression unexpectedly.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    #[error("Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen,
    /// Found extra tokens after the expression should have ended.
    #[error("Extra tokens after expression. Check your input: {token}")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
    },
    /// The expression text contained no tokens at all.
    #[error("Expression is empty.")]
    EmptyExpression,
    /// Parentheses, prefix operators or operator chains nest deeper than
    /// the parser allows.
    #[error("Expression is nested too deeply (more than {limit} levels).")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
    },
}
