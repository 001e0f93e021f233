use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, check_nesting, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `-` and `+`. Unary operators are
/// right-associative, so `--x` parses as `-(-x)`. They bind looser than
/// `**`, so `-2 ** 2` is `-(2 ** 2)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | power
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let op = match tokens.peek() {
        Some(Token::Minus) => UnaryOperator::Negate,
        Some(Token::Plus) => UnaryOperator::Plus,
        _ => return parse_power(tokens, depth),
    };
    tokens.next();
    check_nesting(depth + 1)?;
    let expr = parse_unary(tokens, depth + 1)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr) })
}

/// Parses exponentiation.
///
/// The exponent is itself a unary expression, which makes `**`
/// right-associative (`2 ** 3 ** 2` is `2 ** 9`) and allows `2 ** -1`.
///
/// Grammar: `power := primary ("**" unary)?`
fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let base = parse_primary(tokens, depth)?;
    if let Some(Token::StarStar) = tokens.peek() {
        tokens.next();
        check_nesting(depth + 1)?;
        let exponent = parse_unary(tokens, depth + 1)?;
        return Ok(Expr::BinaryOp { left:  Box::new(base),
                                   op:    BinaryOperator::Pow,
                                   right: Box::new(exponent), });
    }
    Ok(base)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := literal
///              | identifier
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedEndOfInput` if the stream is exhausted.
/// - `UnexpectedToken` for any token that cannot start an operand.
/// - `NestingTooDeep` for parentheses nested deeper than the limit.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next().ok_or(ParseError::UnexpectedEndOfInput)? {
        Token::Integer(n) => Ok(Expr::Literal { value: (*n).into() }),
        Token::Real(r) => Ok(Expr::Literal { value: (*r).into() }),
        Token::Bool(b) => Ok(Expr::Literal { value: (*b).into() }),
        Token::Str(s) => Ok(Expr::Literal { value: s.as_str().into() }),
        Token::Identifier(name) => Ok(Expr::Variable { name: name.clone() }),
        Token::LParen => parse_grouping(tokens, depth + 1),
        tok => Err(ParseError::UnexpectedToken { token: tok.to_string() }),
    }
}

/// Parses the rest of a parenthesized expression after its `(`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    check_nesting(depth)?;
    let expr = parse_expression(tokens, depth)?;
    match tokens.next() {
        Some(Token::RParen) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen),
    }
}
