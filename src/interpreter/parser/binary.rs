use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, check_nesting},
            unary::parse_unary,
        },
    },
};

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (arithmetic, comparison or logical). Returns `None` for all other tokens.
///
/// # Example
/// ```
/// use flo::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::SlashSlash => Some(BinaryOperator::FloorDiv),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::StarStar => Some(BinaryOperator::Pow),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Determines whether a binary operator is a comparison.
///
/// # Example
/// ```
/// use flo::{ast::BinaryOperator, interpreter::parser::binary::is_relational_op};
///
/// assert!(is_relational_op(BinaryOperator::Less));
/// assert!(is_relational_op(BinaryOperator::NotEqual));
/// assert!(!is_relational_op(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual
             | BinaryOperator::Equal
             | BinaryOperator::NotEqual)
}

/// Parses one left-associative precedence level.
///
/// Repeatedly applies `next` for operands while the upcoming token maps to
/// an operator accepted by `accepts`. Each operator deepens the left spine
/// of the tree, so the tree depth is checked after every step.
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           depth: usize,
                           accepts: fn(BinaryOperator) -> bool,
                           next: fn(&mut Peekable<I>, usize) -> ParseResult<Expr>)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = next(tokens, depth)?;
    let mut height = left.depth();
    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && accepts(op)
    {
        tokens.next();
        let right = next(tokens, depth)?;
        height = 1 + height.max(right.depth());
        check_nesting(height)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right) };
    }
    Ok(left)
}

/// Parses logical OR expressions.
///
/// Grammar: `or := and ("or" and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_assoc(tokens,
                     depth,
                     |op| matches!(op, BinaryOperator::Or),
                     parse_logical_and)
}

/// Parses logical AND expressions.
///
/// Grammar: `and := not ("and" not)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_assoc(tokens,
                     depth,
                     |op| matches!(op, BinaryOperator::And),
                     parse_logical_not)
}

/// Parses prefix `not`.
///
/// `not` sits below the comparisons, so `not a == b` negates the whole
/// comparison.
///
/// Grammar: `not := "not" not | comparison`
pub fn parse_logical_not<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(Token::Not) = tokens.peek() {
        tokens.next();
        check_nesting(depth + 1)?;
        let expr = parse_logical_not(tokens, depth + 1)?;
        return Ok(Expr::UnaryOp { op:   UnaryOperator::Not,
                                  expr: Box::new(expr), });
    }
    parse_comparison(tokens, depth)
}

/// Parses relational and equality operators.
///
/// Comparisons chain: `a < b < c` becomes one [`Expr::Comparison`] holding
/// every operand, rather than comparing the boolean `a < b` with `c`.
///
/// Grammar: `comparison := additive (relational_op additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let first = parse_additive(tokens, depth)?;
    let mut rest = Vec::new();

    while let Some(token) = tokens.peek() {
        let op = match token_to_binary_operator(token) {
            Some(op) if is_relational_op(op) => op,
            _ => break,
        };
        tokens.next(); // consume operator
        rest.push((op, parse_additive(tokens, depth)?));
    }

    if rest.is_empty() {
        Ok(first)
    } else {
        Ok(Expr::Comparison { first: Box::new(first),
                              rest })
    }
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_assoc(tokens,
                     depth,
                     |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub),
                     parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "//" | "%") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_assoc(tokens,
                     depth,
                     |op| {
                         matches!(op,
                                  BinaryOperator::Mul
                                  | BinaryOperator::Div
                                  | BinaryOperator::FloorDiv
                                  | BinaryOperator::Mod)
                     },
                     parse_unary)
}
