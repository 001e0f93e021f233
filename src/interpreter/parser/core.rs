use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_logical_or},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting the parser accepts.
///
/// Bounds both the parser's recursion (parentheses, prefix operators, `**`)
/// and the depth of the trees it builds, so that neither parsing nor
/// evaluation can exhaust the stack.
pub const MAX_NESTING: usize = 200;

/// Fails with `NestingTooDeep` once `depth` exceeds [`MAX_NESTING`].
pub(crate) const fn check_nesting(depth: usize) -> ParseResult<()> {
    if depth > MAX_NESTING {
        Err(ParseError::NestingTooDeep { limit: MAX_NESTING })
    } else {
        Ok(())
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy. `depth` is the current
/// nesting level; top-level expressions start at `0`.
///
/// Grammar: `expression := logical_or`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_logical_or(tokens, depth)
}

/// Parses a complete token stream into a single expression.
///
/// Unlike [`parse_expression`], every token must be consumed: leftovers such
/// as the `2` in `1 2` are reported as trailing tokens.
///
/// # Errors
/// - `EmptyExpression` if there are no tokens.
/// - `UnexpectedTrailingTokens` if the expression ends early.
/// - `NestingTooDeep` if the expression nests deeper than [`MAX_NESTING`].
/// - Any error raised while parsing the expression itself.
///
/// # Example
/// ```
/// use flo::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::Token, parser::core::parse_tokens},
/// };
///
/// let tokens = [Token::Integer(1), Token::Plus, Token::Integer(2)];
/// let expr = parse_tokens(&tokens).unwrap();
///
/// assert!(matches!(expr, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
/// ```
pub fn parse_tokens(tokens: &[Token]) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    match iter.next() {
        Some(token) => Err(ParseError::UnexpectedTrailingTokens { token: token.to_string() }),
        None => Ok(expr),
    }
}

#[cfg(test)]
mod tests {
    use logos::Logos;

    use super::*;
    use crate::ast::{BinaryOperator, UnaryOperator};

    fn parse(source: &str) -> ParseResult<Expr> {
        let tokens: Vec<Token> = Token::lexer(source).map(|t| t.expect("lexing failed"))
                                                     .collect();
        parse_tokens(&tokens)
    }

    fn int(n: i64) -> Expr {
        Expr::Literal { value: n.into() }
    }

    fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
        Expr::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(parse("2 + 3 * 4").unwrap(),
                   binary(int(2), BinaryOperator::Add, binary(int(3), BinaryOperator::Mul, int(4))));
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_eq!(parse("8 - 3 - 1").unwrap(),
                   binary(binary(int(8), BinaryOperator::Sub, int(3)), BinaryOperator::Sub, int(1)));
    }

    #[test]
    fn power_is_right_associative_and_beats_negation() {
        assert_eq!(parse("2 ** 3 ** 2").unwrap(),
                   binary(int(2), BinaryOperator::Pow, binary(int(3), BinaryOperator::Pow, int(2))));
        assert_eq!(parse("-2 ** 2").unwrap(),
                   Expr::UnaryOp { op:   UnaryOperator::Negate,
                                   expr: Box::new(binary(int(2), BinaryOperator::Pow, int(2))), });
    }

    #[test]
    fn comparisons_form_a_chain() {
        assert_eq!(parse("1 < 2 <= 3").unwrap(),
                   Expr::Comparison { first: Box::new(int(1)),
                                      rest:  vec![(BinaryOperator::Less, int(2)),
                                                  (BinaryOperator::LessEqual, int(3))], });
    }

    #[test]
    fn not_binds_looser_than_comparison() {
        assert_eq!(parse("not 1 == 2").unwrap(),
                   Expr::UnaryOp { op:   UnaryOperator::Not,
                                   expr: Box::new(Expr::Comparison {
                                       first: Box::new(int(1)),
                                       rest:  vec![(BinaryOperator::Equal, int(2))],
                                   }), });
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(parse("(2 + 3) * 4").unwrap(),
                   binary(binary(int(2), BinaryOperator::Add, int(3)), BinaryOperator::Mul, int(4)));
    }

    #[test]
    fn malformed_expressions_are_rejected() {
        assert_eq!(parse(""), Err(ParseError::EmptyExpression));
        assert_eq!(parse("(1 + 2"), Err(ParseError::ExpectedClosingParen));
        assert_eq!(parse("1 +"), Err(ParseError::UnexpectedEndOfInput));
        assert_eq!(parse("1 2"),
                   Err(ParseError::UnexpectedTrailingTokens { token: "2".to_string() }));
        assert_eq!(parse("* 2"), Err(ParseError::UnexpectedToken { token: "*".to_string() }));
    }

    #[test]
    fn moderate_nesting_is_accepted() {
        let source = format!("{}1{}", "(".repeat(50), ")".repeat(50));
        assert_eq!(parse(&source).unwrap(), int(1));
        assert!(parse(&format!("{}1", "-".repeat(50))).is_ok());
    }

    #[test]
    fn deep_nesting_is_rejected() {
        let too_deep: ParseResult<Expr> = Err(ParseError::NestingTooDeep { limit: MAX_NESTING });

        assert_eq!(parse(&format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000))), too_deep);
        assert_eq!(parse(&format!("{}1", "- ".repeat(10_000))), too_deep);
        assert_eq!(parse(&format!("{}1", "not ".repeat(10_000))), too_deep);
        assert_eq!(parse(&format!("2{}", " ** 2".repeat(10_000))), too_deep);
    }

    #[test]
    fn long_operator_chains_are_bounded() {
        assert_eq!(parse(&format!("1{}", " + 1".repeat(10_000))),
                   Err(ParseError::NestingTooDeep { limit: MAX_NESTING }));
        assert_eq!(parse(&format!("1{}", " * 1".repeat(100))).unwrap().depth(), 101);
    }
}
