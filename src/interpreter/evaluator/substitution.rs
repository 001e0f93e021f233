use tracing::trace;

use crate::interpreter::{evaluator::core::Evaluator, lexer::Token, value::core::Value};

/// Converts a value into the literal token that denotes it.
#[must_use]
pub fn value_to_token(value: &Value) -> Token {
    match value {
        Value::Integer(n) => Token::Integer(*n),
        Value::Real(r) => Token::Real(*r),
        Value::Str(s) => Token::Str(s.clone()),
        Value::Bool(b) => Token::Bool(*b),
    }
}

impl Evaluator<'_> {
    /// Replaces every identifier token bound in the environment with a
    /// literal token carrying the variable's current value.
    ///
    /// Substitution works on whole identifier tokens: with `a` bound, the
    /// identifier `ab` is left untouched. Unbound identifiers are kept and
    /// reported by the evaluator.
    ///
    /// # Example
    /// ```
    /// use flo::interpreter::{
    ///     environment::Environment, evaluator::core::Evaluator, lexer::{Token, tokenize},
    ///     value::core::Value,
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.set("a", Value::Integer(1));
    ///
    /// let tokens = Evaluator::new(&env).substitute(tokenize("a + ab").unwrap());
    /// assert_eq!(tokens,
    ///            vec![Token::Integer(1), Token::Plus, Token::Identifier("ab".to_string())]);
    /// ```
    #[must_use]
    pub fn substitute(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
              .map(|token| match token {
                  Token::Identifier(name) => match self.environment.get(&name) {
                      Some(value) => {
                          trace!(%name, %value, "substituted variable");
                          value_to_token(value)
                      },
                      None => Token::Identifier(name),
                  },
                  other => other,
              })
              .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{environment::Environment, lexer::tokenize};

    #[test]
    fn every_value_kind_becomes_a_literal() {
        let mut env = Environment::new();
        env.set("i", Value::Integer(-3));
        env.set("r", Value::Real(0.5));
        env.set("s", Value::from("hi"));
        env.set("b", Value::Bool(true));

        let tokens = Evaluator::new(&env).substitute(tokenize("i r s b").unwrap());
        assert_eq!(tokens,
                   vec![Token::Integer(-3),
                        Token::Real(0.5),
                        Token::Str("hi".to_string()),
                        Token::Bool(true)]);
    }

    #[test]
    fn substrings_of_identifiers_are_not_replaced() {
        let mut env = Environment::new();
        env.set("x", Value::Integer(7));

        let tokens = Evaluator::new(&env).substitute(tokenize("xx + x_1 + x").unwrap());
        assert_eq!(tokens,
                   vec![Token::Identifier("xx".to_string()),
                        Token::Plus,
                        Token::Identifier("x_1".to_string()),
                        Token::Plus,
                        Token::Integer(7)]);
    }

    #[test]
    fn string_contents_are_not_replaced() {
        let mut env = Environment::new();
        env.set("name", Value::from("flo"));

        let tokens = Evaluator::new(&env).substitute(tokenize("'name: ' + name").unwrap());
        assert_eq!(tokens,
                   vec![Token::Str("name: ".to_string()),
                        Token::Plus,
                        Token::Str("flo".to_string())]);
    }
}
