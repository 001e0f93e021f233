use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    error::{ExpressionError, RuntimeError},
    interpreter::{
        environment::Environment, lexer::tokenize, parser::core::parse_tokens,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates expression text against a variable environment.
///
/// ## Usage
///
/// An `Evaluator` borrows the environment for as long as it is used and never
/// mutates it; statement handlers create one per expression they evaluate.
/// Evaluation happens in three steps: the text is tokenized, bound variables
/// are substituted as literal tokens, and the resulting token stream is
/// parsed and evaluated.
pub struct Evaluator<'env> {
    /// The variables visible to the expression.
    pub environment: &'env Environment,
}

impl<'env> Evaluator<'env> {
    /// Creates an evaluator over `environment`.
    #[must_use]
    pub const fn new(environment: &'env Environment) -> Self {
        Self { environment }
    }

    /// Evaluates raw expression text.
    ///
    /// # Parameters
    /// - `expression`: The expression exactly as written in the source line.
    /// - `line`: The 1-based source line, for error reporting.
    ///
    /// # Errors
    /// Returns an [`ExpressionError`] holding the original text when lexing,
    /// parsing or evaluation fails, including when a name is still unbound
    /// after substitution.
    ///
    /// # Example
    /// ```
    /// use flo::interpreter::{
    ///     environment::Environment, evaluator::core::Evaluator, value::core::Value,
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.set("x", Value::Integer(4));
    ///
    /// let value = Evaluator::new(&env).evaluate("x * 2 + 1", 1).unwrap();
    /// assert_eq!(value, Value::Integer(9));
    ///
    /// let err = Evaluator::new(&env).evaluate("y + 1", 3).unwrap_err();
    /// assert_eq!(err.expression, "y + 1");
    /// assert_eq!(err.line, 3);
    /// ```
    pub fn evaluate(&self, expression: &str, line: usize) -> Result<Value, ExpressionError> {
        let tokens = tokenize(expression).map_err(|e| ExpressionError::new(expression, line, e))?;
        let tokens = self.substitute(tokens);
        let expr = parse_tokens(&tokens).map_err(|e| ExpressionError::new(expression, line, e))?;
        let value = Self::eval(&expr).map_err(|e| ExpressionError::new(expression, line, e))?;

        trace!(line, expression, %value, "evaluated expression");
        Ok(value)
    }

    /// Evaluates a parsed expression and returns the resulting value.
    ///
    /// The evaluator dispatches based on expression variant. `and` and `or`
    /// are evaluated lazily: the right operand is only evaluated when the
    /// left one does not decide the result.
    ///
    /// # Errors
    /// - `UnknownVariable` for any `Variable` node, since every bound name
    ///   was already substituted.
    /// - Any error raised by an operator.
    pub fn eval(expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(value.clone()),
            Expr::Variable { name } => Err(RuntimeError::UnknownVariable { name: name.clone() }),
            Expr::UnaryOp { op, expr } => {
                let value = Self::eval(expr)?;
                Self::eval_unary(*op, &value)
            },
            Expr::BinaryOp { left,
                             op: BinaryOperator::And,
                             right, } => {
                let left = Self::eval(left)?;
                if left.is_truthy() { Self::eval(right) } else { Ok(left) }
            },
            Expr::BinaryOp { left,
                             op: BinaryOperator::Or,
                             right, } => {
                let left = Self::eval(left)?;
                if left.is_truthy() { Ok(left) } else { Self::eval(right) }
            },
            Expr::BinaryOp { left, op, right } => {
                let left = Self::eval(left)?;
                let right = Self::eval(right)?;
                Self::eval_binary(*op, &left, &right)
            },
            Expr::Comparison { first, rest } => Self::eval_comparison_chain(first, rest),
        }
    }

    /// Evaluates a comparison chain such as `a < b <= c`.
    ///
    /// Operands are evaluated left to right, each at most once. The first
    /// failing comparison stops the chain and yields `False`.
    fn eval_comparison_chain(first: &Expr, rest: &[(BinaryOperator, Expr)]) -> EvalResult<Value> {
        let mut left = Self::eval(first)?;
        for (op, right) in rest {
            let right = Self::eval(right)?;
            if !Self::eval_comparison(*op, &left, &right)? {
                return Ok(Value::Bool(false));
            }
            left = right;
        }
        Ok(Value::Bool(true))
    }
}
