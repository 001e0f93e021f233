use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators are routed to `eval_scalar_op`, comparisons to
    /// `eval_comparison`. `and` and `or` are handled here eagerly for callers
    /// that already hold both operands; expression evaluation short-circuits
    /// them before reaching this point.
    ///
    /// # Example
    /// ```
    /// use flo::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Integer(4));
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, FloorDiv, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Pow, Sub,
        };

        match op {
            Add | Sub | Mul | Div | FloorDiv | Mod | Pow => Self::eval_scalar_op(op, left, right),

            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Ok(Value::Bool(Self::eval_comparison(op, left, right)?))
            },

            And => Ok(if left.is_truthy() { right.clone() } else { left.clone() }),
            Or => Ok(if left.is_truthy() { left.clone() } else { right.clone() }),
        }
    }
}
