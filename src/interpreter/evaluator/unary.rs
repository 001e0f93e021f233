use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation. Booleans negate as integers.
    /// - `Plus`: numeric identity. Booleans become integers.
    /// - `Not`: logical negation of the value's truthiness.
    ///
    /// # Example
    /// ```
    /// use flo::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, &Value::Integer(5)).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Not, &Value::Str(String::new())).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        if op == UnaryOperator::Not {
            return Ok(Value::Bool(!value.is_truthy()));
        }

        let Ok(operand) = value.to_numeric() else {
            return Err(RuntimeError::TypeError { details: format!("bad operand type for unary {op}: '{}'",
                                                                  value.type_name()) });
        };

        match (op, operand) {
            (UnaryOperator::Negate, Value::Integer(n)) => {
                Ok(Value::Integer(n.checked_neg().ok_or(RuntimeError::Overflow)?))
            },
            (UnaryOperator::Negate, Value::Real(r)) => Ok(Value::Real(-r)),
            (_, operand) => Ok(operand),
        }
    }
}
