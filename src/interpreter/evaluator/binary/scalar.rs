use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
    util::num::{floor_div, floor_mod, floor_mod_real, i64_to_f64, i64_to_u32_checked},
};

/// Builds the type error for an operator applied to unsupported operands.
fn unsupported(op: BinaryOperator, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::TypeError { details: format!("unsupported operand type(s) for {op}: '{}' and '{}'",
                                               left.type_name(),
                                               right.type_name()) }
}

/// Repeats `text` `count` times; non-positive counts give an empty string.
fn repeat_str(text: &str, count: i64) -> EvalResult<Value> {
    let count = usize::try_from(count).unwrap_or(0);
    if count > 0 && text.len().checked_mul(count).is_none() {
        return Err(RuntimeError::Overflow);
    }
    Ok(Value::Str(text.repeat(count)))
}

impl Evaluator<'_> {
    /// Evaluates an arithmetic operation.
    ///
    /// Strings support `+` with another string and `*` with an integer (or
    /// boolean) count on either side. All other combinations require numeric
    /// operands, which are promoted with [`Value::promote_numeric`] first.
    ///
    /// # Errors
    /// - `TypeError` for unsupported operand kinds.
    /// - `DivisionByZero` for `/`, `//`, `%` by zero and zero raised to a
    ///   negative power.
    /// - `Overflow` when integer arithmetic overflows.
    ///
    /// # Example
    /// ```
    /// use flo::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let x = Value::Integer(7);
    /// let y = Value::Integer(2);
    ///
    /// assert_eq!(Evaluator::eval_scalar_op(BinaryOperator::Div, &x, &y).unwrap(),
    ///            Value::Real(3.5));
    /// assert_eq!(Evaluator::eval_scalar_op(BinaryOperator::FloorDiv, &x, &y).unwrap(),
    ///            Value::Integer(3));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{Add, Mul};

        match (op, left, right) {
            (Add, Value::Str(a), Value::Str(b)) => return Ok(Value::Str(format!("{a}{b}"))),
            (Mul, Value::Str(s), Value::Integer(_) | Value::Bool(_))
            | (Mul, Value::Integer(_) | Value::Bool(_), Value::Str(s)) => {
                let count = if let Value::Str(_) = left { right } else { left };
                return match count.to_numeric()? {
                    Value::Integer(n) => repeat_str(s, n),
                    _ => Err(unsupported(op, left, right)),
                };
            },
            _ => {},
        }

        if !left.is_numeric() || !right.is_numeric() {
            return Err(unsupported(op, left, right));
        }

        match left.promote_numeric(right)? {
            (Value::Integer(a), Value::Integer(b)) => Self::eval_integer_op(op, a, b),
            (Value::Real(a), Value::Real(b)) => Self::eval_real_op(op, a, b),
            _ => unreachable!("promote_numeric yields matching numeric kinds"),
        }
    }

    /// Integer arithmetic. True division and negative powers produce reals.
    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

        let checked = |result: Option<i64>| result.map(Value::Integer).ok_or(RuntimeError::Overflow);

        match op {
            Add => checked(a.checked_add(b)),
            Sub => checked(a.checked_sub(b)),
            Mul => checked(a.checked_mul(b)),
            Div => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(Value::Real(i64_to_f64(a) / i64_to_f64(b)))
            },
            FloorDiv => Ok(Value::Integer(floor_div(a, b)?)),
            Mod => Ok(Value::Integer(floor_mod(a, b)?)),
            Pow if b >= 0 => checked(a.checked_pow(i64_to_u32_checked(b)?)),
            Pow => Self::eval_real_op(Pow, i64_to_f64(a), i64_to_f64(b)),
            _ => unreachable!("eval_integer_op used with non arithmetic operator"),
        }
    }

    /// Real arithmetic.
    fn eval_real_op(op: BinaryOperator, a: f64, b: f64) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

        Ok(Value::Real(match op {
                           Add => a + b,
                           Sub => a - b,
                           Mul => a * b,
                           Div | FloorDiv => {
                               if b == 0.0 {
                                   return Err(RuntimeError::DivisionByZero);
                               }
                               if op == Div { a / b } else { (a / b).floor() }
                           },
                           Mod => floor_mod_real(a, b)?,
                           Pow => {
                               if a == 0.0 && b < 0.0 {
                                   return Err(RuntimeError::DivisionByZero);
                               }
                               if a < 0.0 && b.fract() != 0.0 {
                                   return Err(RuntimeError::TypeError {
                                       details: "negative number cannot be raised to a fractional power"
                                           .to_string(),
                                   });
                               }
                               a.powf(b)
                           },
                           _ => unreachable!("eval_real_op used with non arithmetic operator"),
                       }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(op: BinaryOperator, left: impl Into<Value>, right: impl Into<Value>) -> EvalResult<Value> {
        Evaluator::eval_scalar_op(op, &left.into(), &right.into())
    }

    #[test]
    fn integer_arithmetic_stays_integral() {
        assert_eq!(op(BinaryOperator::Add, 2_i64, 3_i64).unwrap(), Value::Integer(5));
        assert_eq!(op(BinaryOperator::Mul, -4_i64, 3_i64).unwrap(), Value::Integer(-12));
        assert_eq!(op(BinaryOperator::Pow, 2_i64, 10_i64).unwrap(), Value::Integer(1024));
        assert_eq!(op(BinaryOperator::Mod, -7_i64, 3_i64).unwrap(), Value::Integer(2));
    }

    #[test]
    fn division_is_always_real() {
        assert_eq!(op(BinaryOperator::Div, 6_i64, 3_i64).unwrap(), Value::Real(2.0));
        assert_eq!(op(BinaryOperator::Pow, 2_i64, -1_i64).unwrap(), Value::Real(0.5));
        assert_eq!(op(BinaryOperator::FloorDiv, 7.5, 2_i64).unwrap(), Value::Real(3.0));
    }

    #[test]
    fn mixed_operands_promote_to_real() {
        assert_eq!(op(BinaryOperator::Add, 1_i64, 0.5).unwrap(), Value::Real(1.5));
        assert_eq!(op(BinaryOperator::Add, true, 1_i64).unwrap(), Value::Integer(2));
    }

    #[test]
    fn strings_concatenate_and_repeat() {
        assert_eq!(op(BinaryOperator::Add, "ab", "cd").unwrap(), Value::from("abcd"));
        assert_eq!(op(BinaryOperator::Mul, "ab", 3_i64).unwrap(), Value::from("ababab"));
        assert_eq!(op(BinaryOperator::Mul, 2_i64, "x").unwrap(), Value::from("xx"));
        assert_eq!(op(BinaryOperator::Mul, "x", -1_i64).unwrap(), Value::from(""));
    }

    #[test]
    fn mismatched_kinds_are_type_errors() {
        assert!(matches!(op(BinaryOperator::Add, "a", 1_i64), Err(RuntimeError::TypeError { .. })));
        assert!(matches!(op(BinaryOperator::Sub, "a", "b"), Err(RuntimeError::TypeError { .. })));
        assert!(matches!(op(BinaryOperator::Mul, "a", 1.5), Err(RuntimeError::TypeError { .. })));
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(op(BinaryOperator::Div, 1_i64, 0_i64), Err(RuntimeError::DivisionByZero));
        assert_eq!(op(BinaryOperator::FloorDiv, 1.0, 0_i64), Err(RuntimeError::DivisionByZero));
        assert_eq!(op(BinaryOperator::Mod, 1_i64, 0_i64), Err(RuntimeError::DivisionByZero));
        assert_eq!(op(BinaryOperator::Pow, 0_i64, -1_i64), Err(RuntimeError::DivisionByZero));
    }

    #[test]
    fn integer_overflow_is_reported() {
        assert_eq!(op(BinaryOperator::Mul, i64::MAX, 2_i64), Err(RuntimeError::Overflow));
        assert_eq!(op(BinaryOperator::Pow, 10_i64, 40_i64), Err(RuntimeError::Overflow));
    }
}
