use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

/// Orders two values when they are of comparable kinds.
///
/// Numbers (including booleans) compare numerically and strings compare
/// lexicographically. Returns `Ok(None)` for comparable values that are
/// unordered (`NaN`) and `Err` for incomparable kinds.
fn compare(left: &Value, right: &Value) -> Result<Option<Ordering>, ()> {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => Ok(Some(a.cmp(b))),
        (Value::Str(_), _) | (_, Value::Str(_)) => Err(()),
        _ => match left.promote_numeric(right).map_err(|_| ())? {
            (Value::Integer(a), Value::Integer(b)) => Ok(Some(a.cmp(&b))),
            (Value::Real(a), Value::Real(b)) => Ok(a.partial_cmp(&b)),
            _ => Err(()),
        },
    }
}

impl Evaluator<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` never fail: values of incomparable kinds are simply
    /// unequal. Ordering operators require both sides to be numbers or both
    /// to be strings.
    ///
    /// # Example
    /// ```
    /// use flo::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let a = Value::Integer(3);
    /// let b = Value::Real(3.0);
    ///
    /// assert!(Evaluator::eval_comparison(BinaryOperator::Equal, &a, &b).unwrap());
    /// assert!(!Evaluator::eval_comparison(BinaryOperator::Equal, &a, &Value::from("3")).unwrap());
    /// assert!(Evaluator::eval_comparison(BinaryOperator::Less, &a, &Value::from("3")).is_err());
    /// ```
    pub fn eval_comparison(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<bool> {
        let ordering = compare(left, right);

        match op {
            BinaryOperator::Equal => Ok(matches!(ordering, Ok(Some(Ordering::Equal)))),
            BinaryOperator::NotEqual => Ok(!matches!(ordering, Ok(Some(Ordering::Equal)))),
            BinaryOperator::Less
            | BinaryOperator::Greater
            | BinaryOperator::LessEqual
            | BinaryOperator::GreaterEqual => {
                let Ok(ordering) = ordering else {
                    return Err(RuntimeError::TypeError {
                        details: format!("'{op}' not supported between instances of '{}' and '{}'",
                                         left.type_name(),
                                         right.type_name()),
                    });
                };
                Ok(ordering.is_some_and(|ordering| match op {
                               BinaryOperator::Less => ordering.is_lt(),
                               BinaryOperator::Greater => ordering.is_gt(),
                               BinaryOperator::LessEqual => ordering.is_le(),
                               BinaryOperator::GreaterEqual => ordering.is_ge(),
                               _ => unreachable!(),
                           }))
            },
            _ => unreachable!("eval_comparison used with non comparison operator"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(op: BinaryOperator, left: impl Into<Value>, right: impl Into<Value>) -> EvalResult<bool> {
        Evaluator::eval_comparison(op, &left.into(), &right.into())
    }

    #[test]
    fn numbers_compare_across_kinds() {
        assert!(cmp(BinaryOperator::Less, 1_i64, 1.5).unwrap());
        assert!(cmp(BinaryOperator::Equal, true, 1_i64).unwrap());
        assert!(cmp(BinaryOperator::GreaterEqual, 2.0, 2_i64).unwrap());
    }

    #[test]
    fn strings_compare_lexicographically() {
        assert!(cmp(BinaryOperator::Less, "apple", "banana").unwrap());
        assert!(cmp(BinaryOperator::NotEqual, "a", "A").unwrap());
    }

    #[test]
    fn mixed_kinds_are_unequal_but_unordered() {
        assert!(!cmp(BinaryOperator::Equal, 1_i64, "1").unwrap());
        assert!(cmp(BinaryOperator::NotEqual, "1", 1_i64).unwrap());
        assert!(matches!(cmp(BinaryOperator::Greater, "1", 1_i64), Err(RuntimeError::TypeError { .. })));
    }

    #[test]
    fn nan_is_unequal_to_itself() {
        assert!(!cmp(BinaryOperator::Equal, f64::NAN, f64::NAN).unwrap());
        assert!(!cmp(BinaryOperator::Less, f64::NAN, 1_i64).unwrap());
    }
}
