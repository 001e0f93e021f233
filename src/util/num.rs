use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Converts an `i64` to `f64` for mixed integer/real arithmetic.
///
/// Large magnitudes round to the nearest representable `f64`, the same way
/// mixed arithmetic behaves in most dynamically typed scripting languages.
///
/// ## Example
/// ```
/// use flo::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Safely converts an `i64` exponent to `u32`.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the exponent is negative or does not
/// fit into a `u32`.
///
/// ## Example
/// ```
/// use flo::util::num::i64_to_u32_checked;
///
/// assert_eq!(i64_to_u32_checked(3).unwrap(), 3);
/// assert!(i64_to_u32_checked(-1).is_err());
/// ```
pub fn i64_to_u32_checked(value: i64) -> EvalResult<u32> {
    u32::try_from(value).map_err(|_| RuntimeError::Overflow)
}

/// Integer division rounding towards negative infinity.
///
/// ## Errors
/// - `RuntimeError::DivisionByZero` if `divisor` is zero.
/// - `RuntimeError::Overflow` for `i64::MIN // -1`.
///
/// ## Example
/// ```
/// use flo::util::num::floor_div;
///
/// assert_eq!(floor_div(7, 2).unwrap(), 3);
/// assert_eq!(floor_div(-7, 2).unwrap(), -4);
/// assert_eq!(floor_div(7, -2).unwrap(), -4);
/// ```
pub fn floor_div(dividend: i64, divisor: i64) -> EvalResult<i64> {
    if divisor == 0 {
        return Err(RuntimeError::DivisionByZero);
    }
    let quotient = dividend.checked_div(divisor).ok_or(RuntimeError::Overflow)?;
    if dividend % divisor != 0 && (dividend < 0) != (divisor < 0) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

/// Integer modulo whose result takes the sign of the divisor.
///
/// ## Errors
/// Returns `RuntimeError::DivisionByZero` if `divisor` is zero.
///
/// ## Example
/// ```
/// use flo::util::num::floor_mod;
///
/// assert_eq!(floor_mod(7, 3).unwrap(), 1);
/// assert_eq!(floor_mod(-7, 3).unwrap(), 2);
/// assert_eq!(floor_mod(7, -3).unwrap(), -2);
/// ```
pub fn floor_mod(dividend: i64, divisor: i64) -> EvalResult<i64> {
    if divisor == 0 {
        return Err(RuntimeError::DivisionByZero);
    }
    // `checked_rem` only fails for `i64::MIN % -1`, whose remainder is zero.
    let remainder = dividend.checked_rem(divisor).unwrap_or(0);
    if remainder != 0 && (remainder < 0) != (divisor < 0) {
        Ok(remainder + divisor)
    } else {
        Ok(remainder)
    }
}

/// Real modulo whose result takes the sign of the divisor.
///
/// ## Errors
/// Returns `RuntimeError::DivisionByZero` if `divisor` is zero.
pub fn floor_mod_real(dividend: f64, divisor: f64) -> EvalResult<f64> {
    if divisor == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    let remainder = dividend % divisor;
    if remainder != 0.0 && (remainder < 0.0) != (divisor < 0.0) {
        Ok(remainder + divisor)
    } else {
        Ok(remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_div_rounds_down_for_mixed_signs() {
        assert_eq!(floor_div(-1, 3).unwrap(), -1);
        assert_eq!(floor_div(6, -3).unwrap(), -2);
        assert_eq!(floor_div(-6, -4).unwrap(), 1);
    }

    #[test]
    fn floor_div_reports_errors() {
        assert!(matches!(floor_div(1, 0), Err(RuntimeError::DivisionByZero)));
        assert!(matches!(floor_div(i64::MIN, -1), Err(RuntimeError::Overflow)));
    }

    #[test]
    fn floor_mod_handles_extremes() {
        assert_eq!(floor_mod(i64::MIN, -1).unwrap(), 0);
        assert!(matches!(floor_mod(3, 0), Err(RuntimeError::DivisionByZero)));
    }

    #[test]
    fn floor_mod_real_follows_divisor_sign() {
        assert!((floor_mod_real(-5.5, 2.0).unwrap() - 0.5).abs() < f64::EPSILON);
        assert!((floor_mod_real(5.5, -2.0).unwrap() + 0.5).abs() < f64::EPSILON);
    }
}
