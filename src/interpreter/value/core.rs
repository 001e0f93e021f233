use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64,
};

/// Represents a runtime value in the interpreter.
///
/// Values are dynamically typed: whatever kind an expression produces is
/// stored as-is in the variable environment and printed with its default
/// textual form.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    /// Produced by real literals, true division and mixed arithmetic.
    Real(f64),
    /// A string value.
    Str(String),
    /// A boolean value (`True` or `False`).
    /// Produced by comparison operators and `not`. In arithmetic a boolean
    /// behaves like the integer `1` or `0`.
    Bool(bool),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl Value {
    /// Returns the truthiness of the value, as used by `if` conditions and
    /// the logical operators.
    ///
    /// Zero, `0.0`, the empty string and `False` are falsy; everything else
    /// is truthy.
    ///
    /// # Example
    /// ```
    /// use flo::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Str(String::new()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
        }
    }

    /// Returns the name of the value's type for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Real(_) => "float",
            Self::Str(_) => "str",
            Self::Bool(_) => "bool",
        }
    }

    /// Returns `true` for integers, reals and booleans.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        !matches!(self, Self::Str(_))
    }

    /// Converts the value to a numeric value, turning booleans into the
    /// integers `1` and `0`.
    ///
    /// # Returns
    /// - `Ok(Value::Integer | Value::Real)`: The numeric value.
    /// - `Err(RuntimeError::TypeError)`: If the value is a string.
    pub fn to_numeric(&self) -> EvalResult<Self> {
        match self {
            Self::Bool(b) => Ok(Self::Integer(i64::from(*b))),
            Self::Integer(_) | Self::Real(_) => Ok(self.clone()),
            Self::Str(_) => {
                Err(RuntimeError::TypeError { details: format!("expected a number, found {}",
                                                               self.type_name()) })
            },
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Example
    /// ```
    /// use flo::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real().unwrap(), 10.0);
    /// assert_eq!(Value::Bool(true).as_real().unwrap(), 1.0);
    /// assert!(Value::Str("10".to_string()).as_real().is_err());
    /// ```
    pub fn as_real(&self) -> EvalResult<f64> {
        match self.to_numeric()? {
            Self::Integer(n) => Ok(i64_to_f64(n)),
            Self::Real(r) => Ok(r),
            _ => unreachable!("to_numeric only yields integers and reals"),
        }
    }

    /// Promotes two numeric operands to a common kind.
    ///
    /// - Booleans become integers.
    /// - If one side is an integer and the other is a real, the integer is
    ///   converted to a real.
    ///
    /// # Returns
    /// - `Ok((Self, Self))`: Promoted values, both `Integer` or both `Real`.
    /// - `Err(RuntimeError::TypeError)`: If either side is not numeric.
    pub fn promote_numeric(&self, other: &Self) -> EvalResult<(Self, Self)> {
        use Value::{Integer, Real};

        match (self.to_numeric()?, other.to_numeric()?) {
            (Integer(a), Real(b)) => Ok((Real(i64_to_f64(a)), Real(b))),
            (Real(a), Integer(b)) => Ok((Real(a), Real(i64_to_f64(b)))),
            pair => Ok(pair),
        }
    }
}

/// Writes a real in exponent form with a signed, at least two-digit
/// exponent, such as `1e+300` or `2.5e-07`.
fn write_exponent(f: &mut std::fmt::Formatter<'_>, r: f64) -> std::fmt::Result {
    let formatted = format!("{r:e}");
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    write!(f, "{mantissa}e{sign}{digits:0>2}")
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => {
                if r.is_nan() {
                    write!(f, "nan")
                } else if r.is_infinite() {
                    write!(f, "{}", if *r > 0.0 { "inf" } else { "-inf" })
                } else if *r != 0.0 && !(1e-4..1e16).contains(&r.abs()) {
                    write_exponent(f, *r)
                } else if r.fract() == 0.0 {
                    write!(f, "{r:.1}")
                } else {
                    write!(f, "{r}")
                }
            },
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reals_always_show_a_fraction() {
        assert_eq!(Value::Real(4.0).to_string(), "4.0");
        assert_eq!(Value::Real(-0.5).to_string(), "-0.5");
        assert_eq!(Value::Real(2.5).to_string(), "2.5");
        assert_eq!(Value::Real(f64::INFINITY).to_string(), "inf");
        assert_eq!(Value::Real(1e15).to_string(), "1000000000000000.0");
        assert_eq!(Value::Real(0.0).to_string(), "0.0");
    }

    #[test]
    fn reals_outside_the_positional_range_use_exponents() {
        assert_eq!(Value::Real(1e300).to_string(), "1e+300");
        assert_eq!(Value::Real(1e16).to_string(), "1e+16");
        assert_eq!(Value::Real(1e-7).to_string(), "1e-07");
        assert_eq!(Value::Real(-2.5e-5).to_string(), "-2.5e-05");
        assert_eq!(Value::Real(2f64.powi(60)).to_string(), "1.152921504606847e+18");
        assert_eq!(Value::Real(0.0001).to_string(), "0.0001");
    }

    #[test]
    fn booleans_and_strings_print_plainly() {
        assert_eq!(Value::Bool(true).to_string(), "True");
        assert_eq!(Value::Bool(false).to_string(), "False");
        assert_eq!(Value::from("hi there").to_string(), "hi there");
    }

    #[test]
    fn truthiness_follows_emptiness_and_zero() {
        assert!(!Value::Integer(0).is_truthy());
        assert!(!Value::Real(0.0).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::from("0").is_truthy());
        assert!(Value::Real(-0.1).is_truthy());
    }

    #[test]
    fn promotion_mixes_integers_into_reals() {
        let (l, r) = Value::Integer(2).promote_numeric(&Value::Real(0.5)).unwrap();
        assert_eq!((l, r), (Value::Real(2.0), Value::Real(0.5)));

        let (l, r) = Value::Bool(true).promote_numeric(&Value::Integer(3)).unwrap();
        assert_eq!((l, r), (Value::Integer(1), Value::Integer(3)));

        assert!(Value::from("a").promote_numeric(&Value::Integer(1)).is_err());
    }
}
