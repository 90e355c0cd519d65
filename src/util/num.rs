use crate::{ast::BinaryOperator, error::EvalError, interpreter::evaluator::core::EvalResult};

/// Smallest `f64` that no longer fits into an `i64` (`2^63`).
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Converts an `f64` to `i64` by truncating toward zero.
///
/// ## Returns
/// - `Some(i64)`: The truncated value, if it is finite and in range.
/// - `None`: For NaN, infinities and values outside the `i64` range.
///
/// ## Example
/// ```
/// use sprig::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(3.9), Some(3));
/// assert_eq!(f64_to_i64_truncated(-3.9), Some(-3));
/// assert_eq!(f64_to_i64_truncated(f64::INFINITY), None);
/// assert_eq!(f64_to_i64_truncated(1e300), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_truncated(value: f64) -> Option<i64> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated >= I64_BOUND || truncated < -I64_BOUND {
        return None;
    }
    Some(truncated as i64)
}

/// Applies an arithmetic operator to two integers with overflow checks.
///
/// Division truncates toward zero. Comparison operators are not arithmetic
/// and are rejected with a type error naming both operands as `int`.
///
/// ## Errors
/// - `EvalError::DivisionByZero` when dividing by `0`.
/// - `EvalError::Overflow` when the result leaves the `i64` range (this
///   includes `i64::MIN / -1`).
///
/// ## Example
/// ```
/// use sprig::{ast::BinaryOperator, error::EvalError, util::num::checked_arithmetic};
///
/// assert_eq!(checked_arithmetic(BinaryOperator::Division, -7, 2), Ok(-3));
/// assert_eq!(checked_arithmetic(BinaryOperator::Division, 1, 0),
///            Err(EvalError::DivisionByZero));
/// assert!(checked_arithmetic(BinaryOperator::Add, i64::MAX, 1).is_err());
/// ```
pub fn checked_arithmetic(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
    let result = match op {
        BinaryOperator::Add => left.checked_add(right),
        BinaryOperator::Subtract => left.checked_sub(right),
        BinaryOperator::Multiply => left.checked_mul(right),
        BinaryOperator::Division => {
            if right == 0 {
                return Err(EvalError::DivisionByZero);
            }
            left.checked_div(right)
        },
        _ => {
            return Err(EvalError::TypeError { operator: op,
                                              left:     "int",
                                              right:    "int", });
        },
    };
    result.ok_or(EvalError::Overflow { operator: op })
}
