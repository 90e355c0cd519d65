use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{core::EvalResult, utils::type_error},
        value::core::Value,
    },
};

/// Evaluates a comparison of the form `Value <Operator> Value`.
///
/// `==` and `!=` compare kind and payload and accept any pair of values, so
/// `1 == "1"` is simply `false`. The ordering operators require two
/// integers.
///
/// # Parameters
/// - `op`: The comparison operator.
/// - `left`: The left-hand value.
/// - `right`: The right-hand value.
///
/// # Returns
/// An `EvalResult<Value>` containing a boolean result.
///
/// # Example
/// ```
/// use sprig::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value},
/// };
///
/// let result = eval_comparison(BinaryOperator::IsEqual, &Value::Int(1), &"1".into());
/// assert_eq!(result.unwrap(), Value::Bool(false));
///
/// let result = eval_comparison(BinaryOperator::IsGreaterOrEqual, &Value::Int(3), &Value::Int(3));
/// assert_eq!(result.unwrap(), Value::Bool(true));
/// ```
pub fn eval_comparison(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    let result = match op {
        BinaryOperator::IsEqual => left == right,
        BinaryOperator::IsNotEqual => left != right,
        _ => {
            let (Value::Int(a), Value::Int(b)) = (left, right) else {
                return Err(type_error(op, left, right));
            };
            ordering_holds(op, a.cmp(b))
        },
    };
    Ok(Value::Bool(result))
}

/// Tells whether an ordering satisfies an ordering operator. Arithmetic and
/// equality operators are never satisfied.
const fn ordering_holds(op: BinaryOperator, ordering: Ordering) -> bool {
    match op {
        BinaryOperator::IsLesser => ordering.is_lt(),
        BinaryOperator::IsLesserOrEqual => ordering.is_le(),
        BinaryOperator::IsGreater => ordering.is_gt(),
        BinaryOperator::IsGreaterOrEqual => ordering.is_ge(),
        _ => false,
    }
}
