use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::comparison::eval_comparison, core::EvalResult, utils::type_error,
        },
        value::core::Value,
    },
    util::num::checked_arithmetic,
};

/// Evaluates a binary operation between two values.
///
/// Arithmetic operators are handled by [`eval_arithmetic`]; equality and
/// ordering operators by [`eval_comparison`]. Both operands are already
/// evaluated, left before right.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<Value>` containing the evaluated result.
///
/// # Example
/// ```
/// use sprig::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let result = eval_binary(BinaryOperator::Multiply, &Value::Int(6), &Value::Int(7));
/// assert_eq!(result.unwrap(), Value::Int(42));
///
/// let result = eval_binary(BinaryOperator::IsLesser, &Value::Int(1), &Value::Int(2));
/// assert_eq!(result.unwrap(), Value::Bool(true));
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    use BinaryOperator::{
        Add, Division, IsEqual, IsGreater, IsGreaterOrEqual, IsLesser, IsLesserOrEqual,
        IsNotEqual, Multiply, Subtract,
    };

    match op {
        Add | Subtract | Multiply | Division => eval_arithmetic(op, left, right),
        IsEqual | IsNotEqual | IsLesser | IsLesserOrEqual | IsGreater | IsGreaterOrEqual => {
            eval_comparison(op, left, right)
        },
    }
}

/// Evaluates `+`, `-`, `*` or `/`.
///
/// Two integers are combined with overflow checks, and `/` truncates toward
/// zero. `+` on two strings concatenates them. Any other pairing, including
/// a string with an integer, is a type error.
///
/// # Example
/// ```
/// use sprig::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_arithmetic, value::core::Value},
/// };
///
/// let joined = eval_arithmetic(BinaryOperator::Add, &"foo".into(), &"bar".into());
/// assert_eq!(joined.unwrap(), Value::from("foobar"));
///
/// assert!(eval_arithmetic(BinaryOperator::Add, &"foo".into(), &Value::Int(1)).is_err());
/// ```
pub fn eval_arithmetic(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => checked_arithmetic(op, *a, *b).map(Value::Int),
        (Value::Str(a), Value::Str(b)) if op == BinaryOperator::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::from(joined))
        },
        _ => Err(type_error(op, left, right)),
    }
}
