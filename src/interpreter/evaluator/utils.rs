use crate::{ast::BinaryOperator, error::EvalError, interpreter::value::core::Value};

/// Builds the error for an operator applied to operands of the wrong kinds.
///
/// # Example
/// ```
/// use sprig::{
///     ast::BinaryOperator,
///     error::EvalError,
///     interpreter::{evaluator::utils::type_error, value::core::Value},
/// };
///
/// let error = type_error(BinaryOperator::Add, &Value::Int(1), &Value::Bool(true));
/// assert_eq!(error,
///            EvalError::TypeError { operator: BinaryOperator::Add,
///                                   left:     "int",
///                                   right:    "bool", });
/// ```
#[must_use]
pub const fn type_error(operator: BinaryOperator, left: &Value, right: &Value) -> EvalError {
    EvalError::TypeError { operator,
                           left: left.kind(),
                           right: right.kind() }
}
