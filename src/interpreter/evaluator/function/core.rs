use tracing::{instrument, trace};

use crate::{
    ast::{Expr, Statement},
    error::EvalError,
    interpreter::{
        environment::{Environment, Function, NativeFn},
        evaluator::core::{EvalResult, Evaluate},
        value::{core::Value, native::Native},
    },
};

/// Evaluates a function call expression.
///
/// The callee is looked up first and the argument count checked against its
/// arity, both before any argument is evaluated. Arguments are then evaluated
/// left to right, each under the environment left by the previous one.
///
/// # Parameters
/// - `name`: Name of the called function.
/// - `arguments`: The argument expressions, in call order.
/// - `env`: The caller's environment.
///
/// # Returns
/// The call's value and the caller's environment. Nothing the callee binds
/// is visible in it.
///
/// # Errors
/// - `EvalError::UndefinedFunction` if `name` is not in the function table.
/// - `EvalError::ArgumentsCount` if the arity does not match.
/// - Any error raised by an argument or by the body of a defined function.
///
/// # Example
/// ```
/// use sprig::{
///     ast::Expr,
///     error::EvalError,
///     interpreter::{
///         environment::Environment,
///         evaluator::function::core::eval_call,
///         value::native::Native,
///     },
/// };
///
/// let env = Environment::new().with_embedded("answer", 0, |_| Native::Int(42));
///
/// let (value, _) = eval_call("answer", &[], &env).unwrap();
/// assert_eq!(value.to_string(), "42");
///
/// let error = eval_call("answer", &[Expr::Int(1)], &env).unwrap_err();
/// assert_eq!(error,
///            EvalError::ArgumentsCount { name:     "answer".into(),
///                                        expected: 0,
///                                        found:    1, });
/// ```
#[instrument(level = "trace", skip(arguments, env), fields(argc = arguments.len()))]
pub fn eval_call(name: &str,
                 arguments: &[Expr],
                 env: &Environment)
                 -> EvalResult<(Value, Environment)> {
    let function =
        env.function(name)
           .ok_or_else(|| EvalError::UndefinedFunction { name: name.to_string() })?;
    check_arity(name, function.arity(), arguments.len())?;

    let (values, env) = eval_arguments(arguments, env)?;

    let value = match function {
        Function::Embedded { callable, .. } => call_embedded(callable.as_ref(), &values),
        Function::Defined { params, body } => call_defined(params, body, values, &env)?,
    };
    trace!(%value, "call returned");
    Ok((value, env))
}

/// Checks that a call site supplies as many arguments as the callee expects.
///
/// # Example
/// ```
/// use sprig::interpreter::evaluator::function::core::check_arity;
///
/// assert!(check_arity("f", 2, 2).is_ok());
/// assert!(check_arity("f", 2, 3).is_err());
/// ```
pub fn check_arity(name: &str, expected: usize, found: usize) -> EvalResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(EvalError::ArgumentsCount { name: name.to_string(),
                                        expected,
                                        found })
    }
}

/// Evaluates argument expressions left to right, threading the environment.
fn eval_arguments(arguments: &[Expr], env: &Environment) -> EvalResult<(Vec<Value>, Environment)> {
    let mut values = Vec::with_capacity(arguments.len());
    let mut env = env.clone();

    for argument in arguments {
        let (value, next) = argument.evaluate(&env)?;
        values.push(value);
        env = next;
    }
    Ok((values, env))
}

/// Runs a host callable. Arguments are unwrapped to [`Native`] and the result
/// is wrapped back.
fn call_embedded(callable: &NativeFn, values: &[Value]) -> Value {
    let natives: Vec<Native> = values.iter().map(Native::from).collect();
    Value::from(callable(natives.as_slice()))
}

/// Runs the body of a defined function in a fresh frame that binds only the
/// parameters. The frame is dropped afterwards.
fn call_defined(params: &[String],
                body: &[Statement],
                values: Vec<Value>,
                env: &Environment)
                -> EvalResult<Value> {
    let frame = env.call_frame(params.iter().cloned().zip(values));
    let (value, _) = body.evaluate(&frame)?;
    Ok(value)
}
