use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::{Expr, Source, Statement},
    error::EvalError,
    interpreter::{
        environment::{Environment, Function},
        evaluator::{binary::core::eval_binary, function::core::eval_call},
        value::core::Value,
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// A syntax tree node that can be evaluated.
///
/// Evaluating never changes the given environment. A successful evaluation
/// returns the node's value together with the environment to continue with;
/// a failed one returns only the error, so the caller keeps the environment it
/// passed in.
pub trait Evaluate {
    /// Evaluates the node under `env`.
    ///
    /// # Returns
    /// The resulting value and the environment that follows the node.
    fn evaluate(&self, env: &Environment) -> EvalResult<(Value, Environment)>;
}

/// Evaluates any node under `env`.
///
/// # Example
/// ```
/// use sprig::{
///     interpreter::{
///         environment::Environment, evaluator::evaluate, lexer::tokenize, parser::parse,
///         value::core::Value,
///     },
/// };
///
/// let source = parse(&tokenize("x = 6; x * 7;")).unwrap();
/// let (value, env) = evaluate(&source, &Environment::new()).unwrap();
///
/// assert_eq!(value, Value::Int(42));
/// assert_eq!(env.variable("x"), Some(&Value::Int(6)));
/// ```
pub fn evaluate<T>(node: &T, env: &Environment) -> EvalResult<(Value, Environment)>
    where T: Evaluate + ?Sized
{
    node.evaluate(env)
}

impl Evaluate for Source {
    fn evaluate(&self, env: &Environment) -> EvalResult<(Value, Environment)> {
        debug!(statements = self.statements.len(), "evaluating source");
        self.statements.evaluate(env)
    }
}

/// Blocks run their statements in order, threading the environment; the value
/// is that of the last statement, or `null` for an empty block.
impl Evaluate for [Statement] {
    fn evaluate(&self, env: &Environment) -> EvalResult<(Value, Environment)> {
        self.iter()
            .try_fold((Value::Null, env.clone()), |(_, env), statement| statement.evaluate(&env))
    }
}

impl Evaluate for Statement {
    fn evaluate(&self, env: &Environment) -> EvalResult<(Value, Environment)> {
        ensure_sufficient_stack(|| match self {
            Self::Expression(expr) => expr.evaluate(env),
            Self::Assignment { name, value } => {
                let (value, env) = value.evaluate(env)?;
                Ok((Value::Null, env.with_variable(name, value)))
            },
            Self::If { condition,
                       then_block,
                       else_block, } => {
                let (condition, env) = condition.evaluate(env)?;
                if condition.is_truthy() {
                    then_block.evaluate(&env)
                } else if let Some(else_block) = else_block {
                    else_block.evaluate(&env)
                } else {
                    Ok((Value::Null, env))
                }
            },
            Self::While { condition, body } => eval_while(condition, body, env),
            Self::FuncDef(def) => {
                let function = Function::Defined { params: Rc::from(def.params.as_slice()),
                                                   body:   Rc::from(def.body.as_slice()), };
                Ok((Value::Null, env.with_function(&def.name, function)))
            },
        })
    }
}

impl Evaluate for Expr {
    fn evaluate(&self, env: &Environment) -> EvalResult<(Value, Environment)> {
        ensure_sufficient_stack(|| match self {
            Self::Int(n) => Ok((Value::Int(*n), env.clone())),
            Self::Bool(b) => Ok((Value::Bool(*b), env.clone())),
            Self::Str(s) => Ok((Value::from(s.as_str()), env.clone())),
            Self::Null => Ok((Value::Null, env.clone())),
            Self::Variable { name } => {
                let value = env.variable(name).cloned().unwrap_or(Value::Null);
                Ok((value, env.clone()))
            },
            Self::Binary { op, left, right } => {
                let (left, env) = left.evaluate(env)?;
                let (right, env) = right.evaluate(&env)?;
                Ok((eval_binary(*op, &left, &right)?, env))
            },
            Self::Call { name, arguments } => eval_call(name, arguments, env),
        })
    }
}

/// Runs a `while` loop.
///
/// The condition is re-evaluated before every iteration under the environment
/// left by the previous one. The value is that of the last body run, or `null`
/// if the body never ran.
fn eval_while(condition: &Expr,
              body: &[Statement],
              env: &Environment)
              -> EvalResult<(Value, Environment)> {
    let mut env = env.clone();
    let mut last = Value::Null;

    loop {
        let (test, next) = condition.evaluate(&env)?;
        env = next;
        if !test.is_truthy() {
            return Ok((last, env));
        }
        let (value, next) = body.evaluate(&env)?;
        last = value;
        env = next;
    }
}
