use std::{fmt, rc::Rc};

use im::HashMap;

use crate::{
    ast::Statement,
    interpreter::{
        evaluator::function::print::print,
        value::{core::Value, native::Native},
    },
};

/// Signature of a host callable registered as an embedded function.
pub type NativeFn = dyn Fn(&[Native]) -> Native;

/// An entry of the function namespace.
#[derive(Clone)]
pub enum Function {
    /// A function declared in the language with `def`.
    ///
    /// It closes over nothing; calls see the caller's function table and
    /// their own parameters only.
    Defined {
        /// Parameter names, in declaration order.
        params: Rc<[String]>,
        /// The statements of the body.
        body:   Rc<[Statement]>,
    },
    /// A host function with a fixed arity.
    Embedded {
        /// The number of arguments the callable expects.
        arity:    usize,
        /// The host implementation.
        callable: Rc<NativeFn>,
    },
}

impl Function {
    /// The number of arguments a call must supply.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::Defined { params, .. } => params.len(),
            Self::Embedded { arity, .. } => *arity,
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defined { params, body } => f.debug_struct("Defined")
                                               .field("params", params)
                                               .field("body", body)
                                               .finish(),
            Self::Embedded { arity, .. } => f.debug_struct("Embedded")
                                             .field("arity", arity)
                                             .finish_non_exhaustive(),
        }
    }
}

impl PartialEq for Function {
    /// Defined functions compare by parameters and body, embedded ones by the
    /// identity of their callable.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Defined { params: p1, body: b1 }, Self::Defined { params: p2, body: b2 }) => {
                p1 == p2 && b1 == b2
            },
            (Self::Embedded { arity: a1,
                              callable: c1, },
             Self::Embedded { arity: a2,
                              callable: c2, }) => a1 == a2 && Rc::ptr_eq(c1, c2),
            _ => false,
        }
    }
}

/// The bindings active at one point of evaluation.
///
/// An environment holds two independent namespaces, variables and functions,
/// and is never modified in place. Every operation that binds a name returns
/// a new environment; the untouched namespace is shared with the original and
/// the changed one shares structure through `im::HashMap`, so cloning and
/// updating are cheap.
///
/// ## Usage
///
/// The front end creates one environment, passes it to each evaluation and
/// keeps the environment returned by a successful evaluation for the next one.
///
/// ```
/// use sprig::interpreter::{environment::Environment, value::core::Value};
///
/// let empty = Environment::new();
/// let with_x = empty.with_variable("x", Value::Int(1));
///
/// assert_eq!(with_x.variable("x"), Some(&Value::Int(1)));
/// assert_eq!(empty.variable("x"), None);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, Value>,
    functions: HashMap<String, Function>,
}

impl Environment {
    /// Creates an environment with no variables and no functions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment holding the default embedded functions.
    ///
    /// Currently this is `print(value)`, which writes the value to standard
    /// output and returns `null`.
    #[must_use]
    pub fn with_prelude() -> Self {
        Self::new().with_embedded("print", 1, print)
    }

    /// Returns a new environment in which `name` is bound to `value`.
    #[must_use]
    pub fn with_variable(&self, name: impl Into<String>, value: Value) -> Self {
        Self { variables: self.variables.update(name.into(), value),
               functions: self.functions.clone(), }
    }

    /// Returns a new environment in which `name` refers to `function`,
    /// replacing any earlier function of that name.
    #[must_use]
    pub fn with_function(&self, name: impl Into<String>, function: Function) -> Self {
        Self { variables: self.variables.clone(),
               functions: self.functions.update(name.into(), function), }
    }

    /// Registers a host callable as an embedded function.
    #[must_use]
    pub fn with_embedded(&self,
                         name: impl Into<String>,
                         arity: usize,
                         callable: impl Fn(&[Native]) -> Native + 'static)
                         -> Self {
        self.with_function(name,
                           Function::Embedded { arity,
                                                callable: Rc::new(callable) })
    }

    /// Builds the environment a defined function body runs in: the given
    /// parameter bindings and this environment's function table, but none of
    /// its variables.
    #[must_use]
    pub fn call_frame(&self, bindings: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self { variables: bindings.into_iter().collect(),
               functions: self.functions.clone(), }
    }

    /// Looks up a variable.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Looks up a function.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    /// Iterates over all variable bindings, in no particular order.
    pub fn variables(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.variables.iter()
    }

    /// Iterates over all function bindings, in no particular order.
    pub fn functions(&self) -> impl Iterator<Item = (&String, &Function)> {
        self.functions.iter()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
         .field("variables", &self.variables)
         .field("functions", &self.functions)
         .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_a_variable_leaves_the_original_untouched() {
        let base = Environment::new().with_variable("a", Value::Int(1));
        let next = base.with_variable("a", Value::Int(2));

        assert_eq!(base.variable("a"), Some(&Value::Int(1)));
        assert_eq!(next.variable("a"), Some(&Value::Int(2)));
    }

    #[test]
    fn namespaces_are_independent() {
        let env = Environment::new().with_variable("f", Value::Int(1))
                                    .with_embedded("f", 0, |_| Native::Null);

        assert_eq!(env.variable("f"), Some(&Value::Int(1)));
        assert_eq!(env.function("f").map(Function::arity), Some(0));
    }

    #[test]
    fn call_frame_keeps_functions_and_drops_variables() {
        let env = Environment::with_prelude().with_variable("outer", Value::Int(1));
        let frame = env.call_frame([("n".to_string(), Value::Int(5))]);

        assert_eq!(frame.variable("outer"), None);
        assert_eq!(frame.variable("n"), Some(&Value::Int(5)));
        assert!(frame.function("print").is_some());
    }

    #[test]
    fn redefining_a_function_replaces_it() {
        let first = Function::Defined { params: Rc::from(Vec::new()),
                                        body:   Rc::from(Vec::new()), };
        let second = Function::Defined { params: Rc::from(vec!["x".to_string()]),
                                         body:   Rc::from(Vec::new()), };
        let env = Environment::new().with_function("f", first)
                                    .with_function("f", second.clone());

        assert_eq!(env.function("f"), Some(&second));
    }
}
