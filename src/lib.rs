//! # sprig
//!
//! sprig is a small dynamically-typed scripting language written in Rust.
//! It tokenizes, parses and evaluates programs with integers, booleans,
//! strings, `null`, variables, conditionals, loops and recursive functions,
//! under a persistent environment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

pub use crate::error::Error;
use crate::interpreter::{
    environment::Environment,
    evaluator::evaluate,
    lexer::{check_tokens, tokenize},
    parser::parse,
    value::core::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator. Its `Display`
/// implementations print source that parses back to the same tree.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Defines error types for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers to messages where they are known.
/// - Unifies them in [`Error`] for callers running the whole pipeline.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, environments and
/// value representations.
pub mod interpreter;
/// General numeric helpers.
///
/// Checked integer arithmetic and the float to integer conversion used at the
/// embedded function boundary.
pub mod util;

/// Runs a whole program: tokenizes, checks, parses and evaluates `source`
/// under `env`.
///
/// On success returns the value of the last statement and the environment to
/// continue with. On failure `env` is untouched and stays the one to use.
///
/// # Errors
/// Returns [`Error::Lex`] for unknown input, [`Error::Syntax`] when the tokens
/// are not a program and [`Error::Eval`] when evaluation fails.
///
/// # Examples
/// ```
/// use sprig::{interpreter::{environment::Environment, value::core::Value}, run};
///
/// let env = Environment::with_prelude();
/// let (value, env) = run("def twice(n) { n * 2; } x = twice(21);", &env).unwrap();
/// assert_eq!(value, Value::Null);
///
/// let (value, _) = run("x;", &env).unwrap();
/// assert_eq!(value, Value::Int(42));
///
/// // Errors leave the environment alone.
/// assert!(run("x = x + true;", &env).is_err());
/// ```
pub fn run(source: &str, env: &Environment) -> Result<(Value, Environment), Error> {
    let tokens = tokenize(source);
    check_tokens(&tokens)?;

    let program = parse(&tokens)?;
    debug!(statements = program.statements.len(), "parsed program");

    Ok(evaluate(&program, env)?)
}
