/// Binary operator evaluation logic.
///
/// Handles integer arithmetic, string concatenation and comparisons.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the `Evaluate` trait, the rules for sources, blocks, statements
/// and expressions, and the environment threading between them.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides helpers shared by evaluation logic, such as native stack growth
/// and error construction.
pub mod utils;

/// Function evaluation.
///
/// Handles calls to defined and embedded functions, argument checking, and
/// the functions every default environment provides.
pub mod function;

pub use self::core::{EvalResult, Evaluate, evaluate};
