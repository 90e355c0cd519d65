/// Dispatch and arithmetic.
///
/// Routes each operator to its handler and implements `+ - * /` on integers
/// as well as string concatenation.
pub mod core;
/// Equality and ordering comparisons.
pub mod comparison;
