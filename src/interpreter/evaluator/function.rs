/// Call dispatch.
///
/// Resolves the callee, checks the argument count and runs defined or
/// embedded functions.
pub mod core;
/// The `print` function implementation.
///
/// Outputs a value to standard output.
pub mod print;
