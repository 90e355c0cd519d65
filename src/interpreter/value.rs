/// Runtime values.
///
/// Defines the `Value` enum produced by evaluation, its truthiness rule and
/// the kind names used in error messages.
pub mod core;
/// The native side of embedded function calls.
///
/// Defines `Native`, the plain host representation that embedded functions
/// receive and return, and the closed mapping between it and `Value`.
pub mod native;
