use crate::interpreter::value::native::Native;

/// Prints its argument to standard output and returns `null`.
///
/// Text is printed without quotes. The evaluator checks the argument count
/// before the call, so `args` holds exactly one value.
///
/// # Example
/// ```
/// use sprig::interpreter::{evaluator::function::print::print, value::native::Native};
///
/// // The function prints the value to stdout, but the doctest
/// // only checks the returned result.
/// assert_eq!(print(&[Native::Int(42)]), Native::Null);
/// ```
#[must_use]
pub fn print(args: &[Native]) -> Native {
    if let [value] = args {
        println!("{value}");
    }
    Native::Null
}
