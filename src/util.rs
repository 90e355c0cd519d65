/// Numeric helpers.
///
/// Checked integer arithmetic for the evaluator and the lossy-but-defined
/// float to integer conversion used at the embedded function boundary.
pub mod num;
/// Native stack growth for the recursive parser and evaluator.
pub mod stack;
