/// The probability-name table and number words.
///
/// Defines the fixed 101-entry table from `TRUE` down to `FALSE`, the
/// per-use random draw, and the `zero`…`ten` number words. Every lookup
/// is case-insensitive.
pub mod chance;
pub mod core;
/// Expression evaluation.
///
/// Shunting-yard conversion, RPN reduction, atom resolution, and the
/// operator semantics, including `+`'s fallback from addition to
/// concatenation.
pub mod expr;
/// Call dispatch and builtin functions.
pub mod function;
/// The top-level program driver.
///
/// Owns the instruction pointer that `REVERSE` turns around, and applies
/// the synthetic bindings produced by retroactive lifetimes.
pub mod program;
