/// The evaluator module executes statements and computes expression
/// results.
///
/// The evaluator owns the runtime state, resolves atoms against it,
/// reduces RPN expressions, drives statement bodies, and runs the
/// top-level program with its reversible instruction pointer. It is the
/// core execution engine of the interpreter.
///
/// # Responsibilities
/// - Executes every statement variant, with the disabled-keyword check
///   and the per-statement lifetime sweep.
/// - Evaluates expressions, including probabilistic booleans and the
///   bare-word fallback.
/// - Dispatches calls to builtins, user functions, and foreign libraries.
pub mod evaluator;
/// Abstract foreign-function interface.
///
/// `IMPORT` opens a library through a pluggable loader; call dispatch
/// falls through to the opened handles after builtins and user functions.
/// The actual binding of names to native code is a host concern and stays
/// behind the traits defined here.
pub mod ffi;
/// The lexer module tokenizes expression substrings.
///
/// The expression tokenizer reads a substring (never a whole program) and
/// produces operator, parenthesis, string-literal and atom tokens. It is
/// context-free: it never consults interpreter state, so the same text
/// always tokenizes the same way.
///
/// # Responsibilities
/// - Splits on whitespace with the five operators and parentheses as
///   single-character tokens.
/// - Matches string literals delimited by runs of identical quotes.
/// - Reports unterminated string literals.
pub mod lexer;
/// The parser module builds statement lists from source lines.
///
/// The parser processes the source one line at a time, recognizing the
/// statement shapes and collecting block bodies up to their `END`
/// terminator. Expressions inside statements are tokenized immediately
/// but stay unevaluated until execution.
///
/// # Responsibilities
/// - Skips blank and `#` comment lines.
/// - Recognizes both assignment shapes, the fixed keywords, inline
///   calls, and function-keyword spellings.
/// - Reports statements that match no rule and blocks that never end.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during execution: numbers,
/// text, and booleans. It provides stringification and the three-way
/// comparison used by conditions.
pub mod value;
