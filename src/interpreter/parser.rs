/// Program and block parsing.
///
/// The parser is line-oriented: each meaningful line becomes one
/// statement, and block statements pull further lines from the shared
/// cursor until their `END`. Blank lines and `#` comments are skipped
/// everywhere.
pub mod core;
/// Per-line statement recognition.
///
/// Holds the ordered rules that turn one trimmed line into a
/// [`Statement`](crate::ast::Statement), including the two assignment
/// shapes, lifetime markers, conditions, and the function-keyword
/// subsequence rule.
pub mod statement;
/// Low-level text splitting shared by the statement rules.
///
/// Statement heads use a different tokenization than expressions
/// (`"…" | '…' | <non-whitespace-run>`); these helpers implement it with
/// byte offsets so callers can slice the original line.
pub mod utils;
