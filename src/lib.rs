//! # lumina
//!
//! Lumina is a small, deliberately chaotic scripting language executed by
//! a tree-walking interpreter. Any Unicode token can name a variable or
//! function, quotes on strings are optional, number words are literals,
//! and booleans range over a randomized probability scale. On top of that
//! the language lets programs delete their own tokens, run backwards, and
//! give variables lifetimes measured in executed lines or seconds.

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
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::{core::Context, program::Program},
    parser::core::parse_program,
    value::core::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` enum and related types that
/// represent source lines in executable form. Statements are built by the
/// parser and driven by the evaluator; expressions inside them stay as
/// token lists until each execution, because the language can change
/// under a running program.
///
/// # Responsibilities
/// - Defines statement, expression, lifetime, and condition types.
/// - Attaches source line numbers for error reporting.
/// - Exposes each statement's introducing keyword for the disabled-token
///   check.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while reading or
/// running code. It standardizes error reporting and carries line numbers
/// for debugging and user feedback. There is no recovery: any raised
/// error terminates the program with a single diagnostic.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the expression tokenizer, the line-oriented
/// parser, the evaluator with its reversible top-level driver, value
/// representations, the foreign-function seam, and error handling, to
/// provide a complete runtime for Lumina programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Provides entry points for parsing and executing programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Runs a program against an existing context.
///
/// The source is parsed completely first — `REVERSE` can walk back over
/// earlier statements, so execution needs the whole top-level list — and
/// then driven from the context's current state. The context keeps its
/// frames, functions, and disabled tokens afterwards, which is how tests
/// and embedders observe the run.
///
/// # Errors
/// Returns the first parse or runtime error; nothing executes after it.
pub fn run_with_context(source: &str,
                        context: &mut Context)
                        -> Result<(), Box<dyn std::error::Error>> {
    let statements = parse_program(source)?;
    Program::new(statements).run(context)?;

    Ok(())
}

/// Executes a program and returns its final result value.
///
/// This is the main entry point. A fresh context is created, the program
/// runs to completion, and the value of the most recent call or `RETURN`
/// comes back; a host can turn a numeric result into its exit code.
///
/// # Errors
/// Returns an error if parsing or execution fails.
///
/// # Examples
/// ```
/// use lumina::{get_result, interpreter::value::core::Value};
///
/// let result = get_result("RETURN 4 + 3").unwrap();
/// assert_eq!(result, Value::Number(7.0));
///
/// // Deleting a token makes later uses fail.
/// assert!(get_result("DELETE +\nRETURN 1 + 2").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let mut context = Context::new();
    run_with_context(source, &mut context)?;

    Ok(context.last_return.clone())
}
