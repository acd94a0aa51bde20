use std::io::Write;

use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    value::core::Value,
};

/// Writes each argument on its own line and returns `0`.
///
/// This is the language's entire output surface. Values are formatted with
/// their `Display` implementation, so booleans come out lowercase and
/// integral numbers come out without a fraction.
///
/// # Parameters
/// - `context`: The evaluation context owning the output writer.
/// - `args`: The evaluated arguments, zero or more.
///
/// # Returns
/// `Value::Number(0.0)`.
#[allow(clippy::unnecessary_wraps)]
pub fn print_line(context: &mut Context, args: &[Value], _line: usize) -> EvalResult<Value> {
    for arg in args {
        let _ = writeln!(context.output, "{arg}");
    }

    Ok(Value::Number(0.0))
}
