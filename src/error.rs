/// Parsing errors.
///
/// Defines all error types that can occur while reading source lines into
/// statements: malformed statement heads, unterminated string literals,
/// blocks that run past the end of the input, and bad lifetime markers.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during execution. Runtime
/// errors include disabled tokens, type mismatches, division by zero,
/// unknown functions, and malformed expressions discovered at evaluation
/// time.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
