/// Numeric conversion helpers.
///
/// This module provides safe functions for converting the interpreter's
/// floating-point numbers to the integer shapes the host expects, without
/// undefined behavior on extreme values. Use these helpers instead of
/// bare `as` casts.
pub mod num;
