/// Converts a numeric script result to a process exit code.
///
/// The value is truncated toward zero and saturated to the `i32` range;
/// `NaN` maps to `0`. This is the documented behavior of `as` casts, made
/// explicit here so call sites do not need their own lint exceptions.
///
/// # Example
/// ```
/// use lumina::util::num::f64_to_exit_code;
///
/// assert_eq!(f64_to_exit_code(3.0), 3);
/// assert_eq!(f64_to_exit_code(2.9), 2);
/// assert_eq!(f64_to_exit_code(f64::NAN), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_exit_code(value: f64) -> i32 {
    value as i32
}
