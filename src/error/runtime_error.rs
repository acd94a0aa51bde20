#[derive(Debug)]
/// Represents all errors that can occur during execution.
pub enum RuntimeError {
    /// Tried to read, evaluate, or invoke a token that was deleted earlier
    /// in the run.
    DisabledToken {
        /// The disabled token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A name was required to resolve to a binding, but never did.
    UndefinedName {
        /// The name that failed to resolve.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called an unknown function.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression's parentheses did not balance.
    MismatchedParens {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression did not reduce to a single value.
    BadExpression {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `PREVIOUS` was used on a name with no recorded history.
    NoPrevious {
        /// The name whose history was empty.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The result of a foreign call could not be represented.
    ForeignCallFailed {
        /// Details reported by the foreign library.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DisabledToken { token, line } => {
                write!(f, "Error on line {line}: Token '{token}' has been deleted.")
            },
            Self::UndefinedName { name, line } => {
                write!(f, "Error on line {line}: Name '{name}' is not defined.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::MismatchedParens { line } => {
                write!(f, "Error on line {line}: Mismatched parentheses.")
            },
            Self::BadExpression { line } => {
                write!(f, "Error on line {line}: Expression does not reduce to a value.")
            },
            Self::NoPrevious { name, line } => {
                write!(f, "Error on line {line}: '{name}' has no previous value.")
            },
            Self::ForeignCallFailed { details, line } => {
                write!(f, "Error on line {line}: Foreign call failed: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
