#[derive(Debug)]
/// Represents all errors that can occur while reading source into statements.
pub enum ParseError {
    /// No statement rule matched the first token of a line.
    BadStatement {
        /// The head token that was not recognized.
        head: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A block statement's body ran past the end of the input with no `END`.
    MissingEnd {
        /// The source line where the block started.
        line: usize,
    },
    /// The lifetime marker of an assignment was malformed.
    BadLifetime {
        /// The marker text that failed to parse.
        marker: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A string literal's opening quote run was never closed.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadStatement { head, line } => {
                write!(f, "Error on line {line}: No statement starts with '{head}'.")
            },
            Self::MissingEnd { line } => {
                write!(f, "Error on line {line}: Block was never closed with END.")
            },
            Self::BadLifetime { marker, line } => {
                write!(f, "Error on line {line}: Invalid lifetime marker '{marker}'.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: String literal is never terminated.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
