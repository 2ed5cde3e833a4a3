#[derive(Debug)]
/// Represents all errors that can occur while reading a statement line.
pub enum ParseError {
    /// A line contained more than one `=`.
    MultipleEquals {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A declaration had no function name before the `=`.
    InvalidDeclaration {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An action line contained more than one `:`.
    MalformedAction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The action keyword is not in the recognized set.
    UnknownAction {
        /// The action keyword encountered.
        action: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MultipleEquals { line } => write!(f,
                                                    "Error on line {line}: Expected 'name pattern1 .. patternN = body', found more than one '='."),

            Self::InvalidDeclaration { line } => write!(f,
                                                        "Error on line {line}: Invalid declaration syntax. Example: double n = mult n 2"),

            Self::MalformedAction { line } => {
                write!(f, "Error on line {line}: Expected 'action: data'.")
            },

            Self::UnknownAction { action, line } => {
                write!(f, "Error on line {line}: Unknown action '{action}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
