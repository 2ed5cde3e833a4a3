#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to evaluate an empty expression.
    EmptyExpression,
    /// A fully saturated definition received more arguments than it and its
    /// body's result could consume.
    TooManyArguments {
        /// The name of the function.
        name: String,
    },
    /// A builtin received an argument of the wrong kind.
    InvalidArgument {
        /// The name of the builtin.
        name: String,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The name of the builtin.
        name: String,
    },
    /// An integer was too large to be represented safely as a real.
    LiteralTooLarge,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Error: Expression is empty."),
            Self::TooManyArguments { name } => {
                write!(f, "Error: Too many arguments for '{name}'.")
            },
            Self::InvalidArgument { name } => {
                write!(f, "Error: Invalid argument for '{name}'.")
            },
            Self::TypeError { details } => write!(f, "Error: Type error: {details}."),
            Self::Overflow { name } => write!(f,
                                              "Error: Integer overflow while trying to compute '{name}'."),
            Self::LiteralTooLarge => write!(f, "Error: Literal is too large."),
        }
    }
}

impl std::error::Error for RuntimeError {}
