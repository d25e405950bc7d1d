#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while executing a postfix program.
pub enum RuntimeError {
    /// Attempted division by zero.
    ///
    /// Reported as an error instead of producing an infinity, so a plotted
    /// curve shows a gap rather than a spike.
    DivisionByZero,
    /// The postfix stack invariant was violated: an operator found too few
    /// operands, or the replay did not end with exactly one value.
    ///
    /// For input that passed validation this indicates a bug in the
    /// converter, not a mistake in the expression.
    MalformedProgram {
        /// What the stack machine observed.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::MalformedProgram { details } => {
                write!(f, "Malformed postfix program: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
