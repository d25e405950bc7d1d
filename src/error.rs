/// Parsing errors.
///
/// Defines all error types that can occur while turning expression text
/// into tokens: unexpected characters, malformed numeric literals, unknown
/// function names, over-long variable names, and unmatched parentheses.
/// Every variant carries the character index it points at so a caret can be
/// rendered beneath the offending position.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing a postfix
/// program: division by zero and violations of the postfix stack invariant.
pub mod runtime_error;

pub use parse_error::{MissingParen, ParseError};
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq)]
/// Any failure the evaluation pipeline can produce.
///
/// The pipeline is strictly linear (validate, tokenize, convert, execute)
/// and the first failing stage aborts the call. This type is what the
/// whole-pipeline entry points return; the stage functions themselves
/// return their own error type.
pub enum Error {
    /// The expression text was rejected before execution.
    Parse(ParseError),
    /// The postfix program failed during execution.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "{error}"),
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::Runtime(error) => Some(error),
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
