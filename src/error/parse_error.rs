/// Identifies which side of an unmatched parenthesis pair is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingParen {
    /// A `)` was read with no `(` open; the caret sits under the `)`.
    Opening,
    /// A `(` was never closed; the caret sits under the `(`.
    Closing,
}

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while turning expression text into
/// tokens.
pub enum ParseError {
    /// Found a character that belongs to no token class.
    UnexpectedCharacter {
        /// The offending character.
        found:    char,
        /// Character index of the offending character.
        position: usize,
    },
    /// A numeric literal did not parse as a double.
    InvalidNumber {
        /// The literal as written, e.g. `1..2`.
        literal:  String,
        /// Character index where the literal starts.
        position: usize,
    },
    /// A name followed by `(` is not in the function table.
    UnknownFunction {
        /// The name as written.
        name:     String,
        /// Character index where the name starts.
        position: usize,
    },
    /// A name not followed by `(` is longer than one letter.
    ///
    /// Variables are single letters; longer runs are rejected rather than
    /// silently truncated to their first character.
    InvalidVariable {
        /// The name as written.
        name:     String,
        /// Character index where the name starts.
        position: usize,
    },
    /// A parenthesis with no partner.
    ///
    /// The `Display` rendering reproduces the expression with a caret
    /// beneath the offending parenthesis; callers show it verbatim.
    UnmatchedParen {
        /// The full expression text, kept for caret rendering.
        expression: String,
        /// Character index of the unmatched parenthesis.
        position:   usize,
        /// Which partner is absent.
        missing:    MissingParen,
    },
}

impl ParseError {
    /// Character index the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::InvalidNumber { position, .. }
            | Self::UnknownFunction { position, .. }
            | Self::InvalidVariable { position, .. }
            | Self::UnmatchedParen { position, .. } => *position,
        }
    }
}

/// Renders the caret line: `position` spaces, the caret, and the direction
/// text preserved from the original diagnostic.
fn caret_line(position: usize, missing: MissingParen) -> String {
    let mut line = " ".repeat(position);
    line.push('^');
    line.push(' ');
    line.push_str(match missing {
                      MissingParen::Opening => "To match this parenthesis",
                      MissingParen::Closing => "Does not have a closing parenthesis",
                  });
    line
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, position } => {
                write!(f, "Error at position {position}: Unexpected character '{found}'.")
            },

            Self::InvalidNumber { literal, position } => {
                write!(f, "Error at position {position}: '{literal}' is not a valid number.")
            },

            Self::UnknownFunction { name, position } => {
                write!(f, "Error at position {position}: Unknown function '{name}'.")
            },

            Self::InvalidVariable { name, position } => write!(f,
                                                               "Error at position {position}: Invalid variable '{name}'. Variables are single letters and functions take parentheses."),

            Self::UnmatchedParen { expression,
                                   position,
                                   missing, } => write!(f,
                                                        "Invalid Expression. Missing Parenthesis {position}\n {expression}\n {caret}",
                                                        caret = caret_line(*position, *missing)),
        }
    }
}

impl std::error::Error for ParseError {}
