use crate::error::{MissingParen, ParseError};

/// Checks that every parenthesis in `expression` has a partner.
///
/// Scans left to right keeping a stack of opening-parenthesis indices. A
/// closing parenthesis that finds the stack empty fails immediately at its
/// own index; an opening parenthesis still on the stack after the scan
/// fails at the index where it was opened. The returned error owns the
/// expression text so the caret diagnostic can be rendered beneath it.
///
/// The pipeline entry points run this before tokenization, so malformed
/// input never reaches the converter.
///
/// # Errors
/// [`ParseError::UnmatchedParen`] with the offending character index and
/// the direction of the missing partner.
///
/// # Example
/// ```
/// use funcparse::{error::{MissingParen, ParseError}, validate_parens};
///
/// assert!(validate_parens("(1+2)*3").is_ok());
///
/// let err = validate_parens("(1+2").unwrap_err();
/// assert!(matches!(err,
///                  ParseError::UnmatchedParen { position: 0,
///                                               missing: MissingParen::Closing,
///                                               .. }));
/// ```
pub fn validate_parens(expression: &str) -> Result<(), ParseError> {
    let mut open_indices = Vec::new();

    for (index, c) in expression.chars().enumerate() {
        match c {
            '(' => open_indices.push(index),
            ')' => {
                if open_indices.pop().is_none() {
                    return Err(ParseError::UnmatchedParen { expression: expression.to_string(),
                                                            position:   index,
                                                            missing:    MissingParen::Opening, });
                }
            },
            _ => {},
        }
    }

    if let Some(index) = open_indices.pop() {
        return Err(ParseError::UnmatchedParen { expression: expression.to_string(),
                                                position:   index,
                                                missing:    MissingParen::Closing, });
    }

    Ok(())
}
