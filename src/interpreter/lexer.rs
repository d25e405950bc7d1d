use log::trace;
use logos::{Logos, Span};

use crate::{
    error::ParseError,
    interpreter::token::{Function, Operator, Token},
};

/// Raw lexeme classes produced by the generated lexer.
///
/// This layer only slices the input. Numbers stay unparsed and names stay
/// unclassified until [`tokenize`] resolves them with one lexeme of
/// lookahead; that keeps every error position anchored to the source text.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    /// A run of digits and dots, such as `3.14`. Parsed (and possibly
    /// rejected) during resolution.
    #[regex(r"[0-9.]+")]
    Number,
    /// A run of letters; a function name or a variable.
    #[regex(r"[a-zA-Z]+")]
    Name,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Converts expression text into tokens in source order.
///
/// Numeric literals become [`Token::Number`]. A letter run immediately
/// followed by `(` is a function call and must name a table function;
/// any other letter run must be a single-letter [`Token::Variable`]
/// (bound to `0.0` until evaluation). A `-` in prefix position (start of
/// input, after `(`, after `,`, after another operator) becomes unary
/// negation instead of subtraction.
///
/// Parenthesis balance is not checked here; the pipeline entry points run
/// [`validate_parens`](crate::validate_parens) first.
///
/// # Errors
/// - [`ParseError::UnexpectedCharacter`] for characters outside the
///   grammar.
/// - [`ParseError::InvalidNumber`] for literals such as `1..2`.
/// - [`ParseError::UnknownFunction`] for a name called with parentheses
///   that is not in the function table.
/// - [`ParseError::InvalidVariable`] for a multi-letter name without
///   parentheses.
///
/// # Example
/// ```
/// use funcparse::{Function, Operator, Token, tokenize};
///
/// let tokens = tokenize("sin(x)+1").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Function(Function::Sin),
///                 Token::Operator(Operator::LParen),
///                 Token::Variable { name: 'x', value: 0.0 },
///                 Token::Operator(Operator::RParen),
///                 Token::Operator(Operator::Add),
///                 Token::Number(1.0)]);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, ParseError> {
    let mut lexer = RawToken::lexer(expression);
    let mut raw: Vec<(RawToken, Span)> = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => raw.push((token, lexer.span())),
            Err(()) => {
                let found = lexer.slice().chars().next().unwrap_or('\0');
                return Err(ParseError::UnexpectedCharacter { found,
                                                             position: lexer.span().start, });
            },
        }
    }

    let mut tokens = Vec::with_capacity(raw.len());

    for (index, (token, span)) in raw.iter().enumerate() {
        let slice = &expression[span.clone()];
        let resolved = match token {
            RawToken::Number => {
                let value =
                    slice.parse::<f64>()
                         .map_err(|_| ParseError::InvalidNumber { literal:  slice.to_string(),
                                                                  position: span.start, })?;
                Token::Number(value)
            },
            RawToken::Name => resolve_name(slice, span.start, is_call(&raw, index))?,
            RawToken::Minus => {
                if minus_is_unary(tokens.last()) {
                    Token::Operator(Operator::Neg)
                } else {
                    Token::Operator(Operator::Sub)
                }
            },
            RawToken::Plus => Token::Operator(Operator::Add),
            RawToken::Star => Token::Operator(Operator::Mul),
            RawToken::Slash => Token::Operator(Operator::Div),
            RawToken::Caret => Token::Operator(Operator::Pow),
            RawToken::LParen => Token::Operator(Operator::LParen),
            RawToken::RParen => Token::Operator(Operator::RParen),
            RawToken::Comma => Token::Operator(Operator::Comma),
            RawToken::Ignored => continue,
        };

        trace!("token pushed: {resolved:?}");
        tokens.push(resolved);
    }

    Ok(tokens)
}

/// A name is a function call only when a `(` follows it with nothing in
/// between, not even whitespace; `sin (x)` is a variable position.
fn is_call(raw: &[(RawToken, Span)], index: usize) -> bool {
    match (raw.get(index), raw.get(index + 1)) {
        (Some((_, name_span)), Some((RawToken::LParen, paren_span))) => {
            paren_span.start == name_span.end
        },
        _ => false,
    }
}

/// Classifies a letter run as a function marker or a variable.
fn resolve_name(name: &str, position: usize, is_call: bool) -> Result<Token, ParseError> {
    if is_call {
        return Function::from_name(name).map(Token::Function)
                                        .ok_or_else(|| ParseError::UnknownFunction { name:
                                                                                         name.to_string(),
                                                                                     position });
    }

    let mut letters = name.chars();
    match (letters.next(), letters.next()) {
        (Some(letter), None) => Ok(Token::Variable { name:  letter,
                                                     value: 0.0, }),
        _ => Err(ParseError::InvalidVariable { name: name.to_string(),
                                               position }),
    }
}

/// A `-` denotes negation wherever no completed operand precedes it: at the
/// start of the input, after `(` or `,`, and after any other operator.
fn minus_is_unary(previous: Option<&Token>) -> bool {
    match previous {
        None => true,
        Some(Token::Operator(operator)) => !matches!(operator, Operator::RParen),
        Some(_) => false,
    }
}
