use log::trace;

use crate::{
    error::{Error, RuntimeError},
    interpreter::{
        lexer, parens,
        token::{Associativity, Operator, Token},
    },
};

/// A token sequence in reverse Polish notation, ready for the stack
/// machine.
///
/// For a fixed expression the program can be built once with
/// [`Program::parse`] and evaluated many times under different bindings;
/// that is how a plotted curve is sampled without re-running the front end
/// per point. Evaluation never mutates the program, so a parsed program can
/// be shared freely.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    tokens: Vec<Token>,
}

impl Program {
    /// Runs the front half of the pipeline: parenthesis validation,
    /// tokenization, and conversion to postfix.
    ///
    /// # Errors
    /// Any [`ParseError`](crate::error::ParseError) from validation or
    /// tokenization, or a [`RuntimeError::MalformedProgram`] from
    /// conversion.
    ///
    /// # Example
    /// ```
    /// use funcparse::{Bindings, Program};
    ///
    /// let program = Program::parse("x^2+1").unwrap();
    /// let y: f64 = program.evaluate(&Bindings::from([('x', 3.0)])).unwrap();
    /// assert_eq!(y, 10.0);
    /// ```
    pub fn parse(expression: &str) -> Result<Self, Error> {
        parens::validate_parens(expression)?;
        let tokens = lexer::tokenize(expression)?;
        Ok(to_postfix(tokens)?)
    }

    /// The program's tokens in RPN order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

/// Converts tokens in source order into a postfix [`Program`] with the
/// shunting-yard algorithm.
///
/// Numbers and variables go straight to the output. A binary operator
/// first pops every stacked operator that outranks it (strictly higher
/// precedence, or equal precedence when the incoming operator is
/// left-associative). Parentheses are stack sentinels and are discarded as
/// a pair; when the pair closes, a function marker left on top is popped
/// immediately so it stays glued to its argument. Function markers and
/// unary negation push without any precedence comparison.
///
/// # Errors
/// [`RuntimeError::MalformedProgram`] when parentheses do not pair up.
/// Input that passed [`validate_parens`](crate::validate_parens) cannot
/// trigger this.
///
/// # Example
/// ```
/// use funcparse::{Operator, Token, to_postfix, tokenize};
///
/// let program = to_postfix(tokenize("1+2*3").unwrap()).unwrap();
/// assert_eq!(program.tokens(),
///            &[Token::Number(1.0),
///              Token::Number(2.0),
///              Token::Number(3.0),
///              Token::Operator(Operator::Mul),
///              Token::Operator(Operator::Add)]);
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> Result<Program, RuntimeError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) | Token::Variable { .. } => output.push(token),

            Token::Function(_) | Token::Operator(Operator::Neg | Operator::LParen) => {
                stack.push(token);
            },

            Token::Operator(Operator::RParen) => {
                loop {
                    match stack.pop() {
                        Some(Token::Operator(Operator::LParen)) => break,
                        Some(top) => {
                            trace!("pop to output: {top:?}");
                            output.push(top);
                        },
                        None => {
                            return Err(RuntimeError::MalformedProgram { details:
                                           "')' without a matching '(' survived validation".to_string(), });
                        },
                    }
                }

                if let Some(Token::Function(function)) = stack.last() {
                    output.push(Token::Function(*function));
                    stack.pop();
                }
            },

            Token::Operator(Operator::Comma) => {
                while let Some(top) = stack.last() {
                    if matches!(top, Token::Operator(Operator::LParen)) {
                        break;
                    }
                    output.push(*top);
                    stack.pop();
                }
            },

            Token::Operator(incoming) => {
                while let Some(top) = stack.last() {
                    let Token::Operator(stacked) = top else { break };
                    if !pops_before(*stacked, incoming) {
                        break;
                    }
                    trace!("pop to output: {top:?}");
                    output.push(*top);
                    stack.pop();
                }
                stack.push(token);
            },
        }
    }

    while let Some(top) = stack.pop() {
        if matches!(top, Token::Operator(Operator::LParen)) {
            return Err(RuntimeError::MalformedProgram { details:
                           "'(' without a matching ')' survived validation".to_string(), });
        }
        output.push(top);
    }

    Ok(Program { tokens: output })
}

/// Whether the stacked operator leaves the stack before `incoming` is
/// pushed. Structural sentinels have no precedence and never pop.
fn pops_before(stacked: Operator, incoming: Operator) -> bool {
    let (Some(stacked_info), Some(incoming_info)) = (stacked.info(), incoming.info()) else {
        return false;
    };

    stacked_info.precedence > incoming_info.precedence
    || (stacked_info.precedence == incoming_info.precedence
        && incoming_info.associativity == Associativity::Left)
}
