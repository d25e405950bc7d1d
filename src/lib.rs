//! # funcparse
//!
//! funcparse is the expression front end of a function plotter. It turns a
//! single-variable infix expression such as `sin(x)^2 + 1` into a numeric
//! value for a given `x`: the pipeline validates parentheses, tokenizes,
//! converts to reverse Polish notation with the shunting-yard algorithm,
//! and replays the result on a stack machine.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while validating,
/// tokenizing, converting, or evaluating an expression. It standardizes
/// error reporting and carries detailed information about failures,
/// including character positions and the caret diagnostic for unmatched
/// parentheses.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexing, structure,
///   execution).
/// - Attaches character positions and context for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together parenthesis validation, lexing, the postfix
/// converter, the operator/function table, and the stack-machine
/// evaluator. The pipeline is strictly linear; each stage hands a value to
/// the next or aborts the call with its own error.
///
/// # Responsibilities
/// - Coordinates all core components: validator, lexer, converter,
///   evaluator.
/// - Defines the token data model and the operator/function table.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;
/// General utilities for numeric output conversion.
///
/// This module provides the conversion of a finished evaluation into the
/// caller's requested numeric type, with a deliberate rounding rule for
/// integral targets.
///
/// # Responsibilities
/// - Converts the final `f64` into the caller's numeric type.
/// - Takes the ceiling before truncating to an integral type.
pub mod util;

pub use error::{Error, ParseError, RuntimeError};
pub use interpreter::{
    evaluator::Bindings,
    lexer::tokenize,
    parens::validate_parens,
    postfix::{Program, to_postfix},
    token::{Associativity, Function, Operator, OperatorInfo, Token},
};
pub use util::num::NumericOutput;

/// Evaluates an expression under the given variable bindings.
///
/// Runs the full pipeline: parenthesis validation, tokenization,
/// infix-to-postfix conversion, and stack evaluation, converting the final
/// value to the requested output type (integral types round up). The call
/// is a pure function of its two arguments; no state survives between
/// calls, and identical inputs produce bit-identical results.
///
/// To sample one expression many times, parse once with
/// [`Program::parse`] and call [`Program::evaluate`] per sample instead of
/// re-running the front end per point.
///
/// # Errors
/// Returns [`Error::Parse`] when the text is rejected and
/// [`Error::Runtime`] when execution fails (division by zero, or a postfix
/// program whose stack invariant breaks).
///
/// # Examples
/// ```
/// use funcparse::{Bindings, evaluate};
///
/// assert_eq!(evaluate::<f64>("3+4*2", &Bindings::new()).unwrap(), 11.0);
/// assert_eq!(evaluate::<f64>("2^3^2", &Bindings::new()).unwrap(), 512.0);
///
/// let bindings = Bindings::from([('x', 5.0)]);
/// assert_eq!(evaluate::<f64>("x*2", &bindings).unwrap(), 10.0);
///
/// // Division by zero is an error, not an infinity.
/// assert!(evaluate::<f64>("1/0", &Bindings::new()).is_err());
/// ```
pub fn evaluate<T: NumericOutput>(expression: &str, bindings: &Bindings) -> Result<T, Error> {
    let program = Program::parse(expression)?;
    Ok(program.evaluate(bindings)?)
}
