use std::collections::HashMap;

use log::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        postfix::Program,
        token::{Operator, Token},
    },
    util::num::NumericOutput,
};

/// Result type used by the stack machine.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Per-evaluation values for the variables of an expression.
///
/// Names are single characters. A name that was never bound evaluates to
/// `0.0` rather than erroring, so a curve over an unbound symbol is a flat
/// line, not a failure.
///
/// # Example
/// ```
/// use funcparse::{Bindings, evaluate};
///
/// let mut bindings = Bindings::new();
/// bindings.set('x', 5.0);
/// assert_eq!(evaluate::<f64>("x*2", &bindings).unwrap(), 10.0);
/// assert_eq!(evaluate::<f64>("x*2", &Bindings::new()).unwrap(), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    values: HashMap<char, f64>,
}

impl Bindings {
    /// Creates an empty binding set; every variable reads as `0.0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: char, value: f64) {
        self.values.insert(name, value);
    }

    /// The bound value, if `name` was bound.
    #[must_use]
    pub fn get(&self, name: char) -> Option<f64> {
        self.values.get(&name).copied()
    }
}

impl<const N: usize> From<[(char, f64); N]> for Bindings {
    fn from(pairs: [(char, f64); N]) -> Self {
        Self { values: HashMap::from(pairs) }
    }
}

impl FromIterator<(char, f64)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (char, f64)>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

impl Program {
    /// Executes the program against `bindings` and converts the result to
    /// the requested output type.
    ///
    /// Replays the postfix tokens over an operand stack: values push,
    /// functions and negation pop one operand, binary operators pop two.
    /// The operand popped first is the right-hand side; the one popped
    /// second is the left-hand side, which preserves left-to-right source
    /// order for `-` and `/`. Variables read the caller's binding for
    /// their name and fall back to the token's default of `0.0`.
    ///
    /// The program is not mutated; one parsed program can be evaluated
    /// under any number of bindings, concurrently if desired.
    ///
    /// # Errors
    /// - [`RuntimeError::DivisionByZero`] when `/` meets a zero divisor.
    /// - [`RuntimeError::MalformedProgram`] when the operand stack
    ///   underflows or does not end with exactly one value.
    ///
    /// # Example
    /// ```
    /// use funcparse::{Bindings, Program};
    ///
    /// let program = Program::parse("sin(x)").unwrap();
    /// let samples: Vec<f64> =
    ///     (0..4).map(|i| program.evaluate(&Bindings::from([('x', f64::from(i))])).unwrap())
    ///           .collect();
    /// assert_eq!(samples[0], 0.0);
    /// ```
    pub fn evaluate<T: NumericOutput>(&self, bindings: &Bindings) -> EvalResult<T> {
        let mut operands: Vec<f64> = Vec::with_capacity(self.tokens().len());

        for token in self.tokens() {
            match *token {
                Token::Number(value) => operands.push(value),

                Token::Variable { name, value } => {
                    operands.push(bindings.get(name).unwrap_or(value));
                },

                Token::Function(function) => {
                    let argument = pop_operand(&mut operands, function.name())?;
                    operands.push(function.apply(argument));
                },

                Token::Operator(Operator::Neg) => {
                    let argument = pop_operand(&mut operands, "negation")?;
                    operands.push(-argument);
                },

                Token::Operator(operator) => {
                    let upper = pop_operand(&mut operands, operator.symbol())?;
                    let lower = pop_operand(&mut operands, operator.symbol())?;
                    trace!("applying '{}' to {lower} and {upper}", operator.symbol());
                    operands.push(operator.apply(lower, upper)?);
                },
            }
        }

        let result =
            operands.pop()
                    .ok_or_else(|| RuntimeError::MalformedProgram { details:
                                       "program left no result on the stack".to_string(), })?;

        if !operands.is_empty() {
            return Err(RuntimeError::MalformedProgram { details:
                           format!("{} operands left beside the result", operands.len()), });
        }

        Ok(T::from_f64(result))
    }
}

/// Pops one operand for `consumer`, turning underflow into a typed error.
fn pop_operand(operands: &mut Vec<f64>, consumer: impl std::fmt::Display) -> EvalResult<f64> {
    operands.pop()
            .ok_or_else(|| RuntimeError::MalformedProgram { details:
                            format!("operand stack exhausted while applying {consumer}"), })
}
