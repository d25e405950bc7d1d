/// The evaluator module executes postfix programs and computes results.
///
/// The evaluator replays a postfix program over an operand stack, resolves
/// variables against the caller's bindings, applies operator and function
/// semantics, and converts the final value to the requested numeric type.
/// It is the execution engine of the pipeline.
///
/// # Responsibilities
/// - Replays postfix tokens over an operand stack.
/// - Resolves variable bindings, defaulting absent names to `0.0`.
/// - Reports runtime errors such as division by zero or a broken stack
///   invariant.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw expression and produces a stream of tokens:
/// numbers, variables, operators, parentheses, and function markers. It
/// also resolves which `-` signs denote negation. This is the first stage
/// of the pipeline after parenthesis validation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with positions.
/// - Classifies letter runs as function calls or single-letter variables.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parens module validates parenthesis balance up front.
///
/// Runs before tokenization so unbalanced input never reaches the
/// converter, and produces the caret diagnostic that points at the exact
/// unmatched parenthesis.
///
/// # Responsibilities
/// - Checks that every parenthesis has a partner.
/// - Reports the offending character index and the missing direction.
pub mod parens;
/// The postfix module converts token sequences to reverse Polish notation.
///
/// Implements the shunting-yard algorithm over the operator table and
/// defines [`Program`](postfix::Program), the executable postfix token
/// sequence.
///
/// # Responsibilities
/// - Re-orders tokens by precedence and associativity.
/// - Keeps function markers glued to their parenthesized argument.
/// - Guarantees no parenthesis ever reaches an executable program.
pub mod postfix;
/// The token module defines tokens and the operator/function table.
///
/// Declares the token sum type and the fixed, process-wide tables:
/// precedence and associativity per operator, binary semantics per
/// operator, and unary semantics per function name. The tables are plain
/// `match` data, immutable and shareable across threads.
///
/// # Responsibilities
/// - Defines `Token`, `Operator`, `Function`, and `OperatorInfo`.
/// - Maps operators to precedence, associativity, and semantics.
/// - Maps function names to their unary semantics.
pub mod token;
