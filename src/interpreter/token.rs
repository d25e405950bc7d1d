use crate::error::RuntimeError;

/// Represents a lexical token of a mathematical expression.
/// A token is a minimal but meaningful unit of text produced by the
/// tokenizer. The same type serves both the source-order sequence and the
/// postfix program; every consumer matches it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal, such as `3.14` or `2`.
    Number(f64),
    /// A single-letter variable reference, such as `x`.
    Variable {
        /// Name of the variable.
        name:  char,
        /// Value the variable takes when the caller supplies no binding.
        value: f64,
    },
    /// An operator, parenthesis, or argument separator.
    Operator(Operator),
    /// A call marker for a built-in unary function, such as `sin`.
    Function(Function),
}

/// Operators recognized in expressions.
///
/// Parentheses and the comma are carried as operators so the converter can
/// use them as stack sentinels; they never reach an executable program and
/// are never compared by precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// Binary `-`.
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// Unary `-`, resolved from prefix position during tokenization.
    Neg,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
}

/// Whether equal-precedence operators group left-to-right or right-to-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// Repeated application groups left-to-right, as with `-` and `/`.
    Left,
    /// Repeated application groups right-to-left, as with `^`.
    Right,
}

/// Precedence and associativity of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    /// Binding strength; higher binds tighter.
    pub precedence:    i32,
    /// Grouping direction among operators of equal precedence.
    pub associativity: Associativity,
}

impl Operator {
    /// Returns the operator's precedence and associativity, or `None` for
    /// the structural sentinels (parentheses and comma), which must never
    /// take part in a precedence comparison.
    ///
    /// The table is fixed at compile time and shared by every evaluation:
    /// `^` and unary `-` bind at 4 (right), `*` and `/` at 3 (left), `+`
    /// and binary `-` at 2 (left).
    #[must_use]
    pub const fn info(self) -> Option<OperatorInfo> {
        match self {
            Self::Pow | Self::Neg => Some(OperatorInfo { precedence:    4,
                                                         associativity: Associativity::Right, }),
            Self::Mul | Self::Div => Some(OperatorInfo { precedence:    3,
                                                         associativity: Associativity::Left, }),
            Self::Add | Self::Sub => Some(OperatorInfo { precedence:    2,
                                                         associativity: Associativity::Left, }),
            Self::LParen | Self::RParen | Self::Comma => None,
        }
    }

    /// The character the operator was written as in the source text.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub | Self::Neg => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
            Self::LParen => '(',
            Self::RParen => ')',
            Self::Comma => ',',
        }
    }

    /// Applies a binary operator to its two operands.
    ///
    /// `lhs` is the operand that entered the stack earlier; the ordering is
    /// load-bearing for `-` and `/`.
    ///
    /// # Errors
    /// - [`RuntimeError::DivisionByZero`] for `/` with a zero divisor.
    /// - [`RuntimeError::MalformedProgram`] when the operator has no binary
    ///   semantics (negation, parentheses, comma). A converted program
    ///   never contains parentheses or commas, so reaching that arm means
    ///   the program was not produced by the converter.
    ///
    /// # Example
    /// ```
    /// use funcparse::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(1.0, 4.0).unwrap(), -3.0);
    /// assert!(Operator::Div.apply(1.0, 0.0).is_err());
    /// ```
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, RuntimeError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div => {
                if rhs == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(lhs / rhs)
            },
            Self::Pow => Ok(lhs.powf(rhs)),
            Self::Neg | Self::LParen | Self::RParen | Self::Comma => {
                Err(RuntimeError::MalformedProgram { details:
                                                         format!("operator '{}' is not binary",
                                                                 self.symbol()), })
            },
        }
    }
}

/// Built-in unary functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// `sin(x)`
    Sin,
    /// `cos(x)`
    Cos,
    /// `tan(x)`
    Tan,
    /// `sqrt(x)`
    Sqrt,
    /// `exp(x)`
    Exp,
    /// Natural logarithm, `log(x)`.
    Log,
}

impl Function {
    /// Looks a function up by its source-text name.
    ///
    /// # Example
    /// ```
    /// use funcparse::Function;
    ///
    /// assert_eq!(Function::from_name("sqrt"), Some(Function::Sqrt));
    /// assert_eq!(Function::from_name("sinh"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "sqrt" => Some(Self::Sqrt),
            "exp" => Some(Self::Exp),
            "log" => Some(Self::Log),
            _ => None,
        }
    }

    /// The function's source-text name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Exp => "exp",
            Self::Log => "log",
        }
    }

    /// Applies the function to its single argument.
    #[must_use]
    pub fn apply(self, argument: f64) -> f64 {
        match self {
            Self::Sin => argument.sin(),
            Self::Cos => argument.cos(),
            Self::Tan => argument.tan(),
            Self::Sqrt => argument.sqrt(),
            Self::Exp => argument.exp(),
            Self::Log => argument.ln(),
        }
    }
}
