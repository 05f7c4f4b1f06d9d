#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum EvalError {
    /// An internal node holds something other than `+`, `-`, `*` or `/`.
    UnknownOperator {
        /// The value found in the operator position.
        operator: String,
        /// Byte offset of the operator in the input.
        position: usize,
    },
    /// A leaf does not hold a numeric literal.
    NotANumber {
        /// The value found in the leaf.
        value:    String,
        /// Byte offset of the leaf in the input.
        position: usize,
    },
    /// A literal does not fit into a 64-bit signed integer.
    LiteralTooLarge {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the literal in the input.
        position: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// Byte offset of the operator in the input.
        position: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the operator in the input.
        position: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOperator { operator, position } => {
                write!(f, "Evaluation error at offset {position}: Unknown operator '{operator}'.")
            },
            Self::NotANumber { value, position } => {
                write!(f, "Evaluation error at offset {position}: '{value}' is not a number.")
            },
            Self::LiteralTooLarge { literal, position } => write!(f,
                                                                  "Evaluation error at offset {position}: Literal {literal} is too large."),
            Self::Overflow { position } => write!(f,
                                                  "Evaluation error at offset {position}: Integer overflow while trying to compute result."),
            Self::DivisionByZero { position } => {
                write!(f, "Evaluation error at offset {position}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
