#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building an expression tree.
pub enum ParseError {
    /// A leaf was required but the token range was empty, e.g. on either side
    /// of an operator at the edge of the input.
    UnexpectedEndOfInput {
        /// Index in the token sequence at which the operand was expected.
        index: usize,
    },
    /// The expression nests deeper than the builder allows.
    TooManyOperators {
        /// Number of operator tokens in the sequence.
        count: usize,
        /// The largest accepted number of operator tokens.
        max:   usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEndOfInput { index } => {
                write!(f, "Parse error at token {index}: Unexpected end of expression.")
            },
            Self::TooManyOperators { count, max } => write!(f,
                                                            "Parse error: {count} operators is too many, at most {max} are allowed."),
        }
    }
}

impl std::error::Error for ParseError {}
