#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning input text.
pub enum LexError {
    /// The input contained no characters.
    EmptyInput,
    /// The cursor sits on a character that is neither a digit nor one of
    /// `+ - * /`.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Scan error: Input is empty."),
            Self::InvalidCharacter { character, position } => {
                write!(f, "Scan error at offset {position}: Invalid character '{character}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
