use logos::Logos;
use tracing::{debug, trace};

use crate::{
    ast::{Token, TokenCategory},
    error::LexError,
};

pub type LexResult<T> = Result<T, LexError>;

/// The lexical classes recognized by the scanner.
///
/// Each rule matches a maximal run of characters from one class, so `40`
/// is one literal and `+-` is one operator run. Characters outside both
/// classes, whitespace included, are errors.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// A run of ASCII digits, such as `40`.
    #[regex(r"[0-9]+")]
    Literal,
    /// A run of `+`, `-`, `*` and `/` characters.
    #[regex(r"[-+*/]+")]
    Operator,
}

impl Lexeme {
    const fn category(self) -> TokenCategory {
        match self {
            Self::Literal => TokenCategory::Literal,
            Self::Operator => TokenCategory::Operator,
        }
    }
}

/// Scans input text into an ordered sequence of tokens.
///
/// The scanner walks the input left to right and emits one token per maximal
/// run of digits (a literal) or operator characters (an operator). Adjacent
/// operator characters are kept together, so `4+-2` yields the operator token
/// `+-`; such a token survives scanning and is rejected later by the
/// evaluator.
///
/// The concatenated token values always reconstruct the input exactly.
///
/// # Errors
/// - `LexError::EmptyInput` if `input` is empty.
/// - `LexError::InvalidCharacter` on the first character that is neither an
///   ASCII digit nor one of `+ - * /`.
///
/// # Examples
/// ```
/// use treecalc::{ast::TokenCategory, error::LexError, scan};
///
/// let tokens = scan("40*4+8").unwrap();
/// let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
/// assert_eq!(values, ["40", "*", "4", "+", "8"]);
/// assert_eq!(tokens[1].category, TokenCategory::Operator);
///
/// assert_eq!(scan("4a"),
///            Err(LexError::InvalidCharacter { character: 'a',
///                                             position:  1, }));
/// ```
pub fn scan(input: &str) -> LexResult<Vec<Token>> {
    if input.is_empty() {
        return Err(LexError::EmptyInput);
    }

    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(input);

    while let Some(lexeme) = lexer.next() {
        let position = lexer.span().start;
        let Ok(lexeme) = lexeme else {
            let character = input[position..].chars()
                                             .next()
                                             .unwrap_or(char::REPLACEMENT_CHARACTER);
            debug!(%character, position, "scan rejected input");
            return Err(LexError::InvalidCharacter { character, position });
        };

        let token = Token { value: lexer.slice().to_string(),
                            category: lexeme.category(),
                            position };
        trace!(value = %token.value, category = %token.category, position, "scanned token");
        tokens.push(token);
    }

    debug!(count = tokens.len(), "scan finished");
    Ok(tokens)
}
