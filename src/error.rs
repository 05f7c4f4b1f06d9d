/// Scanning errors.
///
/// Raised while turning raw input text into tokens, when the scanner meets a
/// character that starts no token or when there is nothing to scan at all.
pub mod lex_error;
/// Building errors.
///
/// Raised while turning a token sequence into an expression tree.
pub mod parse_error;
/// Evaluation errors.
///
/// Raised while reducing an expression tree to a number: unknown operators,
/// non-numeric leaves, literals that do not fit, overflow and division by
/// zero.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
