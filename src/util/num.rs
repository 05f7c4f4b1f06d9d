use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Converts the digit string of a literal token into an `i64`.
///
/// The scanner guarantees that literal tokens are non-empty runs of ASCII
/// digits, so the only way this can fail on scanner output is a value larger
/// than `i64::MAX`.
///
/// ## Errors
/// - `EvalError::LiteralTooLarge` if the value exceeds `i64::MAX`.
/// - `EvalError::NotANumber` if `digits` is empty or contains anything but
///   ASCII digits.
///
/// ## Parameters
/// - `digits`: The literal as written in the source.
/// - `position`: Byte offset of the literal, used for error reporting.
///
/// ## Example
/// ```
/// use treecalc::{error::EvalError, util::num::parse_literal};
///
/// assert_eq!(parse_literal("40", 0).unwrap(), 40);
/// assert_eq!(parse_literal("007", 0).unwrap(), 7);
///
/// let err = parse_literal("9223372036854775808", 3).unwrap_err();
/// assert!(matches!(err, EvalError::LiteralTooLarge { position: 3, .. }));
/// ```
pub fn parse_literal(digits: &str, position: usize) -> EvalResult<i64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EvalError::NotANumber { value: digits.to_string(),
                                           position });
    }

    digits.parse::<i64>()
          .map_err(|_| EvalError::LiteralTooLarge { literal: digits.to_string(),
                                                     position })
}
