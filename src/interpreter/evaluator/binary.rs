use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
};

/// Applies a binary operator to two integers.
///
/// Only the selected operation is computed. Division truncates toward zero.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Byte offset of the operator, for error reporting.
///
/// # Errors
/// - `EvalError::DivisionByZero` if `op` is division and `right` is zero.
/// - `EvalError::Overflow` if the result does not fit in an `i64`.
///
/// # Example
/// ```
/// use treecalc::{
///     ast::BinaryOperator, error::EvalError, interpreter::evaluator::binary::eval_binary,
/// };
///
/// assert_eq!(eval_binary(BinaryOperator::Div, 7, 2, 0), Ok(3));
/// assert_eq!(eval_binary(BinaryOperator::Sub, 2, 7, 0), Ok(-5));
/// assert_eq!(eval_binary(BinaryOperator::Div, 1, 0, 1),
///            Err(EvalError::DivisionByZero { position: 1 }));
/// ```
pub const fn eval_binary(op: BinaryOperator,
                         left: i64,
                         right: i64,
                         position: usize)
                         -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let result = match op {
        Add => left.checked_add(right),
        Sub => left.checked_sub(right),
        Mul => left.checked_mul(right),
        Div => {
            if right == 0 {
                return Err(EvalError::DivisionByZero { position });
            }
            left.checked_div(right)
        },
    };

    match result {
        Some(value) => Ok(value),
        None => Err(EvalError::Overflow { position }),
    }
}
