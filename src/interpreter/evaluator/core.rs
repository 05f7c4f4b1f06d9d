use tracing::{debug, trace};

use crate::{
    ast::{BinaryOperator, Token, TokenCategory, Tree},
    error::EvalError,
    interpreter::evaluator::binary::eval_binary,
    util::num::parse_literal,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree.
///
/// Leaves are parsed as integers. Internal nodes evaluate their left and right
/// subtrees first and then apply their operator to the two results. The
/// grouping is exactly the one chosen by the builder, so `40*4+8` evaluates as
/// `40*(4+8)`.
///
/// Recursion follows the tree depth. Trees from [`crate::parse`] are bounded
/// by [`crate::interpreter::parser::core::MAX_OPERATORS`]; hand-built trees
/// are not checked.
///
/// # Parameters
/// - `tree`: An expression tree as produced by [`crate::parse`].
///
/// # Returns
/// A single-leaf tree holding the result.
///
/// # Errors
/// - `EvalError::NotANumber` for a leaf that is not a literal token.
/// - `EvalError::LiteralTooLarge` for a literal beyond `i64::MAX`.
/// - `EvalError::UnknownOperator` for an internal node that is not exactly one
///   of `+ - * /`, including operator runs such as `+-`.
/// - `EvalError::Overflow` and `EvalError::DivisionByZero` from the
///   arithmetic itself.
///
/// # Examples
/// ```
/// use treecalc::{ast::Tree, evaluate, parse, scan};
///
/// let tree = parse(&scan("40*4+8").unwrap()).unwrap();
/// assert_eq!(evaluate(&tree).unwrap(), Tree::leaf(480));
/// ```
pub fn evaluate(tree: &Tree<Token>) -> EvalResult<Tree<i64>> {
    let result = reduce(tree)?;
    debug!(result, "evaluation finished");
    Ok(Tree::leaf(result))
}

fn reduce(tree: &Tree<Token>) -> EvalResult<i64> {
    match tree {
        Tree::Leaf(token) => eval_leaf(token),
        Tree::Node { value, left, right } => {
            let left = reduce(left)?;
            let right = reduce(right)?;
            let op = operator_of(value)?;

            let result = eval_binary(op, left, right, value.position)?;
            trace!(%left, %op, %right, result, "reduced node");
            Ok(result)
        },
    }
}

fn eval_leaf(token: &Token) -> EvalResult<i64> {
    match token.category {
        TokenCategory::Literal => parse_literal(&token.value, token.position),
        _ => Err(EvalError::NotANumber { value:    token.value.clone(),
                                         position: token.position, }),
    }
}

fn operator_of(token: &Token) -> EvalResult<BinaryOperator> {
    if token.is_operator()
       && let Some(op) = BinaryOperator::from_symbol(&token.value)
    {
        return Ok(op);
    }

    Err(EvalError::UnknownOperator { operator: token.value.clone(),
                                     position: token.position, })
}
