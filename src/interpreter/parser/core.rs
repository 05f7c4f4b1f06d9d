use tracing::{debug, trace};

use crate::{
    ast::{Token, Tree},
    error::ParseError,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Largest number of operator tokens [`parse`] accepts.
///
/// Every operator nests one level deeper to the right, and building, rendering
/// and evaluating all recurse once per level.
pub const MAX_OPERATORS: usize = 256;

/// Builds an expression tree from a token sequence.
///
/// **There is no operator precedence.** The first operator token in the
/// sequence becomes the root, the tokens before it form the left subtree and
/// the tokens after it form the right subtree, each built the same way. The
/// input `40*4+8` therefore groups as `40*(4+8)`, not `(40*4)+8`.
///
/// A range without any operator becomes a leaf holding its first token; any
/// further tokens in that range are ignored. The scanner never produces two
/// adjacent literals, so this only matters for hand-built token sequences.
///
/// # Parameters
/// - `tokens`: The scanned tokens, in input order.
///
/// # Returns
/// The expression tree, with operator tokens at internal nodes and literal
/// tokens at the leaves.
///
/// # Errors
/// - `ParseError::TooManyOperators` if the sequence holds more than
///   [`MAX_OPERATORS`] operator tokens.
/// - `ParseError::UnexpectedEndOfInput` if the sequence is empty or an
///   operator has nothing on one of its sides (e.g. `4+` or `*4`).
///
/// # Examples
/// ```
/// use treecalc::{parse, scan};
///
/// let tree = parse(&scan("40*4+8").unwrap()).unwrap();
/// assert_eq!(tree.value().value, "*");
/// assert_eq!(tree.left().unwrap().value().value, "40");
/// assert_eq!(tree.right().unwrap().value().value, "+");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Tree<Token>> {
    let count = tokens.iter().filter(|t| t.is_operator()).count();
    if count > MAX_OPERATORS {
        return Err(ParseError::TooManyOperators { count,
                                                  max: MAX_OPERATORS });
    }

    let tree = parse_range(tokens, 0)?;
    debug!(depth = tree.depth(), "parse finished");
    Ok(tree)
}

/// Parses `tokens`, a sub-slice starting at index `offset` of the full
/// sequence. The offset only feeds error reporting.
fn parse_range(tokens: &[Token], offset: usize) -> ParseResult<Tree<Token>> {
    if let Some(split) = tokens.iter().position(Token::is_operator) {
        let operator = &tokens[split];
        trace!(operator = %operator.value, index = offset + split, "grouping around operator");

        let left = parse_range(&tokens[..split], offset)?;
        let right = parse_range(&tokens[split + 1..], offset + split + 1)?;

        return Ok(Tree::node(operator.clone(), left, right));
    }

    match tokens.first() {
        Some(token) => Ok(Tree::leaf(token.clone())),
        None => Err(ParseError::UnexpectedEndOfInput { index: offset }),
    }
}
