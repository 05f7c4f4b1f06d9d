/// The evaluator module reduces expression trees to numbers.
///
/// The evaluator walks a token-payload tree bottom-up, parses literal leaves
/// as integers and applies each operator node to its two evaluated subtrees,
/// producing a fresh single-leaf tree with an integer payload.
///
/// # Responsibilities
/// - Maps `Tree<Token>` to `Tree<i64>`.
/// - Dispatches on a closed set of operators, computing only the selected one.
/// - Reports unknown operators, overflow and division by zero.
pub mod evaluator;
/// The lexer module scans input text into tokens.
///
/// The scanner reads the raw expression text and produces a sequence of
/// literal and operator tokens, each carrying its exact text and byte offset.
/// This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Groups maximal runs of digits and of operator characters into tokens.
/// - Reports the first invalid character and its position.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// The builder groups a token sequence around its leftmost operator,
/// recursively, and can render the resulting tree back to text.
///
/// # Responsibilities
/// - Converts tokens into a strictly binary expression tree.
/// - Reports missing operands.
/// - Renders trees as fully parenthesized text.
pub mod parser;
