/// The lexical category of a [`Token`].
///
/// The scanner only ever produces [`TokenCategory::Literal`] and
/// [`TokenCategory::Operator`]. The remaining categories complete the
/// taxonomy and have no producing rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// A name such as `x`.
    Identifier,
    /// A run of ASCII digits, such as `40`.
    Literal,
    /// A run of operator characters, such as `*` or `+-`.
    Operator,
    /// A reserved word.
    Keyword,
    /// Punctuation such as `(` or `,`.
    Delimiter,
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Identifier => "identifier",
            Self::Literal => "literal",
            Self::Operator => "operator",
            Self::Keyword => "keyword",
            Self::Delimiter => "delimiter",
        };
        write!(f, "{name}")
    }
}

/// A lexical unit: the exact text that was matched and its category.
///
/// Tokens are created once by the scanner and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The matched substring, never empty.
    pub value:    String,
    /// The lexical category of `value`.
    pub category: TokenCategory,
    /// Byte offset of the first character of `value` in the scanned input.
    pub position: usize,
}

impl Token {
    /// Creates a literal token.
    ///
    /// ## Example
    /// ```
    /// use treecalc::ast::{Token, TokenCategory};
    ///
    /// let token = Token::literal("40", 0);
    /// assert_eq!(token.category, TokenCategory::Literal);
    /// assert_eq!(token.value, "40");
    /// ```
    #[must_use]
    pub fn literal(value: impl Into<String>, position: usize) -> Self {
        Self { value: value.into(),
               category: TokenCategory::Literal,
               position }
    }

    /// Creates an operator token.
    #[must_use]
    pub fn operator(value: impl Into<String>, position: usize) -> Self {
        Self { value: value.into(),
               category: TokenCategory::Operator,
               position }
    }

    /// Returns `true` if this token is an operator run.
    #[must_use]
    pub fn is_operator(&self) -> bool {
        self.category == TokenCategory::Operator
    }
}

/// A strictly binary tree, generic over its payload.
///
/// A node is either a leaf or carries exactly two children; a node with a
/// single child cannot be built. The builder produces `Tree<Token>` and the
/// evaluator reduces it to a single-leaf `Tree<i64>`.
///
/// Each node owns its children, so trees never share subtrees and cannot
/// contain cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree<T> {
    /// A terminal value.
    Leaf(T),
    /// An internal node with both subtrees present.
    Node {
        /// The payload of this node, e.g. an operator token.
        value: T,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl<T> Tree<T> {
    /// Creates a leaf.
    #[must_use]
    pub const fn leaf(value: T) -> Self {
        Self::Leaf(value)
    }

    /// Creates an internal node owning both subtrees.
    ///
    /// ## Example
    /// ```
    /// use treecalc::ast::Tree;
    ///
    /// let tree = Tree::node('+', Tree::leaf('1'), Tree::leaf('2'));
    /// assert_eq!(tree.value(), &'+');
    /// assert_eq!(tree.left(), Some(&Tree::leaf('1')));
    /// assert!(!tree.is_leaf());
    /// ```
    #[must_use]
    pub fn node(value: T, left: Self, right: Self) -> Self {
        Self::Node { value,
                     left: Box::new(left),
                     right: Box::new(right) }
    }

    /// Returns the payload of the root.
    #[must_use]
    pub const fn value(&self) -> &T {
        match self {
            Self::Leaf(value) | Self::Node { value, .. } => value,
        }
    }

    /// Consumes the tree and returns the payload of the root.
    #[must_use]
    pub fn into_value(self) -> T {
        match self {
            Self::Leaf(value) | Self::Node { value, .. } => value,
        }
    }

    /// Returns the left subtree, if any.
    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        match self {
            Self::Leaf(_) => None,
            Self::Node { left, .. } => Some(&**left),
        }
    }

    /// Returns the right subtree, if any.
    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        match self {
            Self::Leaf(_) => None,
            Self::Node { right, .. } => Some(&**right),
        }
    }

    /// Returns `true` for leaves.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Number of levels in the tree; a single leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Node { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// One of the four supported arithmetic operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Maps an operator token value to an operator.
    ///
    /// Only the exact single-character symbols are accepted, so a run such as
    /// `"+-"` yields `None`.
    ///
    /// ## Example
    /// ```
    /// use treecalc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("*"), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_symbol("+-"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
