use std::fmt::{self, Write};

use crate::ast::{Token, Tree};

/// Renders an expression tree as text.
///
/// A leaf renders as its bare token value. An internal node renders as `(`,
/// its left subtree, its operator, its right subtree and `)`, so every
/// grouping chosen by the builder is visible.
///
/// # Examples
/// ```
/// use treecalc::{parse, scan, to_text};
///
/// let tree = parse(&scan("40*4+8").unwrap()).unwrap();
/// assert_eq!(to_text(&tree), "(40*(4+8))");
///
/// let leaf = parse(&scan("7").unwrap()).unwrap();
/// assert_eq!(to_text(&leaf), "7");
/// ```
#[must_use]
pub fn to_text(tree: &Tree<Token>) -> String {
    tree.to_string()
}

fn write_tree<W: Write>(out: &mut W, tree: &Tree<Token>) -> fmt::Result {
    match tree {
        Tree::Leaf(token) => out.write_str(&token.value),
        Tree::Node { value, left, right } => {
            out.write_char('(')?;
            write_tree(out, left)?;
            out.write_str(&value.value)?;
            write_tree(out, right)?;
            out.write_char(')')
        },
    }
}

impl fmt::Display for Tree<Token> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(f, self)
    }
}
