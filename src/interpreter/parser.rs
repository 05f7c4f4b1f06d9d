/// Tree construction.
///
/// Contains the entry point that groups a token sequence around its leftmost
/// operator, recursively, to produce an expression tree.
pub mod core;

/// Tree rendering.
///
/// Turns an expression tree back into a parenthesized string that mirrors the
/// grouping chosen by the builder.
pub mod render;
