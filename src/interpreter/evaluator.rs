/// Core evaluation logic.
///
/// Walks an expression tree bottom-up and reduces it to a single numeric
/// leaf, propagating the first failure.
pub mod core;

/// Binary operator evaluation.
///
/// Applies one of the four arithmetic operators to two integers with
/// overflow and division-by-zero checks.
pub mod binary;
