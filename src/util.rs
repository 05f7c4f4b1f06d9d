/// Numeric conversion helpers.
///
/// This module turns the digit strings carried by literal tokens into
/// integers without silently wrapping or truncating. Every function returns a
/// `Result`, which is an error if the value does not fit the target type.
pub mod num;
