//! # treecalc
//!
//! treecalc evaluates flat arithmetic expressions such as `40*4+8`, built from
//! unsigned integer literals and the operators `+ - * /`.
//!
//! The pipeline has three stages, each a pure function that can be called on
//! its own:
//!
//! 1. [`scan`] turns text into [`ast::Token`]s.
//! 2. [`parse`] turns tokens into an [`ast::Tree`]; [`to_text`] renders it.
//! 3. [`evaluate`] reduces the tree to a single integer.
//!
//! **Operators have no precedence.** The leftmost operator always becomes the
//! root of the tree, so `40*4+8` means `40*(4+8)` and evaluates to `480`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

/// Defines the tokens and trees passed between stages.
///
/// This module declares the `Token` type produced by the scanner, the generic
/// `Tree` used both for expression trees and for evaluation results, and the
/// closed set of arithmetic operators.
///
/// # Responsibilities
/// - Defines the token taxonomy.
/// - Makes a node with a single child unrepresentable.
/// - Maps operator symbols to operators.
pub mod ast;
/// Provides one error type per pipeline stage.
///
/// This module defines the errors raised while scanning, building and
/// evaluating. Each carries the offending text and its location so callers
/// can report it.
pub mod error;
/// Implements the three pipeline stages.
///
/// This module ties together the scanner, the builder with its renderer, and
/// the evaluator.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

pub use crate::interpreter::{
    evaluator::core::evaluate,
    lexer::scan,
    parser::{core::parse, render::to_text},
};
use crate::ast::Token;

/// Everything the pipeline produces for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The scanned tokens, in input order.
    pub tokens:   Vec<Token>,
    /// The expression tree rendered by [`to_text`].
    pub rendered: String,
    /// The final result.
    pub value:    i64,
}

impl Evaluation {
    /// Returns the raw text of each token, in input order.
    #[must_use]
    pub fn token_values(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.value.as_str()).collect()
    }
}

/// Runs the whole pipeline on one input string.
///
/// The input is scanned, built into a tree, rendered and evaluated. The first
/// failing stage ends the run; no partial result is returned.
///
/// # Errors
/// Returns the [`error::LexError`], [`error::ParseError`] or
/// [`error::EvalError`] of the stage that failed.
///
/// # Examples
/// ```
/// use treecalc::run;
///
/// let evaluation = run("40*4+8").unwrap();
/// assert_eq!(evaluation.token_values(), ["40", "*", "4", "+", "8"]);
/// assert_eq!(evaluation.rendered, "(40*(4+8))");
/// assert_eq!(evaluation.value, 480);
///
/// // Whitespace is not part of the language.
/// assert!(run("1 + 2").is_err());
/// ```
pub fn run(source: &str) -> Result<Evaluation, Box<dyn std::error::Error>> {
    debug!(source, "running pipeline");

    let tokens = scan(source)?;
    let tree = parse(&tokens)?;
    let rendered = to_text(&tree);
    let value = evaluate(&tree)?.into_value();

    Ok(Evaluation { tokens,
                    rendered,
                    value })
}
