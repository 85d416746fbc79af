//! # numex
//!
//! numex is a small arithmetic expression evaluator written in Rust.
//! It tokenizes and evaluates plain arithmetic expressions with the four
//! basic operators, parenthesized grouping, and standard operator
//! precedence, computing the result directly while parsing.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
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

use crate::{
    error::EvalError,
    interpreter::{lexer::tokenize, parser::core::parse},
};

/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while turning expression
/// text into a value. It standardizes error reporting and carries detailed
/// information about failures, including the offending input and its byte
/// offset.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, arithmetic).
/// - Attaches byte offsets and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the process of expression evaluation.
///
/// This module ties together the lexer and the recursive-descent parser that
/// computes the result while consuming tokens. It holds the components behind
/// the public entry point for evaluating expression text.
///
/// # Responsibilities
/// - Coordinates the two phases: tokenization and parse-and-evaluate.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates an arithmetic expression and returns its numeric value.
///
/// The expression is tokenized in full, then consumed by a recursive-descent
/// parser that computes the result as it goes; no syntax tree is built.
/// Multiplication and division bind tighter than addition and subtraction,
/// and operators of equal precedence group left to right. An input with no
/// tokens at all (empty or whitespace-only text) yields `Ok(None)`, which is
/// distinguishable from a failure.
///
/// Each call is independent and owns all of its state, so the function may be
/// invoked concurrently without coordination.
///
/// # Errors
/// Returns an error if the input contains unrecognized characters, if the
/// expression is malformed or only a prefix of the input, or if a division by
/// zero is attempted.
///
/// # Examples
/// ```
/// use numex::evaluate;
///
/// assert_eq!(evaluate("1 + 2 * 3").unwrap(), Some(7.0));
/// assert_eq!(evaluate("(1 + 2) * 3").unwrap(), Some(9.0));
///
/// // Empty input produces no result rather than an error.
/// assert_eq!(evaluate("").unwrap(), None);
///
/// // Division by zero is reported instead of producing an infinity.
/// assert!(evaluate("1 / 0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<Option<f64>, EvalError> {
    let tokens = tokenize(expression)?;
    let mut iter = tokens.iter().peekable();

    parse(&mut iter)
}
