/// Core parsing logic and the entry point.
///
/// Contains the shared result alias, the top-level expression production, and
/// the end-of-input handling.
pub mod core;

/// Binary operator productions.
///
/// Implements the two precedence levels for the arithmetic operators,
/// folding the result left to right as tokens are consumed.
pub mod binary;

/// Primary (atomic) productions.
///
/// Handles numeric literals and parenthesized grouping.
pub mod primary;
