/// Arithmetic errors.
///
/// Contains the error types that can be raised while computing the value of
/// an expression, such as division by zero. These failures surface through
/// the same result channel as parse errors instead of producing a silent
/// non-finite value.
pub mod arithmetic_error;
/// The umbrella error type.
///
/// Joins the parsing and arithmetic error kinds into the single error type
/// returned by evaluation, so callers can tell the failure kinds apart.
pub mod eval_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of
/// expression text. Parse errors include unrecognized characters, unexpected
/// tokens, unbalanced parentheses, and leftover input.
pub mod parse_error;

pub use arithmetic_error::ArithmeticError;
pub use eval_error::EvalError;
pub use parse_error::ParseError;
