use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{EvalResult, parse_expression},
    },
};

/// Parses a primary (atomic) expression and returns its value.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - parenthesized expressions
///
/// The function dispatches on the next unconsumed token. Anything else at
/// this position is a syntax error: the end-of-expression marker reports an
/// unexpected end of input, and any other token kind is reported as
/// unexpected along with its offset.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The value of the primary expression or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { position: 0 })?;

    match peeked {
        (Token::Number(value), _) => {
            let value = *value;
            tokens.next();
            Ok(value)
        },
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::End, position) => {
            Err(ParseError::UnexpectedEndOfInput { position: *position }.into())
        },
        (token, position) => Err(ParseError::UnexpectedToken { token:    format!("{token:?}"),
                                                               position: *position, }.into()),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, evaluates the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen` at the offset of the
/// opening one.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner value as-is.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (_, position) = *tokens.next().unwrap();
    let value = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(value),
        _ => Err(ParseError::ExpectedClosingParen { position }.into()),
    }
}
