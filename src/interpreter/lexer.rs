use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the expression input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `2.`.
    /// The fractional part, when present, belongs to the same token.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of expression. This variant carries no pattern; [`tokenize`]
    /// appends it exactly once after the scan reaches the end of the input.
    End,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Converts an expression string into the full token sequence.
///
/// Tokens are produced in left-to-right scan order, each paired with the byte
/// offset where its match begins. Whitespace separates tokens but produces
/// none. After the scan completes, a single [`Token::End`] is appended, so
/// the returned sequence is never empty and always finishes with `End`.
///
/// # Parameters
/// - `text`: The expression to tokenize.
///
/// # Returns
/// The ordered `(token, offset)` sequence.
///
/// # Errors
/// Returns `ParseError::UnrecognizedCharacter` if a piece of the input
/// matches none of the token patterns and is not whitespace.
pub fn tokenize(text: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(text);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnrecognizedCharacter { text:     slice.to_string(),
                                                           position: lexer.span().start, });
        }
    }
    tokens.push((Token::End, text.len()));

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
