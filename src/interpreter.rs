/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer (tokenizer) reads the raw input text and produces the full
/// sequence of tokens, each corresponding to a meaningful element of the
/// expression: numbers, operators, and parentheses. This is the first stage
/// of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and byte
///   offset.
/// - Handles numeric literals, including their fractional part, as single
///   tokens.
/// - Appends the end-of-expression marker and rejects unrecognized input.
pub mod lexer;
/// The parser module consumes tokens and computes the numeric result.
///
/// The parser processes the token sequence produced by the lexer through a
/// set of recursive-descent productions, one per grammar rule. Each
/// production evaluates its construct immediately as it is recognized, so no
/// syntax tree is ever built.
///
/// # Responsibilities
/// - Validates the grammar and reports errors with offset information.
/// - Applies operator precedence and left-to-right associativity.
/// - Computes the value of the expression while consuming its tokens.
pub mod parser;
