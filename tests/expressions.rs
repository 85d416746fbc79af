use numex::{
    error::{ArithmeticError, EvalError, ParseError},
    evaluate,
    interpreter::lexer::{Token, tokenize},
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(Some(value)) => assert_eq!(value, expected, "Expression: {src}"),
        Ok(None) => panic!("Expression '{src}' produced no value"),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if evaluate(src).is_ok() {
        panic!("Expression '{src}' succeeded but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("8 - 5", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("10 / 2", 5.0);
    assert_value("2.5 + 0.5", 3.0);
}

#[test]
fn precedence_and_grouping() {
    assert_value("1 + 2 * 3", 7.0);
    assert_value("(1 + 2) * 3", 9.0);
    assert_value("2 * (3 + (4 - 1))", 12.0);
    assert_value("((2))", 2.0);
}

#[test]
fn left_associativity() {
    assert_value("(1 + 2) * 3 - 4 / 2", 7.0);
    assert_value("8 - 3 - 2", 3.0);
    assert_value("8 / 4 / 2", 1.0);
    assert_value("100 / 10 * 10", 100.0);
}

#[test]
fn fractional_literals() {
    assert_value("3.14", 3.14);
    assert_value("2.", 2.0);
    assert_value("0.5 * 4", 2.0);
    assert_value("4 / 5", 0.8);
}

#[test]
fn whitespace_is_skipped() {
    assert_value("  1   +2 ", 3.0);
    assert_value("\t7 *\n9", 63.0);
}

#[test]
fn empty_input_produces_no_value() {
    assert_eq!(evaluate("").unwrap(), None);
    assert_eq!(evaluate(" \t  ").unwrap(), None);
}

#[test]
fn tokenize_simple_expression() {
    let tokens = tokenize("1 + 1").unwrap();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0], (Token::Number(1.0), 0));
    assert_eq!(tokens[1], (Token::Plus, 2));
    assert_eq!(tokens[2], (Token::Number(1.0), 4));
    assert_eq!(tokens[3], (Token::End, 5));
}

#[test]
fn tokenize_complex_expression() {
    let tokens = tokenize("(1 + 2) * 3 - 4 / 5").unwrap();
    assert_eq!(tokens.len(), 12);
}

#[test]
fn end_token_is_always_last_and_unique() {
    for src in ["", "   ", "1 + 1", "(1 + 2) * 3 - 4 / 5", "0.5"] {
        let tokens = tokenize(src).unwrap();
        let ends = tokens.iter().filter(|(tok, _)| *tok == Token::End).count();
        assert_eq!(ends, 1, "Input: '{src}'");
        assert_eq!(tokens.last().unwrap().0, Token::End, "Input: '{src}'");
    }
}

#[test]
fn tokenization_is_repeatable() {
    let first = tokenize("(1 + 2) * 3.5").unwrap();
    let second = tokenize("(1 + 2) * 3.5").unwrap();
    assert_eq!(first, second);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("1 / 0");
    assert_failure("1 / 0.0");
    assert_failure("1 / (2 - 2)");

    match evaluate("1 / 0") {
        Err(EvalError::Arithmetic(ArithmeticError::DivisionByZero { position })) => {
            assert_eq!(position, 2);
        },
        other => panic!("Expected a division by zero error, got {other:?}"),
    }
}

#[test]
fn unmatched_parenthesis_is_error() {
    assert_failure("(1 + 2");
    assert_failure("1 + (2 * 3");

    match evaluate("(1 + 2") {
        Err(EvalError::Parse(ParseError::ExpectedClosingParen { position })) => {
            assert_eq!(position, 0);
        },
        other => panic!("Expected a missing parenthesis error, got {other:?}"),
    }
}

#[test]
fn dangling_operator_is_error() {
    assert_failure("1 +");
    assert_failure("* 3");
    assert_failure("1 + * 2");
    assert_failure(")");
}

#[test]
fn trailing_input_is_error() {
    assert_failure("1 2");
    assert_failure("(1 + 2))");

    assert!(matches!(evaluate("1 2"),
                     Err(EvalError::Parse(ParseError::UnexpectedTrailingTokens { .. }))));
}

#[test]
fn unrecognized_character_is_error() {
    assert_failure("1 + a");
    assert_failure("2 $ 2");
    assert_failure("1 & 2");

    assert!(matches!(evaluate("2 $ 2"),
                     Err(EvalError::Parse(ParseError::UnrecognizedCharacter { .. }))));
}
