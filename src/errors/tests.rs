//! Unit tests for error handling.
//!
//! This module contains tests for error messages, names and tips.

use crate::errors::errors::{ErrorImpl, ErrorTip, ParseError};

#[test]
fn test_error_creation() {
    let error = ParseError::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        10,
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.line(), 10);
    assert!(error.is_lexical());
}

#[test]
fn test_expected_token_messages() {
    for token in [";", "(", ")", "{", ",", ":"] {
        let error = ParseError::new(ErrorImpl::expected(token), 0);
        assert_eq!(error.message(), format!("{} expected", token));
    }
}

#[test]
fn test_identifier_expected_message() {
    let error = ParseError::new(ErrorImpl::identifier("return type"), 3);

    assert_eq!(error.message(), "return type identifier expected");
    assert_eq!(error.get_error_name(), "IdentifierExpected");
    assert!(!error.is_lexical());
}

#[test]
fn test_unknown_terminal_message() {
    let error = ParseError::new(
        ErrorImpl::UnknownTerminal {
            lexeme: ";".to_string(),
        },
        0,
    );

    assert_eq!(error.message(), "unknown Terminal token : ;");
}

#[test]
fn test_lexical_messages() {
    let unknown = ParseError::new(
        ErrorImpl::UnrecognisedToken {
            token: "#".to_string(),
        },
        1,
    );
    assert_eq!(unknown.message(), "unknown token");

    let unterminated = ParseError::new(ErrorImpl::UnterminatedString, 1);
    assert_eq!(unterminated.message(), "unterminated string");
    assert!(unterminated.is_lexical());
}

#[test]
fn test_too_many_parameters_is_distinct_from_missing_paren() {
    let too_many = ParseError::new(ErrorImpl::TooManyParameters { max: 128 }, 0);
    let missing = ParseError::new(ErrorImpl::expected(")"), 0);

    assert_ne!(too_many, missing);
    assert_eq!(too_many.message(), "too many parameters : max 128");
    assert_eq!(too_many.get_error_name(), "TooManyParameters");
}

#[test]
fn test_error_display_includes_line() {
    let error = ParseError::new(ErrorImpl::expected(";"), 7);

    assert_eq!(error.to_string(), "; expected : 7");
}

#[test]
fn test_error_equality() {
    let a = ParseError::new(ErrorImpl::expected(";"), 0);
    let b = ParseError::new(ErrorImpl::expected(";"), 0);
    let c = ParseError::new(ErrorImpl::expected(";"), 1);

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_error_tip_none() {
    let error = ParseError::new(ErrorImpl::UnexpectedEof, 0);

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = ParseError::new(ErrorImpl::expected(";"), 0);

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Did you miss a semicolon?"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
