//! Unit tests for error handling.
//!
//! This module contains tests for error classification, messages and tips.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;

fn at(offset: usize, line: usize, column: usize) -> Position {
    Position {
        offset,
        line,
        column,
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(10, 2, 3),
    );

    assert_eq!(error.get_error_name(), "LexicalError");
    assert_eq!(error.kind(), ErrorKind::Lexical);
}

#[test]
fn test_unterminated_comment_is_lexical() {
    let error = Error::new(ErrorImpl::UnterminatedComment, at(4, 1, 5));

    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(error.to_string(), "Unterminated block comment at 1:5");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
            expected: TokenKind::CloseParen,
        },
        at(42, 3, 7),
    );

    assert_eq!(error.get_position().offset, 42);
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_syntax_error_kinds() {
    let causes = vec![
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
            expected: TokenKind::Identifier,
        },
        ErrorImpl::UnexpectedEndOfInput {
            expected: String::from("\"Semicolon\""),
        },
        ErrorImpl::UnexpectedPrimaryExpression {
            token: ";".to_string(),
        },
        ErrorImpl::InvalidAssignmentTarget,
        ErrorImpl::NumberParseError {
            token: "1".to_string(),
        },
        ErrorImpl::NestingTooDeep { limit: 256 },
    ];

    for cause in causes {
        let error = Error::new(cause, Position::start());
        assert_eq!(error.kind(), ErrorKind::Syntax);
        assert_eq!(error.get_error_name(), "SyntaxError");
    }
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(0, 1, 1),
    );
    assert_eq!(error.to_string(), "Unexpected token: \"@\" at 1:1");

    let error = Error::new(ErrorImpl::InvalidAssignmentTarget, at(4, 1, 5));
    assert_eq!(
        error.to_string(),
        "Invalid left-hand side in assignment at 1:5"
    );

    let error = Error::new(
        ErrorImpl::UnexpectedEndOfInput {
            expected: String::from("an expression"),
        },
        at(9, 1, 10),
    );
    assert_eq!(
        error.to_string(),
        "Unexpected end of input, expected: an expression at 1:10"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position::start(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_missing_semicolon() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
            expected: TokenKind::Semicolon,
        },
        Position::start(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "did you miss a semicolon?"),
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
