use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A fatal front-end error together with the position it was raised at.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// The two classes of front-end failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No tokenizer rule matched at the cursor.
    Lexical,
    /// The token stream does not fit the grammar.
    Syntax,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_cause(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } | ErrorImpl::UnterminatedComment => {
                ErrorKind::Lexical
            }
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedEndOfInput { .. }
            | ErrorImpl::UnexpectedPrimaryExpression { .. }
            | ErrorImpl::InvalidAssignmentTarget
            | ErrorImpl::UnknownOperator { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorKind::Syntax,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self.kind() {
            ErrorKind::Lexical => "LexicalError",
            ErrorKind::Syntax => "SyntaxError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } if *expected == TokenKind::Semicolon => {
                ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => ErrorTip::Suggestion(format!(
                "the input ended while {} was still required",
                expected
            )),
            ErrorImpl::InvalidAssignmentTarget => ErrorTip::Suggestion(String::from(
                "only identifiers and member expressions can be assigned to",
            )),
            ErrorImpl::NumberParseError { .. } => {
                ErrorTip::Suggestion(String::from("is the number too large?"))
            }
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("close the comment with `*/`"))
            }
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "split the nested code into smaller functions or variables",
            )),
            _ => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unexpected token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("Unterminated block comment")]
    UnterminatedComment,
    #[error("Unexpected token: {token:?}, expected: \"{expected}\"")]
    UnexpectedToken { token: String, expected: TokenKind },
    #[error("Unexpected end of input, expected: {expected}")]
    UnexpectedEndOfInput { expected: String },
    #[error("Unexpected primary expression: {token:?}")]
    UnexpectedPrimaryExpression { token: String },
    #[error("Invalid left-hand side in assignment")]
    InvalidAssignmentTarget,
    /// Operator text that does not belong to the operator family being built.
    /// The parser only converts tokens whose kind already fixes the text, so parsing
    /// never produces this; it guards direct use of the `from_token` constructors.
    #[error("Unknown operator: {token:?}")]
    UnknownOperator { token: String },
    #[error("Invalid number: {token:?}")]
    NumberParseError { token: String },
    #[error("Nesting exceeds the maximum depth of {limit}")]
    NestingTooDeep { limit: usize },
}
