use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("for", TokenKind::For);
        map.insert("def", TokenKind::Def);
        map.insert("return", TokenKind::Return);
        map.insert("class", TokenKind::Class);
        map.insert("extends", TokenKind::Extends);
        map.insert("super", TokenKind::Super);
        map.insert("new", TokenKind::New);
        map.insert("this", TokenKind::This);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("null", TokenKind::Null);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    String,
    Identifier,

    Semicolon,
    Comma,
    Dot,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,

    SimpleAssign,  // =
    ComplexAssign, // += -= *= /=

    AdditiveOperator,       // + -
    MultiplicativeOperator, // * /
    EqualityOperator,       // == !=
    RelationalOperator,     // < <= > >=

    LogicalAnd, // &&
    LogicalOr,  // ||
    LogicalNot, // !

    // Reserved
    Let,
    If,
    Else,
    While,
    Do,
    For,
    Def,
    Return,
    Class,
    Extends,
    Super,
    New,
    This,
    True,
    False,
    Null,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified lexeme. `value` is the exact matched text, quotes included for strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.value)
    }
}
