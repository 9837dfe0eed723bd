use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_RULE, MK_SKIP, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// One entry of the tokenizer's rule table. A rule without a kind is a skip rule.
pub struct TokenRule {
    regex: Regex,
    kind: Option<TokenKind>,
}

lazy_static! {
    /// Tried top to bottom at the cursor; the first rule with a non-empty match wins.
    /// A rule for a longer lexeme must come before any rule matching one of its prefixes.
    static ref TOKEN_RULES: Vec<TokenRule> = vec![
        // whitespace, comments
        MK_SKIP!(r"\s+"),
        MK_SKIP!(r"//.*"),
        MK_SKIP!(r"/\*[\s\S]*?\*/"),

        // symbols, delimiters
        MK_RULE!(";", TokenKind::Semicolon),
        MK_RULE!(",", TokenKind::Comma),
        MK_RULE!(r"\.", TokenKind::Dot),
        MK_RULE!(r"\{", TokenKind::OpenCurly),
        MK_RULE!(r"\}", TokenKind::CloseCurly),
        MK_RULE!(r"\(", TokenKind::OpenParen),
        MK_RULE!(r"\)", TokenKind::CloseParen),
        MK_RULE!(r"\[", TokenKind::OpenBracket),
        MK_RULE!(r"\]", TokenKind::CloseBracket),

        // numbers, identifiers and keywords
        MK_RULE!(r"[0-9]+(\.[0-9]+)?", TokenKind::Number),
        MK_RULE!(r"[A-Za-z0-9_]+", TokenKind::Identifier),

        // equality before assignment
        MK_RULE!(r"[=!]=", TokenKind::EqualityOperator),

        // assignment operators
        MK_RULE!("=", TokenKind::SimpleAssign),
        MK_RULE!(r"[*/+\-]=", TokenKind::ComplexAssign),

        // math operators
        MK_RULE!(r"[+\-]", TokenKind::AdditiveOperator),
        MK_RULE!(r"[*/]", TokenKind::MultiplicativeOperator),

        // relational and logical operators
        MK_RULE!(r"[<>]=?", TokenKind::RelationalOperator),
        MK_RULE!("&&", TokenKind::LogicalAnd),
        MK_RULE!(r"\|\|", TokenKind::LogicalOr),
        MK_RULE!("!", TokenKind::LogicalNot),

        // strings
        MK_RULE!(r#""[^"]*""#, TokenKind::String),
        MK_RULE!("'[^']*'", TokenKind::String),
    ];
}

/// Lazily scans a source string into tokens, one `get_next_token` call at a time.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    source: String,
    cursor: Position,
}

impl Tokenizer {
    pub fn new(source: &str) -> Tokenizer {
        Tokenizer {
            source: source.to_string(),
            cursor: Position::start(),
        }
    }

    /// Resets the tokenizer onto a new source, cursor at the start.
    pub fn init(&mut self, source: &str) {
        self.source = source.to_string();
        self.cursor = Position::start();
    }

    /// Returns the next token, or `Ok(None)` once the input is exhausted.
    ///
    /// Whitespace and comments are consumed silently. Fails with a lexical error
    /// naming the offending character when no rule matches at the cursor.
    pub fn get_next_token(&mut self) -> Result<Option<Token>, Error> {
        loop {
            if !self.has_more_tokens() {
                return Ok(None);
            }

            let remainder = &self.source[self.cursor.offset..];

            // A `/*` with no `*/` after it is an error, never `/` followed by `*`.
            if remainder.starts_with("/*") && !remainder[2..].contains("*/") {
                return Err(Error::new(ErrorImpl::UnterminatedComment, self.cursor));
            }

            let matched = TOKEN_RULES.iter().find_map(|rule| {
                rule.regex
                    .find(remainder)
                    .filter(|found| !found.is_empty())
                    .map(|found| (rule.kind, found.as_str().to_string()))
            });

            let (kind, value) = match matched {
                Some(matched) => matched,
                None => {
                    let token = remainder.chars().next().map(String::from).unwrap_or_default();
                    return Err(Error::new(
                        ErrorImpl::UnrecognisedToken { token },
                        self.cursor,
                    ));
                }
            };

            let start = self.cursor;
            self.cursor = start.advanced_by(&value);

            let kind = match kind {
                None => continue,
                Some(TokenKind::Identifier) => RESERVED_LOOKUP
                    .get(value.as_str())
                    .copied()
                    .unwrap_or(TokenKind::Identifier),
                Some(kind) => kind,
            };

            trace!(target: "toy_frontend", "token {} {:?} at {}", kind, value, start);

            return Ok(Some(MK_TOKEN!(
                kind,
                value,
                Span {
                    start,
                    end: self.cursor
                }
            )));
        }
    }

    /// The cursor position; once the input is exhausted this is the end-of-input position.
    pub fn position(&self) -> Position {
        self.cursor
    }

    pub fn has_more_tokens(&self) -> bool {
        self.cursor.offset < self.source.len()
    }
}

/// Drains a tokenizer over `source` into a vector.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = vec![];

    while let Some(token) = tokenizer.get_next_token()? {
        tokens.push(token);
    }

    Ok(tokens)
}
