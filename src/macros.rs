//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates a tokenizer rule that emits a token
//! - `MK_SKIP!` - Creates a tokenizer rule whose match is discarded
//!
//! These keep the tokenizer's rule table readable.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a tokenizer rule for `$pattern`, anchored at the cursor, emitting `$kind`.
///
/// # Example
///
/// ```ignore
/// MK_RULE!(r"[+\-]", TokenKind::AdditiveOperator)
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($pattern:literal, $kind:expr) => {
        TokenRule {
            regex: Regex::new(concat!("^", $pattern)).unwrap(),
            kind: Some($kind),
        }
    };
}

/// Creates a tokenizer rule for `$pattern` that advances the cursor without emitting a token.
#[macro_export]
macro_rules! MK_SKIP {
    ($pattern:literal) => {
        TokenRule {
            regex: Regex::new(concat!("^", $pattern)).unwrap(),
            kind: None,
        }
    };
}
