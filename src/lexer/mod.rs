//! Lexical analysis module for the front end.
//!
//! This module contains the tokenizer that turns source text into tokens
//! on demand for the parser. It handles:
//!
//! - An ordered, regex-driven rule table where the first matching rule wins
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
