#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod logger;
pub mod macros;
pub mod parser;

pub use parser::parser::parse;

extern crate regex;

/// A location in the source text. `line` and `column` are 1-based, `column` counts chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the position reached after reading `text` from `self`.
    pub fn advanced_by(&self, text: &str) -> Self {
        let mut position = *self;
        for c in text.chars() {
            if c == '\n' {
                position.line += 1;
                position.column = 1;
            } else {
                position.column += 1;
            }
        }
        position.offset += text.len();
        position
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding byte `offset`.
///
/// Returns the 1-based line number, the line's text and the byte offset within that line.
/// An offset at or past the end of the source resolves to the last line.
pub fn get_line_at_position(source: &str, offset: usize) -> (usize, String, usize) {
    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&offset) {
            return (line_number, line.to_string(), offset - start);
        }

        start = end;
        line_number += 1;
    }

    // End of input: point just past the last line's content.
    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => {
            (line_number - 1, line.to_string(), line.len())
        }
        _ => (line_number, String::new(), 0),
    }
}

/// Renders an error as a caret diagram pointing into `source`.
///
/// ```text
/// Error: SyntaxError: Unexpected token: "=", expected: "Identifier"
/// -> main.toy
///   |
/// 1 | let = 1;
///   | ----^
/// ```
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.offset);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}: {}\n", error.get_error_name(), error.get_cause()));
    } else {
        out.push_str(&format!(
            "Error: {}: {} ({})\n",
            error.get_error_name(),
            error.get_cause(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let line_text = line_text.trim_end();
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed));

    let column = line_text[..line_pos.min(line_text.len())].chars().count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.len() - trimmed.len())
}
