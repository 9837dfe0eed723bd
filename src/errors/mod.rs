//! Error types for the front end.
//!
//! Both failure classes share one `Error` type:
//!
//! - lexical errors, raised by the tokenizer when no rule matches
//! - syntax errors, raised by the parser on the first token that does not fit the grammar
//!
//! Every error carries the position it was raised at so callers can render a diagnostic.

pub mod errors;

#[cfg(test)]
mod tests;
