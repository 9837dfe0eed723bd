//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that pulls tokens from
//! the tokenizer one at a time and builds a `Program`. It handles:
//!
//! - Statement parsing, dispatched on the lookahead token through a lookup table
//! - Expression parsing by precedence climbing over a binding-power table
//! - Left-hand-side chains of member accesses, calls and `new`
//!
//! Exactly one token of lookahead is held; there is no backtracking.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
