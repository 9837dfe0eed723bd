//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser owns a tokenizer and a single lookahead token; productions
//! inspect the lookahead to choose a branch and consume it with `eat`.
//!
//! It maintains lookup tables for:
//! - Statement handlers, keyed by the token that starts the statement
//! - Binding powers of binary operators

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Tokenizer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{create_token_lookups, BPLookup, BindingPower, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// Deepest nesting of statements and expressions accepted before parsing fails.
/// Each level costs several stack frames.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// One parser may be reused for several sources; each `parse` call
/// resets the tokenizer and lookahead.
pub struct Parser {
    /// Source of tokens, pulled one at a time
    tokenizer: Tokenizer,
    /// The next unconsumed token, `None` at end of input
    lookahead: Option<Token>,
    /// Statement and expression productions currently being parsed
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for binary operator binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        let mut parser = Parser {
            tokenizer: Tokenizer::new(""),
            lookahead: None,
            depth: 0,
            stmt_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Parses `source` into a `Program`, stopping at the first lexical or syntax error.
    pub fn parse(&mut self, source: &str) -> Result<Program, Error> {
        debug!(target: "toy_frontend", "parsing {} bytes", source.len());

        self.tokenizer.init(source);
        self.lookahead = None;
        self.depth = 0;

        match self.parse_program() {
            Ok(program) => {
                debug!(target: "toy_frontend", "parsed {} top-level statements", program.body.len());
                Ok(program)
            }
            Err(error) => {
                debug!(target: "toy_frontend", "parse failed: {}", error);
                Err(error)
            }
        }
    }

    fn parse_program(&mut self) -> Result<Program, Error> {
        self.lookahead = self.tokenizer.get_next_token()?;

        let mut body = vec![];
        while self.lookahead.is_some() {
            body.push(parse_stmt(self)?);
        }

        Ok(Program::new(body))
    }

    /// Returns the current token without consuming it.
    pub fn current_token(&self) -> Option<&Token> {
        self.lookahead.as_ref()
    }

    /// Returns the kind of the current token, `None` at end of input.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|token| token.kind)
    }

    /// Whether the current token is of `kind`.
    pub fn is(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == Some(kind)
    }

    /// Consumes the current token, which must be of `expected_kind`, and refills the lookahead.
    pub fn eat(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = match self.lookahead.take() {
            Some(token) if token.kind == expected_kind => token,
            Some(token) => {
                let error = Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.value.clone(),
                        expected: expected_kind,
                    },
                    token.span.start,
                );
                self.lookahead = Some(token);
                return Err(error);
            }
            None => return Err(self.end_of_input(format!("\"{}\"", expected_kind))),
        };

        self.lookahead = self.tokenizer.get_next_token()?;
        Ok(token)
    }

    /// Enters one nesting level, failing once `MAX_NESTING_DEPTH` is exceeded.
    ///
    /// Every successful call must be paired with `leave_nesting`.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            let position = match &self.lookahead {
                Some(token) => token.span.start,
                None => self.tokenizer.position(),
            };
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                position,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Builds the error for running out of tokens while `expected` was required.
    pub fn end_of_input(&self, expected: String) -> Error {
        Error::new(
            ErrorImpl::UnexpectedEndOfInput { expected },
            self.tokenizer.position(),
        )
    }

    /// Returns the statement handler registered for the current token, if any.
    pub fn get_stmt_handler(&self) -> Option<StmtHandler> {
        self.current_token_kind()
            .and_then(|kind| self.stmt_lookup.get(&kind).copied())
    }

    /// Returns the binding power of the current token if it is a binary operator.
    pub fn current_binding_power(&self) -> Option<BindingPower> {
        self.current_token_kind()
            .and_then(|kind| self.binding_power_lookup.get(&kind).copied())
    }

    /// Registers a binary operator token at the given precedence level.
    pub fn binary(&mut self, kind: TokenKind, binding_power: BindingPower) {
        self.binding_power_lookup.insert(kind, binding_power);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses source text into a `Program`.
///
/// This is the main entry point of the front end. Each call builds its own
/// parser and tokenizer, so independent calls share no state.
pub fn parse(source: &str) -> Result<Program, Error> {
    Parser::new().parse(source)
}
