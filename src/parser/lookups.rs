use std::collections::HashMap;

use crate::{ast::ast::Stmt, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

/// Binary operator precedence levels, loosest first.
#[derive(PartialEq, PartialOrd, Eq, Hash, Clone, Copy, Debug)]
pub enum BindingPower {
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
}

impl BindingPower {
    /// The next tighter level, or `None` past the last binary level.
    pub fn next(self) -> Option<BindingPower> {
        match self {
            BindingPower::LogicalOr => Some(BindingPower::LogicalAnd),
            BindingPower::LogicalAnd => Some(BindingPower::Equality),
            BindingPower::Equality => Some(BindingPower::Relational),
            BindingPower::Relational => Some(BindingPower::Additive),
            BindingPower::Additive => Some(BindingPower::Multiplicative),
            BindingPower::Multiplicative => None,
        }
    }

    /// Whether operators at this level build `LogicalExpression` nodes.
    pub fn is_logical(self) -> bool {
        matches!(self, BindingPower::LogicalOr | BindingPower::LogicalAnd)
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical
    parser.binary(TokenKind::LogicalOr, BindingPower::LogicalOr);
    parser.binary(TokenKind::LogicalAnd, BindingPower::LogicalAnd);

    // Equality and relational
    parser.binary(TokenKind::EqualityOperator, BindingPower::Equality);
    parser.binary(TokenKind::RelationalOperator, BindingPower::Relational);

    // Additive and multiplicative
    parser.binary(TokenKind::AdditiveOperator, BindingPower::Additive);
    parser.binary(TokenKind::MultiplicativeOperator, BindingPower::Multiplicative);

    // Statements
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
    parser.stmt(TokenKind::Semicolon, parse_empty_stmt);
    parser.stmt(TokenKind::Let, parse_var_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::Do, parse_do_while_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);
    parser.stmt(TokenKind::Def, parse_fn_decl_stmt);
    parser.stmt(TokenKind::Class, parse_class_decl_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
