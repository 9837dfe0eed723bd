use log::trace;

use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{
            BlockStatement, ForInit, FunctionDeclaration, VariableDeclaration, VariableStatement,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_assignment_expr, parse_expr, parse_identifier, parse_lhs_expr},
    parser::Parser,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    trace!(target: "toy_frontend", "statement at {:?}", parser.current_token_kind());

    parser.enter_nesting()?;
    let stmt = match parser.get_stmt_handler() {
        Some(handler) => handler(parser),
        None => parse_expression_stmt(parser),
    };
    parser.leave_nesting();

    stmt
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser)?;
    parser.eat(TokenKind::Semicolon)?;

    Ok(Stmt::expression_statement(expression))
}

pub fn parse_empty_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.eat(TokenKind::Semicolon)?;

    Ok(Stmt::empty_statement())
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

/// `{` StatementList? `}`
pub fn parse_block(parser: &mut Parser) -> Result<BlockStatement, Error> {
    parser.eat(TokenKind::OpenCurly)?;

    let mut statements = Vec::new();
    while !parser.is(TokenKind::CloseCurly) && parser.current_token().is_some() {
        statements.push(parse_stmt(parser)?);
    }

    parser.eat(TokenKind::CloseCurly)?;

    Ok(BlockStatement::new(statements))
}

pub fn parse_var_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.eat(TokenKind::Let)?;
    let declarations = parse_var_decl_list(parser)?;
    parser.eat(TokenKind::Semicolon)?;

    Ok(Stmt::variable_statement(declarations))
}

/// One or more comma separated `name (= value)?` declarations.
fn parse_var_decl_list(parser: &mut Parser) -> Result<Vec<VariableDeclaration>, Error> {
    let mut declarations = vec![];

    loop {
        let id = parse_identifier(parser)?;

        let init = if parser.is(TokenKind::SimpleAssign) {
            parser.eat(TokenKind::SimpleAssign)?;
            Some(parse_assignment_expr(parser)?)
        } else {
            None
        };

        declarations.push(VariableDeclaration::new(id, init));

        if !parser.is(TokenKind::Comma) {
            break;
        }
        parser.eat(TokenKind::Comma)?;
    }

    Ok(declarations)
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.eat(TokenKind::If)?;

    parser.eat(TokenKind::OpenParen)?;
    let test = parse_expr(parser)?;
    parser.eat(TokenKind::CloseParen)?;

    let consequent = parse_stmt(parser)?;

    // An `else` always belongs to the innermost `if` still waiting for one.
    let alternate = if parser.is(TokenKind::Else) {
        parser.eat(TokenKind::Else)?;
        Some(parse_stmt(parser)?)
    } else {
        None
    };

    Ok(Stmt::if_statement(test, consequent, alternate))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.eat(TokenKind::While)?;

    parser.eat(TokenKind::OpenParen)?;
    let test = parse_expr(parser)?;
    parser.eat(TokenKind::CloseParen)?;

    let body = parse_stmt(parser)?;

    Ok(Stmt::while_statement(test, body))
}

pub fn parse_do_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.eat(TokenKind::Do)?;

    let body = parse_stmt(parser)?;

    parser.eat(TokenKind::While)?;
    parser.eat(TokenKind::OpenParen)?;
    let test = parse_expr(parser)?;
    parser.eat(TokenKind::CloseParen)?;
    parser.eat(TokenKind::Semicolon)?;

    Ok(Stmt::do_while_statement(body, test))
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.eat(TokenKind::For)?;
    parser.eat(TokenKind::OpenParen)?;

    let init = if parser.is(TokenKind::Semicolon) {
        None
    } else {
        Some(parse_for_init(parser)?)
    };
    parser.eat(TokenKind::Semicolon)?;

    let test = if parser.is(TokenKind::Semicolon) {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.eat(TokenKind::Semicolon)?;

    let update = if parser.is(TokenKind::CloseParen) {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.eat(TokenKind::CloseParen)?;

    let body = parse_stmt(parser)?;

    Ok(Stmt::for_statement(init, test, update, body))
}

fn parse_for_init(parser: &mut Parser) -> Result<ForInit, Error> {
    if parser.is(TokenKind::Let) {
        parser.eat(TokenKind::Let)?;
        let declarations = parse_var_decl_list(parser)?;
        return Ok(ForInit::Variable(VariableStatement { declarations }));
    }

    Ok(ForInit::Expression(parse_expr(parser)?))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Function(parse_fn_decl(parser)?))
}

/// `def` Identifier `(` FormalParameterList? `)` BlockStatement
///
/// Shared by top-level functions and class methods.
pub fn parse_fn_decl(parser: &mut Parser) -> Result<FunctionDeclaration, Error> {
    parser.eat(TokenKind::Def)?;

    let name = parse_identifier(parser)?;

    parser.eat(TokenKind::OpenParen)?;
    let params = if parser.is(TokenKind::CloseParen) {
        vec![]
    } else {
        parse_formal_params(parser)?
    };
    parser.eat(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;

    Ok(FunctionDeclaration::new(name, params, body))
}

fn parse_formal_params(parser: &mut Parser) -> Result<Vec<Identifier>, Error> {
    let mut params = vec![parse_identifier(parser)?];

    while parser.is(TokenKind::Comma) {
        parser.eat(TokenKind::Comma)?;
        params.push(parse_identifier(parser)?);
    }

    Ok(params)
}

pub fn parse_class_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.eat(TokenKind::Class)?;

    let id = parse_identifier(parser)?;

    let super_class = if parser.is(TokenKind::Extends) {
        parser.eat(TokenKind::Extends)?;
        Some(parse_lhs_expr(parser)?)
    } else {
        None
    };

    parser.eat(TokenKind::OpenCurly)?;

    let mut methods = Vec::new();
    while !parser.is(TokenKind::CloseCurly) && parser.current_token().is_some() {
        methods.push(parse_fn_decl(parser)?);
    }

    parser.eat(TokenKind::CloseCurly)?;

    Ok(Stmt::class_declaration(id, super_class, methods))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.eat(TokenKind::Return)?;

    let argument = if parser.is(TokenKind::Semicolon) {
        None
    } else {
        Some(parse_expr(parser)?)
    };

    parser.eat(TokenKind::Semicolon)?;

    Ok(Stmt::return_statement(argument))
}
