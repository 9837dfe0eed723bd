use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AssignmentOperator, BinaryOperator, Identifier, LogicalOperator, UnaryOperator,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Expression, the loosest level: an assignment or anything tighter.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_assignment_expr(parser)
}

/// Right-associative: `a = b = 1` is `a = (b = 1)`.
///
/// Each call counts as one nesting level; every nested expression passes through here.
pub fn parse_assignment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    let expr = parse_assignment(parser);
    parser.leave_nesting();

    expr
}

fn parse_assignment(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_binary_expr(parser, BindingPower::LogicalOr)?;

    let kind = match parser.current_token_kind() {
        Some(kind @ (TokenKind::SimpleAssign | TokenKind::ComplexAssign)) => kind,
        _ => return Ok(left),
    };

    let operator_token = parser.eat(kind)?;
    if !left.is_assignment_target() {
        return Err(Error::new(
            ErrorImpl::InvalidAssignmentTarget,
            operator_token.span.start,
        ));
    }

    let operator = AssignmentOperator::from_token(&operator_token)?;
    let right = parse_assignment_expr(parser)?;

    Ok(Expr::assignment_expression(operator, left, right))
}

/// Parses one binary precedence level.
///
/// The left operand is parsed at the next tighter level, then operators of
/// exactly this level are folded in from the left, which makes every binary
/// level left-associative.
pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let mut left = parse_operand(parser, bp)?;

    while parser.current_binding_power() == Some(bp) {
        let kind = match parser.current_token_kind() {
            Some(kind) => kind,
            None => break,
        };
        let operator_token = parser.eat(kind)?;
        let right = parse_operand(parser, bp)?;

        left = if bp.is_logical() {
            Expr::logical_expression(LogicalOperator::from_token(&operator_token)?, left, right)
        } else {
            Expr::binary_expression(BinaryOperator::from_token(&operator_token)?, left, right)
        };
    }

    Ok(left)
}

fn parse_operand(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    match bp.next() {
        Some(next) => parse_binary_expr(parser, next),
        None => parse_unary_expr(parser),
    }
}

/// Prefix `!`, `-` and `+`, which may be stacked: `!-x`.
pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    let expr = parse_prefixed(parser);
    parser.leave_nesting();

    expr
}

fn parse_prefixed(parser: &mut Parser) -> Result<Expr, Error> {
    let kind = match parser.current_token_kind() {
        Some(kind @ (TokenKind::LogicalNot | TokenKind::AdditiveOperator)) => kind,
        _ => return parse_lhs_expr(parser),
    };

    let operator_token = parser.eat(kind)?;
    let operator = UnaryOperator::from_token(&operator_token)?;
    let argument = parse_unary_expr(parser)?;

    Ok(Expr::unary_expression(operator, argument))
}

/// A primary (or `new`) expression followed by any chain of `.x`, `[x]` and `(args)`,
/// applied left to right.
pub fn parse_lhs_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = if parser.is(TokenKind::New) {
        parse_new_expr(parser)?
    } else {
        parse_primary_expr(parser)?
    };

    loop {
        expr = match parser.current_token_kind() {
            Some(TokenKind::Dot | TokenKind::OpenBracket) => parse_member_access(parser, expr)?,
            Some(TokenKind::OpenParen) => {
                let arguments = parse_arguments(parser)?;
                Expr::call_expression(expr, arguments)
            }
            _ => return Ok(expr),
        };
    }
}

/// `new` MemberExpression Arguments
pub fn parse_new_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.eat(TokenKind::New)?;

    let callee = parse_member_expr(parser)?;
    let arguments = parse_arguments(parser)?;

    Ok(Expr::new_expression(callee, arguments))
}

/// A primary expression followed by member accesses only; calls end it.
pub fn parse_member_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut object = parse_primary_expr(parser)?;

    while parser.is(TokenKind::Dot) || parser.is(TokenKind::OpenBracket) {
        object = parse_member_access(parser, object)?;
    }

    Ok(object)
}

fn parse_member_access(parser: &mut Parser, object: Expr) -> Result<Expr, Error> {
    if parser.is(TokenKind::Dot) {
        parser.eat(TokenKind::Dot)?;
        let property = parse_identifier(parser)?;
        return Ok(Expr::member_expression(
            false,
            object,
            Expr::Identifier(property),
        ));
    }

    parser.eat(TokenKind::OpenBracket)?;
    let property = parse_expr(parser)?;
    parser.eat(TokenKind::CloseBracket)?;

    Ok(Expr::member_expression(true, object, property))
}

/// `(` (AssignmentExpression (`,` AssignmentExpression)*)? `)`
pub fn parse_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parser.eat(TokenKind::OpenParen)?;

    let mut args = vec![];
    if !parser.is(TokenKind::CloseParen) {
        args.push(parse_assignment_expr(parser)?);

        while parser.is(TokenKind::Comma) {
            parser.eat(TokenKind::Comma)?;
            args.push(parse_assignment_expr(parser)?);
        }
    }

    parser.eat(TokenKind::CloseParen)?;

    Ok(args)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let kind = match parser.current_token() {
        Some(token) => token.kind,
        None => return Err(parser.end_of_input(String::from("an expression"))),
    };

    match kind {
        TokenKind::Number => Expr::numeric_literal(&parser.eat(kind)?),
        TokenKind::String => Ok(Expr::string_literal(&parser.eat(kind)?)),
        TokenKind::True | TokenKind::False => Ok(Expr::boolean_literal(&parser.eat(kind)?)),
        TokenKind::Null => {
            parser.eat(kind)?;
            Ok(Expr::null_literal())
        }
        TokenKind::Identifier => Ok(Expr::Identifier(parse_identifier(parser)?)),
        TokenKind::This => {
            parser.eat(kind)?;
            Ok(Expr::this_expression())
        }
        TokenKind::Super => {
            parser.eat(kind)?;
            Ok(Expr::super_expression())
        }
        TokenKind::OpenParen => parse_grouping_expr(parser),
        _ => Err(unexpected_primary(parser)),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.eat(TokenKind::OpenParen)?;
    let expr = parse_expr(parser)?;
    parser.eat(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Identifier, Error> {
    let token = parser.eat(TokenKind::Identifier)?;
    Ok(Identifier::new(token.value))
}

fn unexpected_primary(parser: &Parser) -> Error {
    match parser.current_token() {
        Some(token) => Error::new(
            ErrorImpl::UnexpectedPrimaryExpression {
                token: token.value.clone(),
            },
            token.span.start,
        ),
        None => parser.end_of_input(String::from("an expression")),
    }
}
