//! Unit tests for the AST node model.

use crate::errors::errors::{ErrorImpl, ErrorKind};
use crate::lexer::lexer::tokenize;
use crate::lexer::tokens::{Token, TokenKind};
use crate::{Position, Span, MK_TOKEN};

use super::{
    ast::{Expr, NodeType, Program, Stmt},
    expressions::{
        AssignmentOperator, BinaryOperator, Identifier, LogicalOperator, NumericLiteral,
        StringLiteral, UnaryOperator,
    },
    statements::{
        BlockStatement, ForInit, FunctionDeclaration, VariableDeclaration, VariableStatement,
    },
};

fn token(source: &str) -> Token {
    tokenize(source).unwrap().remove(0)
}

#[test]
fn test_string_literal_strips_quotes() {
    assert_eq!(
        Expr::string_literal(&token("\"42\"")),
        Expr::String(StringLiteral {
            value: "42".to_string()
        })
    );
    assert_eq!(
        Expr::string_literal(&token("'hello world'")),
        Expr::String(StringLiteral {
            value: "hello world".to_string()
        })
    );
    assert_eq!(
        Expr::string_literal(&token("''")),
        Expr::String(StringLiteral {
            value: String::new()
        })
    );
}

#[test]
fn test_numeric_literal_converts_text() {
    assert_eq!(
        Expr::numeric_literal(&token("42")).unwrap(),
        Expr::Number(NumericLiteral { value: 42.0 })
    );
    assert_eq!(
        Expr::numeric_literal(&token("3.5")).unwrap(),
        Expr::Number(NumericLiteral { value: 3.5 })
    );
}

#[test]
fn test_numeric_literal_rejects_bad_text() {
    let bad = MK_TOKEN!(
        TokenKind::Number,
        String::from("4x"),
        Span {
            start: Position::start(),
            end: Position::start()
        }
    );

    let error = Expr::numeric_literal(&bad).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Syntax);
}

#[test]
fn test_boolean_literal() {
    assert_eq!(
        Expr::boolean_literal(&token("true")).node_type(),
        NodeType::BooleanLiteral
    );
    assert!(matches!(
        Expr::boolean_literal(&token("false")),
        Expr::Boolean(ref b) if !b.value
    ));
    assert!(matches!(
        Expr::boolean_literal(&token("true")),
        Expr::Boolean(ref b) if b.value
    ));
}

#[test]
fn test_operators_from_tokens() {
    assert_eq!(
        BinaryOperator::from_token(&token("<=")).unwrap(),
        BinaryOperator::LessEqual
    );
    assert_eq!(
        LogicalOperator::from_token(&token("||")).unwrap(),
        LogicalOperator::Or
    );
    assert_eq!(
        UnaryOperator::from_token(&token("!")).unwrap(),
        UnaryOperator::Not
    );
    assert_eq!(
        AssignmentOperator::from_token(&token("*=")).unwrap(),
        AssignmentOperator::MultiplyAssign
    );

    let error = BinaryOperator::from_token(&token("&&")).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(
        *error.get_cause(),
        ErrorImpl::UnknownOperator {
            token: "&&".to_string()
        }
    );
    assert!(AssignmentOperator::from_token(&token("==")).is_err());
}

#[test]
fn test_operator_display() {
    assert_eq!(BinaryOperator::NotEqual.to_string(), "!=");
    assert_eq!(LogicalOperator::And.to_string(), "&&");
    assert_eq!(UnaryOperator::Minus.to_string(), "-");
    assert_eq!(AssignmentOperator::DivideAssign.to_string(), "/=");
}

#[test]
fn test_node_types() {
    let one = || Expr::Number(NumericLiteral { value: 1.0 });

    assert_eq!(Program::default().node_type(), NodeType::Program);
    assert_eq!(Stmt::empty_statement().node_type(), NodeType::EmptyStatement);
    assert_eq!(
        Stmt::block_statement(vec![]).node_type(),
        NodeType::BlockStatement
    );
    assert_eq!(
        Stmt::return_statement(None).node_type(),
        NodeType::ReturnStatement
    );
    assert_eq!(
        Stmt::while_statement(one(), Stmt::empty_statement()).node_type(),
        NodeType::WhileStatement
    );
    assert_eq!(
        Stmt::do_while_statement(Stmt::empty_statement(), one()).node_type(),
        NodeType::DoWhileStatement
    );
    assert_eq!(
        Stmt::for_statement(None, None, None, Stmt::empty_statement()).node_type(),
        NodeType::ForStatement
    );
    assert_eq!(
        Stmt::Function(FunctionDeclaration::new(
            Identifier::new("f"),
            vec![],
            BlockStatement::default()
        ))
        .node_type(),
        NodeType::FunctionDeclaration
    );
    assert_eq!(
        Stmt::class_declaration(Identifier::new("A"), None, vec![]).node_type(),
        NodeType::ClassDeclaration
    );
    assert_eq!(
        VariableDeclaration::new(Identifier::new("x"), None).node_type(),
        NodeType::VariableDeclaration
    );
    assert_eq!(Expr::this_expression().node_type(), NodeType::ThisExpression);
    assert_eq!(Expr::super_expression().node_type(), NodeType::Super);
    assert_eq!(Expr::null_literal().node_type(), NodeType::NullLiteral);
    assert_eq!(
        Expr::new_expression(Expr::identifier("A"), vec![]).node_type(),
        NodeType::NewExpression
    );
}

#[test]
fn test_if_statement_without_alternate() {
    let stmt = Stmt::if_statement(Expr::identifier("x"), Stmt::empty_statement(), None);

    match stmt {
        Stmt::If(if_stmt) => {
            assert_eq!(if_stmt.test, Expr::identifier("x"));
            assert_eq!(*if_stmt.consequent, Stmt::Empty);
            assert!(if_stmt.alternate.is_none());
        }
        other => panic!("expected an IfStatement, got {:?}", other),
    }
}

#[test]
fn test_for_init_variants() {
    let init = ForInit::Variable(VariableStatement {
        declarations: vec![VariableDeclaration::new(Identifier::new("i"), None)],
    });
    let stmt = Stmt::for_statement(Some(init.clone()), None, None, Stmt::empty_statement());

    match stmt {
        Stmt::For(for_stmt) => assert_eq!(for_stmt.init, Some(init)),
        other => panic!("expected a ForStatement, got {:?}", other),
    }
}

#[test]
fn test_assignment_targets() {
    assert!(Expr::identifier("a").is_assignment_target());
    assert!(
        Expr::member_expression(false, Expr::identifier("a"), Expr::identifier("b"))
            .is_assignment_target()
    );
    assert!(!Expr::null_literal().is_assignment_target());
    assert!(!Expr::call_expression(Expr::identifier("f"), vec![]).is_assignment_target());
}

#[test]
fn test_tree_is_send() {
    fn assert_send<T: Send + Sync>() {}
    assert_send::<Program>();
}
