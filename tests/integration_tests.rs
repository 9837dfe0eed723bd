//! Integration tests for the front end.
//!
//! These tests go through the public API only: source text in, `Program` or
//! rendered diagnostic out.

use toy_frontend::{
    ast::{
        ast::{Expr, NodeType, Program, Stmt},
        expressions::{
            AssignmentOperator, BinaryOperator, Identifier, LogicalOperator, NumericLiteral,
        },
    },
    errors::errors::ErrorKind,
    format_error,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parse,
};

const SHAPES: &str = "
// Shapes
class Point {
    def constructor(x, y) {
        this.x = x;
        this.y = y;
    }

    def calc() {
        return this.x + this.y;
    }
}

class Point3D extends Point {
    def constructor(x, y, z) {
        super(x, y);
        this.z = z;
    }

    def calc() {
        return super.calc() + this.z;
    }
}

let p = new Point3D(10, 20, 30);
p.calc();
";

#[test]
fn test_parse_class_program() {
    let program = parse(SHAPES).unwrap();

    let kinds = program
        .body
        .iter()
        .map(|stmt| stmt.node_type())
        .collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            NodeType::ClassDeclaration,
            NodeType::ClassDeclaration,
            NodeType::VariableStatement,
            NodeType::ExpressionStatement,
        ]
    );

    match &program.body[2] {
        Stmt::Variable(variable) => {
            let declaration = &variable.declarations[0];
            assert_eq!(declaration.id, Identifier::new("p"));
            assert!(matches!(declaration.init, Some(Expr::New(_))));
        }
        other => panic!("expected a VariableStatement, got {:?}", other),
    }
}

#[test]
fn test_parse_loops_and_functions() {
    let source = "
        def sum(n) {
            let total = 0;
            for (let i = 0; i <= n; i += 1) {
                if (i == 3 || i == 5) ;
                else total += i;
            }
            while (total > 100) total -= 100;
            do { n = n - 1; } while (n > 0);
            return total;
        }
        sum(10);
    ";
    let program = parse(source).unwrap();

    assert_eq!(program.body.len(), 2);
    match &program.body[0] {
        Stmt::Function(function) => {
            let kinds = function
                .body
                .body
                .iter()
                .map(|stmt| stmt.node_type())
                .collect::<Vec<_>>();
            assert_eq!(
                kinds,
                vec![
                    NodeType::VariableStatement,
                    NodeType::ForStatement,
                    NodeType::WhileStatement,
                    NodeType::DoWhileStatement,
                    NodeType::ReturnStatement,
                ]
            );
        }
        other => panic!("expected a FunctionDeclaration, got {:?}", other),
    }
}

#[test]
fn test_parse_expression_tree() {
    let program = parse("x = a && b || c != 2 / y;").unwrap();

    let expected = Expr::assignment_expression(
        AssignmentOperator::Assign,
        Expr::identifier("x"),
        Expr::logical_expression(
            LogicalOperator::Or,
            Expr::logical_expression(
                LogicalOperator::And,
                Expr::identifier("a"),
                Expr::identifier("b"),
            ),
            Expr::binary_expression(
                BinaryOperator::NotEqual,
                Expr::identifier("c"),
                Expr::binary_expression(
                    BinaryOperator::Divide,
                    Expr::Number(NumericLiteral { value: 2.0 }),
                    Expr::identifier("y"),
                ),
            ),
        ),
    );
    assert_eq!(program, Program::new(vec![Stmt::expression_statement(expected)]));
}

#[test]
fn test_parse_is_deterministic() {
    assert_eq!(parse(SHAPES).unwrap(), parse(SHAPES).unwrap());
}

#[test]
fn test_program_can_cross_threads() {
    let program = parse(SHAPES).unwrap();

    let handle = std::thread::spawn(move || program.body.len());
    assert_eq!(handle.join().unwrap(), 4);
}

#[test]
fn test_tokenize_public_api() {
    let tokens = tokenize("let s = 'a';").unwrap();
    let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::SimpleAssign,
            TokenKind::String,
            TokenKind::Semicolon,
        ]
    );
    assert_eq!(tokens[3].value, "'a'");
}

#[test]
fn test_lexical_error_diagnostic() {
    let source = "let a = 1;\nlet b = a # 2;\n";
    let error = parse(source).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(error.to_string(), "Unexpected token: \"#\" at 2:11");

    let rendered = format_error(&error, source, "main.toy");
    assert_eq!(
        rendered,
        "Error: LexicalError: Unexpected token: \"#\"\n\
         -> main.toy\n\
         \x20 |\n\
         2 | let b = a # 2;\n\
         \x20 | ----------^"
    );
}

#[test]
fn test_missing_semicolon_diagnostic_has_tip() {
    let source = "let a = 1\nlet b = 2;";
    let error = parse(source).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);

    let rendered = format_error(&error, source, "main.toy");
    let first_line = rendered.lines().next().unwrap();
    assert_eq!(
        first_line,
        "Error: SyntaxError: Unexpected token: \"let\", expected: \"Semicolon\" (did you miss a semicolon?)"
    );
}

#[test]
fn test_end_of_input_diagnostic() {
    let source = "def f(a, b) {\n    return a;\n";
    let error = parse(source).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert!(error
        .to_string()
        .starts_with("Unexpected end of input"));

    // Rendering an end-of-input position must not panic.
    let rendered = format_error(&error, source, "main.toy");
    assert!(rendered.starts_with("Error: SyntaxError: Unexpected end of input"));
}
