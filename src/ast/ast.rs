use std::fmt::Display;

use super::{
    expressions::{
        AssignmentExpression, BinaryExpression, BooleanLiteral, CallExpression, Identifier,
        LogicalExpression, MemberExpression, NewExpression, NumericLiteral, StringLiteral,
        UnaryExpression,
    },
    statements::{
        BlockStatement, ClassDeclaration, DoWhileStatement, ExpressionStatement,
        ForStatement, FunctionDeclaration, IfStatement, ReturnStatement, VariableStatement,
        WhileStatement,
    },
};

/// Node Types
///
/// The tag of every node the parser can produce.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum NodeType {
    Program,
    ExpressionStatement,
    BlockStatement,
    EmptyStatement,
    VariableStatement,
    VariableDeclaration,
    FunctionDeclaration,
    ClassDeclaration,
    ReturnStatement,
    IfStatement,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    BinaryExpression,
    LogicalExpression,
    UnaryExpression,
    AssignmentExpression,
    MemberExpression,
    CallExpression,
    NewExpression,
    ThisExpression,
    Super,
    Identifier,
    NumericLiteral,
    StringLiteral,
    BooleanLiteral,
    NullLiteral,
}

impl Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The root of a parsed source text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn new(body: Vec<Stmt>) -> Self {
        Program { body }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::Program
    }
}

/// Statement
///
/// Every node that may appear in a statement position.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStatement),
    Block(BlockStatement),
    Empty,
    Variable(VariableStatement),
    Function(FunctionDeclaration),
    Class(ClassDeclaration),
    Return(ReturnStatement),
    If(IfStatement),
    While(WhileStatement),
    DoWhile(DoWhileStatement),
    For(ForStatement),
}

impl Stmt {
    pub fn node_type(&self) -> NodeType {
        match self {
            Stmt::Expression(_) => NodeType::ExpressionStatement,
            Stmt::Block(_) => NodeType::BlockStatement,
            Stmt::Empty => NodeType::EmptyStatement,
            Stmt::Variable(_) => NodeType::VariableStatement,
            Stmt::Function(_) => NodeType::FunctionDeclaration,
            Stmt::Class(_) => NodeType::ClassDeclaration,
            Stmt::Return(_) => NodeType::ReturnStatement,
            Stmt::If(_) => NodeType::IfStatement,
            Stmt::While(_) => NodeType::WhileStatement,
            Stmt::DoWhile(_) => NodeType::DoWhileStatement,
            Stmt::For(_) => NodeType::ForStatement,
        }
    }
}

/// Expression
///
/// Every node that may appear in an expression position.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpression),
    Logical(LogicalExpression),
    Unary(UnaryExpression),
    Assignment(AssignmentExpression),
    Member(MemberExpression),
    Call(CallExpression),
    New(NewExpression),
    This,
    Super,
    Identifier(Identifier),
    Number(NumericLiteral),
    String(StringLiteral),
    Boolean(BooleanLiteral),
    Null,
}

impl Expr {
    pub fn node_type(&self) -> NodeType {
        match self {
            Expr::Binary(_) => NodeType::BinaryExpression,
            Expr::Logical(_) => NodeType::LogicalExpression,
            Expr::Unary(_) => NodeType::UnaryExpression,
            Expr::Assignment(_) => NodeType::AssignmentExpression,
            Expr::Member(_) => NodeType::MemberExpression,
            Expr::Call(_) => NodeType::CallExpression,
            Expr::New(_) => NodeType::NewExpression,
            Expr::This => NodeType::ThisExpression,
            Expr::Super => NodeType::Super,
            Expr::Identifier(_) => NodeType::Identifier,
            Expr::Number(_) => NodeType::NumericLiteral,
            Expr::String(_) => NodeType::StringLiteral,
            Expr::Boolean(_) => NodeType::BooleanLiteral,
            Expr::Null => NodeType::NullLiteral,
        }
    }

    /// Whether the expression may stand on the left of an assignment.
    pub fn is_assignment_target(&self) -> bool {
        matches!(self, Expr::Identifier(_) | Expr::Member(_))
    }
}
