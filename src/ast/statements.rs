use super::{
    ast::{Expr, NodeType, Stmt},
    expressions::Identifier,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expr,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStatement {
    pub body: Vec<Stmt>,
}

impl BlockStatement {
    pub fn new(body: Vec<Stmt>) -> Self {
        BlockStatement { body }
    }
}

/// Variable Statement
/// `let a, b = 1;` holds one declaration per name, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableStatement {
    pub declarations: Vec<VariableDeclaration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub id: Identifier,
    pub init: Option<Expr>,
}

impl VariableDeclaration {
    pub fn new(id: Identifier, init: Option<Expr>) -> Self {
        VariableDeclaration { id, init }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::VariableDeclaration
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub name: Identifier,
    pub params: Vec<Identifier>,
    pub body: BlockStatement,
}

impl FunctionDeclaration {
    pub fn new(name: Identifier, params: Vec<Identifier>, body: BlockStatement) -> Self {
        FunctionDeclaration { name, params, body }
    }
}

/// Class Declaration
/// The body holds the class's methods; `super_class` is `None` without an `extends` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDeclaration {
    pub id: Identifier,
    pub super_class: Option<Expr>,
    pub body: Vec<FunctionDeclaration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub argument: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub test: Expr,
    pub consequent: Box<Stmt>,
    pub alternate: Option<Box<Stmt>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub test: Expr,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStatement {
    pub body: Box<Stmt>,
    pub test: Expr,
}

/// The init clause of a `for` loop: either `let` declarations or a plain expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    Variable(VariableStatement),
    Expression(Expr),
}

/// For Statement
/// Omitted clauses are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub init: Option<ForInit>,
    pub test: Option<Expr>,
    pub update: Option<Expr>,
    pub body: Box<Stmt>,
}

// CONSTRUCTORS

impl Stmt {
    pub fn expression_statement(expression: Expr) -> Stmt {
        Stmt::Expression(ExpressionStatement { expression })
    }

    pub fn block_statement(body: Vec<Stmt>) -> Stmt {
        Stmt::Block(BlockStatement::new(body))
    }

    pub fn empty_statement() -> Stmt {
        Stmt::Empty
    }

    pub fn variable_statement(declarations: Vec<VariableDeclaration>) -> Stmt {
        Stmt::Variable(VariableStatement { declarations })
    }

    pub fn class_declaration(
        id: Identifier,
        super_class: Option<Expr>,
        body: Vec<FunctionDeclaration>,
    ) -> Stmt {
        Stmt::Class(ClassDeclaration {
            id,
            super_class,
            body,
        })
    }

    pub fn return_statement(argument: Option<Expr>) -> Stmt {
        Stmt::Return(ReturnStatement { argument })
    }

    pub fn if_statement(test: Expr, consequent: Stmt, alternate: Option<Stmt>) -> Stmt {
        Stmt::If(IfStatement {
            test,
            consequent: Box::new(consequent),
            alternate: alternate.map(Box::new),
        })
    }

    pub fn while_statement(test: Expr, body: Stmt) -> Stmt {
        Stmt::While(WhileStatement {
            test,
            body: Box::new(body),
        })
    }

    pub fn do_while_statement(body: Stmt, test: Expr) -> Stmt {
        Stmt::DoWhile(DoWhileStatement {
            body: Box::new(body),
            test,
        })
    }

    pub fn for_statement(
        init: Option<ForInit>,
        test: Option<Expr>,
        update: Option<Expr>,
        body: Stmt,
    ) -> Stmt {
        Stmt::For(ForStatement {
            init,
            test,
            update,
            body: Box::new(body),
        })
    }
}
