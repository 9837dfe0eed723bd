use std::fmt::Display;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::ast::Expr;

// OPERATORS

fn unknown_operator(token: &Token) -> Error {
    Error::new(
        ErrorImpl::UnknownOperator {
            token: token.value.clone(),
        },
        token.span.start,
    )
}

/// Operators of `BinaryExpression`: arithmetic, equality and relational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl BinaryOperator {
    pub fn from_token(token: &Token) -> Result<Self, Error> {
        match token.value.as_str() {
            "+" => Ok(BinaryOperator::Add),
            "-" => Ok(BinaryOperator::Subtract),
            "*" => Ok(BinaryOperator::Multiply),
            "/" => Ok(BinaryOperator::Divide),
            "==" => Ok(BinaryOperator::Equal),
            "!=" => Ok(BinaryOperator::NotEqual),
            "<" => Ok(BinaryOperator::Less),
            "<=" => Ok(BinaryOperator::LessEqual),
            ">" => Ok(BinaryOperator::Greater),
            ">=" => Ok(BinaryOperator::GreaterEqual),
            _ => Err(unknown_operator(token)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEqual => ">=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    pub fn from_token(token: &Token) -> Result<Self, Error> {
        match token.value.as_str() {
            "&&" => Ok(LogicalOperator::And),
            "||" => Ok(LogicalOperator::Or),
            _ => Err(unknown_operator(token)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOperator::And => "&&",
            LogicalOperator::Or => "||",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Not,
    Minus,
    Plus,
}

impl UnaryOperator {
    pub fn from_token(token: &Token) -> Result<Self, Error> {
        match token.value.as_str() {
            "!" => Ok(UnaryOperator::Not),
            "-" => Ok(UnaryOperator::Minus),
            "+" => Ok(UnaryOperator::Plus),
            _ => Err(unknown_operator(token)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOperator::Not => "!",
            UnaryOperator::Minus => "-",
            UnaryOperator::Plus => "+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOperator {
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
}

impl AssignmentOperator {
    pub fn from_token(token: &Token) -> Result<Self, Error> {
        match token.value.as_str() {
            "=" => Ok(AssignmentOperator::Assign),
            "+=" => Ok(AssignmentOperator::AddAssign),
            "-=" => Ok(AssignmentOperator::SubtractAssign),
            "*=" => Ok(AssignmentOperator::MultiplyAssign),
            "/=" => Ok(AssignmentOperator::DivideAssign),
            _ => Err(unknown_operator(token)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::AddAssign => "+=",
            AssignmentOperator::SubtractAssign => "-=",
            AssignmentOperator::MultiplyAssign => "*=",
            AssignmentOperator::DivideAssign => "/=",
        }
    }
}

macro_rules! display_as_str {
    ($($operator:ty),*) => {
        $(
            impl Display for $operator {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }
        )*
    };
}

display_as_str!(BinaryOperator, LogicalOperator, UnaryOperator, AssignmentOperator);

// LITERALS

/// Numeric Literal
#[derive(Debug, Clone, PartialEq)]
pub struct NumericLiteral {
    pub value: f64,
}

/// String Literal
/// Holds the content between the quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub value: bool,
}

/// Identifier
/// A bare name. Also used for declaration names, parameters and `a.b` properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

// COMPLEX

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Logical Expression
/// `&&` and `||`, kept apart from `BinaryExpression` because they short-circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpression {
    pub operator: LogicalOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub argument: Box<Expr>,
}

/// Assignment Expression
/// `left` is always an `Identifier` or a `MemberExpression`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpression {
    pub operator: AssignmentOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Member Expression
/// `a.b` has `computed == false` and an `Identifier` property, `a[b]` has `computed == true`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpression {
    pub computed: bool,
    pub object: Box<Expr>,
    pub property: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExpression {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

// CONSTRUCTORS

impl Expr {
    pub fn binary_expression(operator: BinaryOperator, left: Expr, right: Expr) -> Expr {
        Expr::Binary(BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn logical_expression(operator: LogicalOperator, left: Expr, right: Expr) -> Expr {
        Expr::Logical(LogicalExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn unary_expression(operator: UnaryOperator, argument: Expr) -> Expr {
        Expr::Unary(UnaryExpression {
            operator,
            argument: Box::new(argument),
        })
    }

    pub fn assignment_expression(operator: AssignmentOperator, left: Expr, right: Expr) -> Expr {
        Expr::Assignment(AssignmentExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn member_expression(computed: bool, object: Expr, property: Expr) -> Expr {
        Expr::Member(MemberExpression {
            computed,
            object: Box::new(object),
            property: Box::new(property),
        })
    }

    pub fn call_expression(callee: Expr, arguments: Vec<Expr>) -> Expr {
        Expr::Call(CallExpression {
            callee: Box::new(callee),
            arguments,
        })
    }

    pub fn new_expression(callee: Expr, arguments: Vec<Expr>) -> Expr {
        Expr::New(NewExpression {
            callee: Box::new(callee),
            arguments,
        })
    }

    pub fn this_expression() -> Expr {
        Expr::This
    }

    pub fn super_expression() -> Expr {
        Expr::Super
    }

    pub fn identifier(name: impl Into<String>) -> Expr {
        Expr::Identifier(Identifier::new(name))
    }

    /// Builds a numeric literal from a `Number` token's text.
    pub fn numeric_literal(token: &Token) -> Result<Expr, Error> {
        let value = token.value.parse::<f64>().map_err(|_| {
            Error::new(
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                },
                token.span.start,
            )
        })?;

        Ok(Expr::Number(NumericLiteral { value }))
    }

    /// Builds a string literal from a `String` token, dropping the surrounding quotes.
    pub fn string_literal(token: &Token) -> Expr {
        let end = token.value.len().saturating_sub(1);
        let value = token.value.get(1..end).unwrap_or_default().to_string();

        Expr::String(StringLiteral { value })
    }

    pub fn boolean_literal(token: &Token) -> Expr {
        Expr::Boolean(BooleanLiteral {
            value: token.kind == TokenKind::True,
        })
    }

    pub fn null_literal() -> Expr {
        Expr::Null
    }
}
