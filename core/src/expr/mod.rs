use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use serde::{Serialize, Serializer};

use crate::stmt::StatementBlock;

mod display;


/// Grammar (abridged):
/// expr       ::= lambda | comparison
/// lambda     ::= (params | name) arrow (block | expr)
/// comparison ::= additive {cmp_op additive}
/// additive   ::= mult {('+' | '-') mult}
/// mult       ::= postfix {('*' | '/' | '%') postfix}
/// postfix    ::= primary {'.' name | '[' expr ']' | args}
/// primary    ::= '(' expr ')' | literal | class_literal | name
/// class_literal ::= name {'.' name} '.' 'class'
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Null,
    Boolean(bool),
    Integer(#[serde(serialize_with = "serialize_display")] BigInt),
    Float(#[serde(serialize_with = "serialize_display")] BigDecimal),
    String(String),
    Char(char),
    Variable(Variable),
    ClassLiteral(ClassLiteral),
    /// Parenthesized expression; kept so printers can reproduce the parentheses.
    ExpressionGroup(Box<Expr>),
    PropertyAccess {
        target: Box<Expr>,
        member: String,
    },
    ArrayAccess {
        target: Box<Expr>,
        index: Box<Expr>,
    },
    MethodCall {
        target: Box<Expr>,
        arguments: ArgumentList,
    },
    Addition(Box<Expr>, Box<Expr>),
    Subtraction(Box<Expr>, Box<Expr>),
    Multiplication(Box<Expr>, Box<Expr>),
    Division(Box<Expr>, Box<Expr>),
    Modulo(Box<Expr>, Box<Expr>),
    /// Every comparison operator shares this node; `operator` is the token text.
    Comparison {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Lambda {
        parameters: ParameterList,
        body: StatementBlock,
    },
}

fn serialize_display<T: std::fmt::Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

impl Expr {
    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(Variable::new(name))
    }

    pub fn integer(value: impl Into<BigInt>) -> Self {
        Expr::Integer(value.into())
    }

    pub fn group(inner: Expr) -> Self {
        Expr::ExpressionGroup(Box::new(inner))
    }

    pub fn property(target: Expr, member: impl Into<String>) -> Self {
        Expr::PropertyAccess {
            target: Box::new(target),
            member: member.into(),
        }
    }

    pub fn index(target: Expr, index: Expr) -> Self {
        Expr::ArrayAccess {
            target: Box::new(target),
            index: Box::new(index),
        }
    }

    pub fn call(target: Expr, arguments: Vec<Expr>) -> Self {
        Expr::MethodCall {
            target: Box::new(target),
            arguments: ArgumentList(arguments),
        }
    }

    pub fn addition(left: Expr, right: Expr) -> Self {
        Expr::Addition(Box::new(left), Box::new(right))
    }

    pub fn subtraction(left: Expr, right: Expr) -> Self {
        Expr::Subtraction(Box::new(left), Box::new(right))
    }

    pub fn multiplication(left: Expr, right: Expr) -> Self {
        Expr::Multiplication(Box::new(left), Box::new(right))
    }

    pub fn division(left: Expr, right: Expr) -> Self {
        Expr::Division(Box::new(left), Box::new(right))
    }

    pub fn modulo(left: Expr, right: Expr) -> Self {
        Expr::Modulo(Box::new(left), Box::new(right))
    }

    pub fn comparison(operator: impl Into<String>, left: Expr, right: Expr) -> Self {
        Expr::Comparison {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn lambda(parameters: ParameterList, body: StatementBlock) -> Self {
        Expr::Lambda { parameters, body }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Qualified type reference such as `java.lang.String.class`.
/// Always holds at least one segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClassLiteral {
    segments: Vec<String>,
}

impl ClassLiteral {
    pub fn new(first: impl Into<String>) -> Self {
        Self {
            segments: vec![first.into()],
        }
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParameterDefinition {
    pub variable: Variable,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ParameterList(pub Vec<ParameterDefinition>);

impl ParameterList {
    pub fn single(variable: Variable) -> Self {
        ParameterList(vec![ParameterDefinition { variable }])
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|p| p.variable.name.as_str())
    }
}

impl<S: Into<String>> FromIterator<S> for ParameterList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        ParameterList(
            iter.into_iter()
                .map(|name| ParameterDefinition {
                    variable: Variable::new(name),
                })
                .collect(),
        )
    }
}

/// Call arguments in evaluation (textual) order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArgumentList(pub Vec<Expr>);
