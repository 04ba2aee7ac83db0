mod stmt_parser;


pub use stmt_parser::StmtParser;

use crate::expr::Expr;
use serde::Serialize;
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    Return(Option<Expr>),
    Expression(Expr),
    Block(StatementBlock),
    Empty,
}

/// Brace-delimited statement sequence; also the body of every lambda.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatementBlock {
    pub statements: Vec<Statement>,
}

impl StatementBlock {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Body of an expression lambda: `x -> x + 1` returns `x + 1`.
    pub fn implicit_return(value: Expr) -> Self {
        Self {
            statements: vec![Statement::Return(Some(value))],
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Return(Some(value)) => write!(f, "return {};", value),
            Statement::Return(None) => write!(f, "return;"),
            Statement::Expression(expr) => write!(f, "{};", expr),
            Statement::Block(block) => write!(f, "{}", block),
            Statement::Empty => write!(f, ";"),
        }
    }
}

impl Display for StatementBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return write!(f, "{{}}");
        }
        let stmts: Vec<String> = self.statements.iter().map(|s| s.to_string()).collect();
        write!(f, "{{ {} }}", stmts.join(" "))
    }
}
