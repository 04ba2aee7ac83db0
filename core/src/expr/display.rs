use super::{ArgumentList, ClassLiteral, Expr, ParameterList, Variable};
use crate::stmt::Statement;
use std::fmt::{self, Display};

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Null => write!(f, "null"),
            Expr::Boolean(value) => write!(f, "{}", value),
            Expr::Integer(value) => write!(f, "{}", value),
            Expr::Float(value) => write!(f, "{}", value),
            Expr::String(value) => write!(f, "\"{}\"", escape(value, '"')),
            Expr::Char(value) => write!(f, "'{}'", escape(&value.to_string(), '\'')),
            Expr::Variable(var) => write!(f, "{}", var),
            Expr::ClassLiteral(class) => write!(f, "{}", class),
            Expr::ExpressionGroup(inner) => write!(f, "({})", inner),
            Expr::PropertyAccess { target, member } => write!(f, "{}.{}", target, member),
            Expr::ArrayAccess { target, index } => write!(f, "{}[{}]", target, index),
            Expr::MethodCall { target, arguments } => write!(f, "{}({})", target, arguments),
            Expr::Addition(left, right) => write!(f, "{left} + {right}"),
            Expr::Subtraction(left, right) => write!(f, "{left} - {right}"),
            Expr::Multiplication(left, right) => write!(f, "{left} * {right}"),
            Expr::Division(left, right) => write!(f, "{left} / {right}"),
            Expr::Modulo(left, right) => write!(f, "{left} % {right}"),
            Expr::Comparison { operator, left, right } => write!(f, "{left} {operator} {right}"),
            Expr::Lambda { parameters, body } => {
                // single implicit return prints in expression form
                match body.statements.as_slice() {
                    [Statement::Return(Some(value))] => write!(f, "{} -> {}", parameters, value),
                    _ => write!(f, "{} -> {}", parameters, body),
                }
            }
        }
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Display for ClassLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.class", self.segments().join("."))
    }
}

impl Display for ParameterList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.names().collect();
        write!(f, "({})", names.join(", "))
    }
}

impl Display for ArgumentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self.0.iter().map(|a| a.to_string()).collect();
        write!(f, "{}", args.join(", "))
    }
}

/// Inverse of the parser's unescaping for the characters it understands.
fn escape(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{c}' => out.push_str("\\f"),
            '\u{8}' => out.push_str("\\b"),
            '\0' => out.push_str("\\0"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}
