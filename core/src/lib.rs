//! Backtracking recursive-descent parser for Java-like expressions.
//!
//! ```text
//! source -> token::Tokenizer -> token::TokenStream -> ast::Parser -> expr::Expr
//! ```
//!
//! The parser works on copyable [`token::TokenCursor`]s: each ambiguous
//! construct is tried on a copy and only a successful attempt is committed.

pub mod ast;
pub mod expr;
pub mod stmt;
pub mod token;

pub use ast::{ParseResult, Parser, UnexpectedToken, parse_complete, parse_expression};
pub use expr::Expr;
