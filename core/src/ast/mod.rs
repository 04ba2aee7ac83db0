mod error;
mod general;
mod lists;
mod parser;
mod terminal;
mod unescape;

#[cfg(test)]
mod unescape_test;

pub use error::{ParseResult, UnexpectedToken};
pub use parser::Parser;
pub use unescape::{unescape_char, unescape_string};

use crate::{
    expr::Expr,
    token::{TokenStream, Tokenizer},
};
use anyhow::Result;
use tracing::debug;

/// Tokenize `source` and parse it as one complete expression.
pub fn parse_expression(source: &str) -> Result<Expr> {
    debug!(len = source.len(), "parsing expression");
    let stream = TokenStream::new(Tokenizer::tokenize(source)?);
    let expr = parse_complete(&stream)?;
    debug!(%expr, "parsed expression");
    Ok(expr)
}

/// Parse one expression from the start of `stream`; anything but whitespace
/// and comments after it is an error at the first leftover token.
pub fn parse_complete(stream: &TokenStream) -> ParseResult<Expr> {
    let mut parser = Parser::new(stream.cursor());
    let expr = parser.parse_expression()?;

    let mut rest = parser.cursor();
    if !rest.trim().is_eof() {
        return Err(UnexpectedToken::new(rest.peek()));
    }
    Ok(expr)
}
