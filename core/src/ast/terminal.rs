use super::{ParseResult, Parser, UnexpectedToken, unescape_char, unescape_string};
use crate::{
    expr::{ClassLiteral, Expr},
    token::{Token, TokenKind},
};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::str::FromStr;
use tracing::trace;

impl<'a> Parser<'a> {
    /// Literals, names and class literals, dispatched on the token kind alone.
    pub(super) fn parse_terminal_expression(&mut self) -> ParseResult<Expr> {
        let token = self.cursor.trim().peek();
        let expr = match token.kind {
            TokenKind::NullLiteral => Expr::Null,
            TokenKind::BooleanLiteral => Expr::Boolean(token.text == "true"),
            TokenKind::DecimalIntLiteral => Expr::Integer(parse_integer(token, 0, 10)?),
            TokenKind::HexIntLiteral => Expr::Integer(parse_integer(token, 2, 16)?),
            TokenKind::BinaryIntLiteral => Expr::Integer(parse_integer(token, 2, 2)?),
            TokenKind::DecimalFloatLiteral => {
                let value = BigDecimal::from_str(&token.text).map_err(|_| UnexpectedToken::new(token))?;
                Expr::Float(value)
            }
            TokenKind::StringLiteral => Expr::String(unescape_string(strip_quotes(token)?)),
            TokenKind::CharLiteral => {
                let value = unescape_char(strip_quotes(token)?).ok_or_else(|| UnexpectedToken::new(token))?;
                Expr::Char(value)
            }
            TokenKind::Name => return Ok(self.parse_name()),
            _ => return Err(UnexpectedToken::new(self.cursor.pop())),
        };
        self.cursor.pop();
        Ok(expr)
    }

    /// A name heads either a class literal or a plain variable.
    fn parse_name(&mut self) -> Expr {
        let mut attempt = self.fork();
        match attempt.parse_class_literal() {
            Ok(class) => {
                self.commit(&attempt);
                Expr::ClassLiteral(class)
            }
            Err(err) => {
                trace!(at = err.pos(), "not a class literal, falling back to variable");
                Expr::variable(&self.cursor.pop().text)
            }
        }
    }

    /// `a.b.c.class`
    fn parse_class_literal(&mut self) -> ParseResult<ClassLiteral> {
        let first = self.cursor.trim().pop();
        if !first.is(TokenKind::Name) {
            return Err(UnexpectedToken::new(first));
        }
        let mut class = ClassLiteral::new(&first.text);

        loop {
            let dot = self.cursor.trim().pop();
            if !dot.is(TokenKind::PropertyAccess) {
                return Err(UnexpectedToken::new(dot));
            }
            let segment = self.cursor.trim().pop();
            match segment.kind {
                TokenKind::Class => return Ok(class),
                TokenKind::Name => class.push(&segment.text),
                _ => return Err(UnexpectedToken::new(segment)),
            }
        }
    }
}

/// Digits after a `prefix`-character base marker, in `radix`.
/// Only plain digits are accepted; `_` separators are not.
fn parse_integer(token: &Token, prefix: usize, radix: u32) -> ParseResult<BigInt> {
    let digits = token.text.get(prefix..).unwrap_or_default();
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(UnexpectedToken::new(token));
    }
    BigInt::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| UnexpectedToken::new(token))
}

/// Literal text without its surrounding quote characters
fn strip_quotes(token: &Token) -> ParseResult<&str> {
    let text = token.text.as_str();
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) if open == close => Ok(chars.as_str()),
        _ => Err(UnexpectedToken::new(token)),
    }
}
