use super::{ParseResult, Parser, UnexpectedToken};
use crate::{expr::Variable, token::TokenKind};

impl<'a> Parser<'a> {
    /// A single bare name. Keywords never lex as names, so they are rejected here.
    pub fn parse_variable(&mut self) -> ParseResult<Variable> {
        let token = self.cursor.trim().pop();
        if !token.is(TokenKind::Name) {
            return Err(UnexpectedToken::new(token));
        }
        Ok(Variable::new(&token.text))
    }
}
