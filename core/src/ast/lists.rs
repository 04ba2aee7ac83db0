use super::{ParseResult, Parser, UnexpectedToken};
use crate::{
    expr::{ArgumentList, ParameterDefinition, ParameterList},
    token::TokenKind,
};

impl<'a> Parser<'a> {
    /// `(a, b, c)`; names only, no types or defaults
    pub(super) fn parse_parameter_list(&mut self) -> ParseResult<ParameterList> {
        self.expect_token(TokenKind::GroupStart)?;

        let mut parameters = Vec::new();
        while !self.cursor.trim().peek().is(TokenKind::GroupEnd) {
            if !parameters.is_empty() {
                self.expect_token(TokenKind::Separator)?;
            }
            parameters.push(ParameterDefinition {
                variable: self.parse_variable()?,
            });
        }
        self.cursor.pop();

        Ok(ParameterList(parameters))
    }

    /// `(expr, expr, ...)`, possibly empty
    pub(super) fn parse_argument_list(&mut self) -> ParseResult<ArgumentList> {
        self.expect_token(TokenKind::GroupStart)?;

        let mut arguments = Vec::new();
        while !self.cursor.trim().peek().is(TokenKind::GroupEnd) {
            if !arguments.is_empty() {
                self.expect_token(TokenKind::Separator)?;
            }
            arguments.push(self.parse_expression()?);
        }
        self.cursor.pop();

        Ok(ArgumentList(arguments))
    }

    pub(super) fn expect_token(&mut self, expected: TokenKind) -> ParseResult<()> {
        let token = self.cursor.trim().pop();
        if !token.is(expected) {
            return Err(UnexpectedToken::new(token));
        }
        Ok(())
    }
}
