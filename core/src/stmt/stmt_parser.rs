use super::{Statement, StatementBlock};
use crate::{
    ast::{ParseResult, Parser, UnexpectedToken},
    expr::Expr,
    token::{TokenCursor, TokenKind},
};

/// Parses the statement blocks used as lambda bodies. Expressions inside
/// statements are handed to the expression [`Parser`].
pub struct StmtParser<'a> {
    cursor: TokenCursor<'a>,
}

impl<'a> StmtParser<'a> {
    pub fn new(cursor: TokenCursor<'a>) -> Self {
        Self { cursor }
    }

    /// Current position; copy it back into the caller's cursor after a
    /// successful parse.
    pub fn cursor(&self) -> TokenCursor<'a> {
        self.cursor
    }

    /// `{ statement* }`
    pub fn parse_statement_block(&mut self) -> ParseResult<StatementBlock> {
        self.expect_token(TokenKind::OpenCurlyBracket)?;

        let mut statements = Vec::new();
        while !self.cursor.trim().peek().is(TokenKind::CloseCurlyBracket) {
            statements.push(self.parse_statement()?);
        }
        self.cursor.pop();

        Ok(StatementBlock::new(statements))
    }

    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.cursor.trim().peek().kind {
            TokenKind::Semicolon => {
                self.cursor.pop();
                Ok(Statement::Empty)
            }
            TokenKind::OpenCurlyBracket => Ok(Statement::Block(self.parse_statement_block()?)),
            TokenKind::Return => {
                self.cursor.pop();
                if self.cursor.trim().peek().is(TokenKind::Semicolon) {
                    self.cursor.pop();
                    return Ok(Statement::Return(None));
                }
                let value = self.parse_expression()?;
                self.expect_token(TokenKind::Semicolon)?;
                Ok(Statement::Return(Some(value)))
            }
            _ => {
                let expr = self.parse_expression()?;
                self.expect_token(TokenKind::Semicolon)?;
                Ok(Statement::Expression(expr))
            }
        }
    }

    fn parse_expression(&mut self) -> ParseResult<Expr> {
        let mut parser = Parser::new(self.cursor);
        let expr = parser.parse_expression()?;
        self.cursor = parser.cursor();
        Ok(expr)
    }

    fn expect_token(&mut self, expected: TokenKind) -> ParseResult<()> {
        let token = self.cursor.trim().pop();
        if !token.is(expected) {
            return Err(UnexpectedToken::new(token));
        }
        Ok(())
    }
}
