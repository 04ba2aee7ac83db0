use super::{ParseResult, UnexpectedToken};
use crate::{
    expr::{Expr, ParameterList},
    stmt::{StatementBlock, StmtParser},
    token::{TokenCursor, TokenKind},
};
use tracing::trace;

/// Backtracking expression parser.
///
/// A `Parser` is nothing but a cursor position, so trying an interpretation
/// means copying the parser, running the attempt on the copy and committing
/// the copy back only if it succeeded. A failed attempt leaves `self`
/// untouched.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    pub(super) cursor: TokenCursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(cursor: TokenCursor<'a>) -> Self {
        Self { cursor }
    }

    pub fn cursor(&self) -> TokenCursor<'a> {
        self.cursor
    }

    pub(super) fn fork(&self) -> Self {
        *self
    }

    pub(super) fn commit(&mut self, attempt: &Parser<'a>) {
        self.cursor.commit(&attempt.cursor);
    }

    /// Parse one expression.
    ///
    /// Lambdas cannot be told apart from groups and plain names until the
    /// arrow shows up, so the lambda reading is tried first and the operator
    /// reading second. If both fail, the error that got further wins.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        let mut attempt = self.fork();
        attempt.cursor.trim();
        let lambda_err = match attempt.parse_lambda_expression() {
            Ok(lambda) => {
                self.commit(&attempt);
                return Ok(lambda);
            }
            Err(err) => err,
        };
        trace!(at = lambda_err.pos(), "not a lambda, trying operator expression");

        let mut attempt = self.fork();
        match attempt.parse_operator_expression() {
            Ok(expr) => {
                self.commit(&attempt);
                Ok(expr)
            }
            Err(err) => {
                let err = lambda_err.furthest(err);
                trace!(at = err.pos(), token = %err.token(), "both readings failed");
                Err(err)
            }
        }
    }

    /// - `(a, b) -> body`
    /// - `a -> body`
    fn parse_lambda_expression(&mut self) -> ParseResult<Expr> {
        let parameters = match self.cursor.trim().peek().kind {
            TokenKind::GroupStart => self.parse_parameter_list()?,
            TokenKind::Name => ParameterList::single(self.parse_variable()?),
            _ => return Err(UnexpectedToken::new(self.cursor.pop())),
        };

        let arrow = self.cursor.trim().pop();
        if !arrow.is(TokenKind::LambdaArrow) {
            return Err(UnexpectedToken::new(arrow));
        }

        let body = if self.cursor.trim().peek().is(TokenKind::OpenCurlyBracket) {
            let mut stmts = StmtParser::new(self.cursor);
            let block = stmts.parse_statement_block()?;
            self.cursor = stmts.cursor();
            block
        } else {
            StatementBlock::implicit_return(self.parse_expression()?)
        };

        Ok(Expr::lambda(parameters, body))
    }

    /// operand, then the three binary tiers from tightest to loosest
    fn parse_operator_expression(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_operand()?;
        let expr = self.expand_multiplicative(expr)?;
        let expr = self.expand_additive(expr)?;
        self.expand_comparison(expr)
    }

    /// Primary expression with its postfix chain
    fn parse_operand(&mut self) -> ParseResult<Expr> {
        let primary = self.parse_primary()?;
        self.expand_access(primary)
    }

    /// - `(expr)`
    /// - terminal
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        if !self.cursor.trim().peek().is(TokenKind::GroupStart) {
            return self.parse_terminal_expression();
        }
        self.cursor.pop();

        let inner = self.parse_expression()?;
        let close = self.cursor.trim().pop();
        if !close.is(TokenKind::GroupEnd) {
            return Err(UnexpectedToken::new(close));
        }
        Ok(Expr::group(inner))
    }

    /// - `expr.name`
    /// - `expr[expr]`
    /// - `expr(args)`
    ///
    /// Applied greedily left to right. A suffix that starts but does not
    /// complete fails the whole interpretation.
    fn expand_access(&mut self, left: Expr) -> ParseResult<Expr> {
        let mut expr = left;
        loop {
            match self.cursor.trim().peek().kind {
                TokenKind::PropertyAccess => {
                    self.cursor.pop();
                    let member = self.cursor.trim().pop();
                    if !member.is(TokenKind::Name) {
                        return Err(UnexpectedToken::new(member));
                    }
                    expr = Expr::property(expr, &member.text);
                }
                TokenKind::ArrayStart => {
                    self.cursor.pop();
                    let index = self.parse_expression()?;
                    let close = self.cursor.trim().pop();
                    if !close.is(TokenKind::ArrayEnd) {
                        return Err(UnexpectedToken::new(close));
                    }
                    expr = Expr::index(expr, index);
                }
                TokenKind::GroupStart => {
                    let arguments = self.parse_argument_list()?;
                    expr = Expr::MethodCall {
                        target: Box::new(expr),
                        arguments,
                    };
                }
                _ => return Ok(expr),
            }
        }
    }

    /// - `expr * expr`
    /// - `expr / expr`
    /// - `expr % expr`
    fn expand_multiplicative(&mut self, left: Expr) -> ParseResult<Expr> {
        let mut expr = left;
        loop {
            let token = self.cursor.trim().peek();
            let build: fn(Expr, Expr) -> Expr = match (token.kind, token.text.as_str()) {
                (TokenKind::ArithmeticOp, "*") => Expr::multiplication,
                (TokenKind::ArithmeticOp, "/") => Expr::division,
                (TokenKind::ArithmeticOp, "%") => Expr::modulo,
                _ => return Ok(expr),
            };
            self.cursor.pop();
            let right = self.parse_operand()?;
            expr = build(expr, right);
        }
    }

    /// - `expr + expr`
    /// - `expr - expr`
    fn expand_additive(&mut self, left: Expr) -> ParseResult<Expr> {
        let mut expr = left;
        loop {
            let token = self.cursor.trim().peek();
            let build: fn(Expr, Expr) -> Expr = match (token.kind, token.text.as_str()) {
                (TokenKind::ArithmeticOp, "+") => Expr::addition,
                (TokenKind::ArithmeticOp, "-") => Expr::subtraction,
                _ => return Ok(expr),
            };
            self.cursor.pop();
            let right = self.parse_operand()?;
            let right = self.expand_multiplicative(right)?;
            expr = build(expr, right);
        }
    }

    /// `expr OP expr` for every comparison operator; loosest tier
    fn expand_comparison(&mut self, left: Expr) -> ParseResult<Expr> {
        let mut expr = left;
        while self.cursor.trim().peek().is(TokenKind::ComparisonOp) {
            let operator = &self.cursor.pop().text;
            let right = self.parse_operand()?;
            let right = self.expand_multiplicative(right)?;
            let right = self.expand_additive(right)?;
            expr = Expr::comparison(operator, expr, right);
        }
        Ok(expr)
    }
}
