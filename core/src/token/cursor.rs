use super::{Token, TokenKind};

/// Immutable token buffer shared by every cursor created from it.
///
/// The buffer always ends with exactly one [`TokenKind::Eof`] token, so a
/// cursor can never run off the end.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        match tokens.last() {
            Some(last) if last.is(TokenKind::Eof) => {}
            Some(last) => {
                let end = last.end();
                tokens.push(Token::eof(end));
            }
            None => tokens.push(Token::eof(0)),
        }
        Self { tokens }
    }

    pub fn cursor(&self) -> TokenCursor<'_> {
        TokenCursor {
            tokens: &self.tokens,
            pos: 0,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Tokens that are not whitespace or comments, `Eof` included.
    pub fn significant(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| !t.kind.is_insignificant())
    }
}

/// Index into a [`TokenStream`].
///
/// Copying a cursor snapshots it; [`TokenCursor::commit`] moves the state of
/// an advanced snapshot back into the cursor it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    /// Skip whitespace and comment tokens.
    pub fn trim(&mut self) -> &mut Self {
        while self.pos + 1 < self.tokens.len() && self.tokens[self.pos].kind.is_insignificant() {
            self.pos += 1;
        }
        self
    }

    pub fn peek(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    /// Consume the current token. At `Eof` the cursor stays put.
    pub fn pop(&mut self) -> &'a Token {
        let token = &self.tokens[self.pos];
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub fn commit(&mut self, advanced: &TokenCursor<'a>) {
        debug_assert!(std::ptr::eq(self.tokens, advanced.tokens));
        self.pos = advanced.pos;
    }

    pub fn is_eof(&self) -> bool {
        self.tokens[self.pos].is(TokenKind::Eof)
    }
}
