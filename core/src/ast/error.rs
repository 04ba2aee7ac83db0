use crate::token::{Position, Span, Token, offset_to_position};
use std::fmt;

/// The single failure the expression engine reports: the token at which an
/// interpretation could not continue. No partial tree is ever attached.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedToken {
    token: Token,
}

impl UnexpectedToken {
    pub fn new(token: &Token) -> Self {
        Self { token: token.clone() }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Character offset of the offending token
    pub fn pos(&self) -> usize {
        self.token.pos
    }

    pub fn position(&self, source: &str) -> Position {
        offset_to_position(source, self.token.pos)
    }

    /// Range of the offending token in `source`; `Eof` spans nothing.
    pub fn span(&self, source: &str) -> Span {
        Span::covering(source, self.token.pos, self.token.end())
    }

    /// Keep whichever failure got further into the input. `other` must be
    /// strictly further to win.
    pub fn furthest(self, other: UnexpectedToken) -> UnexpectedToken {
        if other.pos() > self.pos() { other } else { self }
    }
}

impl fmt::Display for UnexpectedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected {} at offset {}", self.token, self.token.pos)
    }
}

impl std::error::Error for UnexpectedToken {}

pub type ParseResult<T> = Result<T, UnexpectedToken>;
