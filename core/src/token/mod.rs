mod cursor;
mod error;
mod lexer;

#[cfg(test)]
mod cursor_test;
#[cfg(test)]
mod token_test;

pub use cursor::{TokenCursor, TokenStream};
pub use error::{LexError, Position, Span, offset_to_position};
pub use lexer::Tokenizer;

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Whitespace,   // spaces, tabs, newlines
    LineComment,  // // ...
    BlockComment, // /* ... */
    Name,         // identifier

    NullLiteral,         // null
    BooleanLiteral,      // true, false
    DecimalIntLiteral,   // 42
    HexIntLiteral,       // 0x2A
    BinaryIntLiteral,    // 0b101010
    DecimalFloatLiteral, // 4.2, 4.2e1
    StringLiteral,       // "abc"
    CharLiteral,         // 'a'

    Class,   // class
    Return,  // return
    Keyword, // any other reserved word

    GroupStart,        // (
    GroupEnd,          // )
    ArrayStart,        // [
    ArrayEnd,          // ]
    OpenCurlyBracket,  // {
    CloseCurlyBracket, // }
    Separator,         // ,
    Semicolon,         // ;
    PropertyAccess,    // .
    LambdaArrow,       // -> or =>
    Assign,            // =
    ArithmeticOp,      // + - * / %
    ComparisonOp,      // == != < > <= >=

    Eof,
}

impl TokenKind {
    /// Whitespace and comments; skipped by [`TokenCursor::trim`].
    pub fn is_insignificant(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment)
    }

    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::LineComment | TokenKind::BlockComment => "comment",
            TokenKind::Name => "name",
            TokenKind::NullLiteral => "null literal",
            TokenKind::BooleanLiteral => "boolean literal",
            TokenKind::DecimalIntLiteral | TokenKind::HexIntLiteral | TokenKind::BinaryIntLiteral => {
                "integer literal"
            }
            TokenKind::DecimalFloatLiteral => "float literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::CharLiteral => "char literal",
            TokenKind::Class | TokenKind::Return | TokenKind::Keyword => "keyword",
            TokenKind::GroupStart => "'('",
            TokenKind::GroupEnd => "')'",
            TokenKind::ArrayStart => "'['",
            TokenKind::ArrayEnd => "']'",
            TokenKind::OpenCurlyBracket => "'{'",
            TokenKind::CloseCurlyBracket => "'}'",
            TokenKind::Separator => "','",
            TokenKind::Semicolon => "';'",
            TokenKind::PropertyAccess => "'.'",
            TokenKind::LambdaArrow => "lambda arrow",
            TokenKind::Assign => "'='",
            TokenKind::ArithmeticOp => "arithmetic operator",
            TokenKind::ComparisonOp => "comparison operator",
            TokenKind::Eof => "end of input",
        }
    }
}

/// A lexical unit. `pos` is the character offset of the token's first
/// character in the source and is only used for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub pos: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }

    pub fn eof(pos: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: String::new(),
            pos,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Offset one past the token's last character.
    pub fn end(&self) -> usize {
        self.pos + self.text.chars().count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            // punctuation descriptions already quote the text
            kind if kind.describe().starts_with('\'') => write!(f, "{}", kind.describe()),
            kind => write!(f, "{} '{}'", kind.describe(), self.text),
        }
    }
}
