use std::collections::HashMap;

use crate::token::{LexError, Position, Token, TokenKind};
use anyhow::{Result, anyhow};
use once_cell::sync::Lazy;

/// Reserved words. `this` and `super` are deliberately absent so they lex as
/// names and can head an access chain.
static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("null", TokenKind::NullLiteral);
    map.insert("true", TokenKind::BooleanLiteral);
    map.insert("false", TokenKind::BooleanLiteral);
    map.insert("class", TokenKind::Class);
    map.insert("return", TokenKind::Return);
    for kw in [
        "abstract",
        "assert",
        "boolean",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "const",
        "continue",
        "default",
        "do",
        "double",
        "else",
        "enum",
        "extends",
        "final",
        "finally",
        "float",
        "for",
        "goto",
        "if",
        "implements",
        "import",
        "instanceof",
        "int",
        "interface",
        "long",
        "native",
        "new",
        "package",
        "private",
        "protected",
        "public",
        "short",
        "static",
        "strictfp",
        "switch",
        "synchronized",
        "throw",
        "throws",
        "transient",
        "try",
        "void",
        "volatile",
        "while",
    ] {
        map.insert(kw, TokenKind::Keyword);
    }
    map
});

#[inline]
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Character-level scanner. Whitespace and comments are kept as tokens so the
/// parser's cursor decides what to skip; the output always ends with `Eof`.
pub struct Tokenizer<'a> {
    chars: Vec<char>,
    idx: usize,
    len: usize,
    pub tokens: Vec<Token>,
    line: u32,
    column: u32,
    input: &'a str,
}

impl<'a> Tokenizer<'a> {
    pub fn tokenize(s: &str) -> Result<Vec<Token>> {
        let mut t = Tokenizer::new(s);
        t.parse()?;
        Ok(t.tokens)
    }

    /// Tokenize, attaching the line/column the scanner stopped at on failure
    pub fn tokenize_enhanced(s: &str) -> std::result::Result<Vec<Token>, LexError> {
        let mut t = Tokenizer::new(s);
        match t.parse() {
            Ok(()) => Ok(t.tokens),
            Err(err) => Err(t.enhanced_error(&format!("{}", err))),
        }
    }

    pub fn new(input: &'a str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        Self {
            len: chars.len(),
            chars,
            idx: 0,
            tokens: Vec::with_capacity(input.len() / 2 + 1),
            line: 1,
            column: 1,
            input,
        }
    }

    pub fn enhanced_error(&self, msg: &str) -> LexError {
        LexError::new(msg, self.current_position())
    }

    pub fn current_position(&self) -> Position {
        Position::new(self.line, self.column, self.idx)
    }

    fn eof(&self) -> bool {
        self.idx >= self.len
    }

    fn peek_at(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.idx + ahead).copied()
    }

    fn err<T: AsRef<str>>(&self, msg: T) -> String {
        // Collect up to 10 chars around the error position
        let l_idx = self.idx.saturating_sub(5);
        let r_idx = (self.idx + 5).min(self.len);
        let chars: String = self.chars[l_idx..r_idx].iter().collect();
        let ctx = match self.chars.get(self.idx) {
            Some(c) => format!("'{}' at index {}, near '{}'", c, self.idx, chars),
            None => format!("at end, near '{}'", chars),
        };

        let line_context = self.get_line_context();
        format!(
            "Syntax error:\n{} ({})\nLine {}: {}",
            msg.as_ref(),
            ctx,
            self.line,
            line_context
        )
    }

    fn get_line_context(&self) -> String {
        let target = (self.line as usize).saturating_sub(1);
        self.input
            .lines()
            .nth(target)
            .map(|line| line.to_string())
            .unwrap_or_default()
    }

    fn advance_char(&mut self) {
        if !self.eof() && self.chars[self.idx] == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.idx += 1;
    }

    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance_char();
        }
    }

    /// Push a token covering `start..self.idx`
    fn push_from(&mut self, kind: TokenKind, start: usize) {
        let text: String = self.chars[start..self.idx].iter().collect();
        self.tokens.push(Token::new(kind, text, start));
    }

    fn scan_whitespace(&mut self) {
        let start = self.idx;
        while !self.eof() && self.chars[self.idx].is_whitespace() {
            self.advance_char();
        }
        self.push_from(TokenKind::Whitespace, start);
    }

    fn scan_line_comment(&mut self) {
        let start = self.idx;
        // the newline itself belongs to the following whitespace token
        while !self.eof() && self.chars[self.idx] != '\n' {
            self.advance_char();
        }
        self.push_from(TokenKind::LineComment, start);
    }

    fn scan_block_comment(&mut self) -> Result<()> {
        let start = self.idx;
        self.advance_n(2); // skip /*

        while !self.eof() {
            if self.chars[self.idx] == '*' && self.peek_at(1) == Some('/') {
                self.advance_n(2);
                self.push_from(TokenKind::BlockComment, start);
                return Ok(());
            }
            self.advance_char();
        }

        Err(anyhow!(self.err("Block comment not closed")))
    }

    /// Scan a quoted literal, keeping quotes and escapes verbatim in the text.
    /// Unescaping happens in the parser.
    fn scan_quoted(&mut self, kind: TokenKind) -> Result<()> {
        let start = self.idx;
        let quote = self.chars[self.idx];
        self.advance_char(); // opening quote

        while !self.eof() {
            let c = self.chars[self.idx];
            if c == quote {
                self.advance_char();
                self.push_from(kind, start);
                return Ok(());
            }
            if c == '\n' {
                break;
            }
            if c == '\\' {
                self.advance_char();
                if self.eof() {
                    return Err(anyhow!(self.err("Incomplete escape sequence at end of input")));
                }
            }
            self.advance_char();
        }

        match kind {
            TokenKind::CharLiteral => Err(anyhow!(self.err("Char literal not closed"))),
            _ => Err(anyhow!(self.err("String not closed"))),
        }
    }

    fn scan_number(&mut self) -> Result<()> {
        let start = self.idx;

        if self.chars[self.idx] == '0' {
            let kind = match self.peek_at(1) {
                Some('x' | 'X') => Some(TokenKind::HexIntLiteral),
                Some('b' | 'B') => Some(TokenKind::BinaryIntLiteral),
                _ => None,
            };
            if let Some(kind) = kind {
                self.advance_n(2);
                // digit validity is checked when the literal is converted
                while !self.eof() && is_ident_continue(self.chars[self.idx]) {
                    self.advance_char();
                }
                self.push_from(kind, start);
                return Ok(());
            }
        }

        let mut kind = TokenKind::DecimalIntLiteral;
        self.scan_digits();

        // a '.' only continues the number when a digit follows; `1.foo` stays an access
        if self.peek_at(0) == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            kind = TokenKind::DecimalFloatLiteral;
            self.advance_char();
            self.scan_digits();
        }

        if matches!(self.peek_at(0), Some('e' | 'E')) {
            let sign = matches!(self.peek_at(1), Some('+' | '-'));
            let digit_at = if sign { 2 } else { 1 };
            if self.peek_at(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                kind = TokenKind::DecimalFloatLiteral;
                self.advance_n(digit_at);
                self.scan_digits();
            } else {
                return Err(anyhow!(self.err("Invalid number, incomplete exponent")));
            }
        }

        if !self.eof() && is_ident_start(self.chars[self.idx]) {
            return Err(anyhow!(self.err("Invalid number, unexpected character after digits")));
        }

        self.push_from(kind, start);
        Ok(())
    }

    fn scan_digits(&mut self) {
        while !self.eof() && self.chars[self.idx].is_ascii_digit() {
            self.advance_char();
        }
    }

    fn scan_word(&mut self) {
        let start = self.idx;
        while !self.eof() && is_ident_continue(self.chars[self.idx]) {
            self.advance_char();
        }
        let word: String = self.chars[start..self.idx].iter().collect();
        let kind = KEYWORDS.get(word.as_str()).copied().unwrap_or(TokenKind::Name);
        self.tokens.push(Token::new(kind, word, start));
    }

    fn scan_punctuation(&mut self) -> Result<()> {
        let start = self.idx;
        let c = self.chars[self.idx];
        let next = self.peek_at(1);

        let (kind, width) = match (c, next) {
            ('(', _) => (TokenKind::GroupStart, 1),
            (')', _) => (TokenKind::GroupEnd, 1),
            ('[', _) => (TokenKind::ArrayStart, 1),
            (']', _) => (TokenKind::ArrayEnd, 1),
            ('{', _) => (TokenKind::OpenCurlyBracket, 1),
            ('}', _) => (TokenKind::CloseCurlyBracket, 1),
            (',', _) => (TokenKind::Separator, 1),
            (';', _) => (TokenKind::Semicolon, 1),
            ('.', _) => (TokenKind::PropertyAccess, 1),
            ('-', Some('>')) => (TokenKind::LambdaArrow, 2),
            ('=', Some('>')) => (TokenKind::LambdaArrow, 2),
            ('=', Some('=')) => (TokenKind::ComparisonOp, 2),
            ('!', Some('=')) => (TokenKind::ComparisonOp, 2),
            ('<', Some('=')) => (TokenKind::ComparisonOp, 2),
            ('>', Some('=')) => (TokenKind::ComparisonOp, 2),
            ('<' | '>', _) => (TokenKind::ComparisonOp, 1),
            ('=', _) => (TokenKind::Assign, 1),
            ('+' | '-' | '*' | '/' | '%', _) => (TokenKind::ArithmeticOp, 1),
            _ => return Err(anyhow!(self.err("Unknown punctuation"))),
        };

        self.advance_n(width);
        self.push_from(kind, start);
        Ok(())
    }

    fn parse(&mut self) -> Result<()> {
        while !self.eof() {
            let c = self.chars[self.idx];
            match c {
                c if c.is_whitespace() => self.scan_whitespace(),
                '/' if self.peek_at(1) == Some('/') => self.scan_line_comment(),
                '/' if self.peek_at(1) == Some('*') => self.scan_block_comment()?,
                '"' => self.scan_quoted(TokenKind::StringLiteral)?,
                '\'' => self.scan_quoted(TokenKind::CharLiteral)?,
                '0'..='9' => self.scan_number()?,
                c if is_ident_start(c) => self.scan_word(),
                _ => self.scan_punctuation()?,
            }
        }
        self.tokens.push(Token::eof(self.idx));
        Ok(())
    }
}
