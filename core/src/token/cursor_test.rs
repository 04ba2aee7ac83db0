#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind, TokenStream, Tokenizer};

    fn stream(src: &str) -> TokenStream {
        TokenStream::new(Tokenizer::tokenize(src).unwrap())
    }

    #[test]
    fn trim_skips_whitespace_and_comments() {
        let stream = stream("  /* c */ // d\n x");
        let mut cursor = stream.cursor();
        assert_eq!(cursor.peek().kind, TokenKind::Whitespace);
        assert_eq!(cursor.trim().peek().kind, TokenKind::Name);
    }

    #[test]
    fn pop_stops_at_eof() {
        let stream = stream("x");
        let mut cursor = stream.cursor();
        assert_eq!(cursor.pop().text, "x");
        assert!(cursor.is_eof());
        assert_eq!(cursor.pop().kind, TokenKind::Eof);
        assert_eq!(cursor.pop().kind, TokenKind::Eof);
        assert!(cursor.is_eof());
    }

    #[test]
    fn copies_advance_independently() {
        let stream = stream("a b c");
        let mut original = stream.cursor();
        let mut fork = original;
        fork.trim().pop();
        fork.trim().pop();
        assert_eq!(original.trim().peek().text, "a");
        assert_eq!(fork.trim().peek().text, "c");

        original.commit(&fork);
        assert_eq!(original.peek().text, "c");
    }

    #[test]
    fn stream_appends_missing_eof() {
        let stream = TokenStream::new(vec![Token::new(TokenKind::Name, "abc", 3)]);
        let last = stream.tokens().last().unwrap();
        assert_eq!(last.kind, TokenKind::Eof);
        assert_eq!(last.pos, 6);

        let empty = TokenStream::new(Vec::new());
        assert_eq!(empty.tokens(), &[Token::eof(0)]);
    }

    #[test]
    fn stream_keeps_existing_eof() {
        let stream = stream("a");
        let eofs = stream.tokens().iter().filter(|t| t.kind == TokenKind::Eof).count();
        assert_eq!(eofs, 1);
        assert_eq!(stream.significant().count(), 2);
    }
}
