#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind, Tokenizer};

    fn significant(src: &str) -> Vec<(TokenKind, String)> {
        Tokenizer::tokenize(src)
            .unwrap()
            .into_iter()
            .filter(|t| !t.kind.is_insignificant())
            .map(|t| (t.kind, t.text))
            .collect()
    }

    fn kinds(src: &str) -> Vec<TokenKind> {
        significant(src).into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn basic() {
        let tokens = Tokenizer::tokenize("a + 1").unwrap();
        let expected = vec![
            Token::new(TokenKind::Name, "a", 0),
            Token::new(TokenKind::Whitespace, " ", 1),
            Token::new(TokenKind::ArithmeticOp, "+", 2),
            Token::new(TokenKind::Whitespace, " ", 3),
            Token::new(TokenKind::DecimalIntLiteral, "1", 4),
            Token::eof(5),
        ];
        assert_eq!(tokens, expected);
    }

    #[test]
    fn empty_input_is_just_eof() {
        assert_eq!(Tokenizer::tokenize("").unwrap(), vec![Token::eof(0)]);
    }

    #[test]
    fn literals() {
        let tokens = significant(r#"null true false 42 0x2A 0b101 4.2 1e3 "s\"x" '\n'"#);
        let expected = vec![
            (TokenKind::NullLiteral, "null".to_string()),
            (TokenKind::BooleanLiteral, "true".to_string()),
            (TokenKind::BooleanLiteral, "false".to_string()),
            (TokenKind::DecimalIntLiteral, "42".to_string()),
            (TokenKind::HexIntLiteral, "0x2A".to_string()),
            (TokenKind::BinaryIntLiteral, "0b101".to_string()),
            (TokenKind::DecimalFloatLiteral, "4.2".to_string()),
            (TokenKind::DecimalFloatLiteral, "1e3".to_string()),
            (TokenKind::StringLiteral, r#""s\"x""#.to_string()),
            (TokenKind::CharLiteral, r"'\n'".to_string()),
            (TokenKind::Eof, String::new()),
        ];
        assert_eq!(tokens, expected);
    }

    #[test]
    fn punctuations() {
        assert_eq!(
            kinds("( ) [ ] { } , ; . -> => = == != < > <= >= + - * / %"),
            vec![
                TokenKind::GroupStart,
                TokenKind::GroupEnd,
                TokenKind::ArrayStart,
                TokenKind::ArrayEnd,
                TokenKind::OpenCurlyBracket,
                TokenKind::CloseCurlyBracket,
                TokenKind::Separator,
                TokenKind::Semicolon,
                TokenKind::PropertyAccess,
                TokenKind::LambdaArrow,
                TokenKind::LambdaArrow,
                TokenKind::Assign,
                TokenKind::ComparisonOp,
                TokenKind::ComparisonOp,
                TokenKind::ComparisonOp,
                TokenKind::ComparisonOp,
                TokenKind::ComparisonOp,
                TokenKind::ComparisonOp,
                TokenKind::ArithmeticOp,
                TokenKind::ArithmeticOp,
                TokenKind::ArithmeticOp,
                TokenKind::ArithmeticOp,
                TokenKind::ArithmeticOp,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn keywords_and_names() {
        assert_eq!(
            kinds("class return new this super classy _x $y"),
            vec![
                TokenKind::Class,
                TokenKind::Return,
                TokenKind::Keyword,
                TokenKind::Name,
                TokenKind::Name,
                TokenKind::Name,
                TokenKind::Name,
                TokenKind::Name,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn dot_after_int_is_access() {
        assert_eq!(
            kinds("1.foo"),
            vec![
                TokenKind::DecimalIntLiteral,
                TokenKind::PropertyAccess,
                TokenKind::Name,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn comments_are_kept_as_insignificant_tokens() {
        let tokens = Tokenizer::tokenize("a // tail\n/* block */ b").unwrap();
        let comment_kinds: Vec<TokenKind> = tokens
            .iter()
            .map(|t| t.kind)
            .filter(|k| matches!(k, TokenKind::LineComment | TokenKind::BlockComment))
            .collect();
        assert_eq!(comment_kinds, vec![TokenKind::LineComment, TokenKind::BlockComment]);
        assert_eq!(tokens.last().unwrap().pos, 23);
    }

    #[test]
    fn positions_are_char_offsets() {
        let tokens = Tokenizer::tokenize("\"ä\" + x").unwrap();
        let x = tokens.iter().find(|t| t.kind == TokenKind::Name).unwrap();
        assert_eq!(x.pos, 6);
    }

    #[test]
    fn unterminated_string_fails() {
        let err = Tokenizer::tokenize("\"abc").unwrap_err();
        assert!(err.to_string().contains("String not closed"));
    }

    #[test]
    fn unknown_character_fails_with_position() {
        let err = Tokenizer::tokenize_enhanced("a\n  # b").unwrap_err();
        assert!(err.message.contains("Unknown punctuation"));
        assert_eq!(err.position.line, 2);
        assert_eq!(err.position.column, 3);
    }

    #[test]
    fn unclosed_block_comment_fails() {
        assert!(Tokenizer::tokenize("/* never closed").is_err());
    }

    #[test]
    fn incomplete_exponent_fails() {
        assert!(Tokenizer::tokenize("1e+").is_err());
    }
}
