#[cfg(test)]
mod test {
    use crate::ast::{unescape_char, unescape_string};

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(unescape_string("hello world"), "hello world");
        assert_eq!(unescape_string(""), "");
    }

    #[test]
    fn known_escapes() {
        assert_eq!(unescape_string(r#"\""#), "\"");
        assert_eq!(unescape_string(r"a\nb"), "a\nb");
        assert_eq!(unescape_string(r"\t\r"), "\t\r");
        assert_eq!(unescape_string(r"\f\b\0"), "\u{c}\u{8}\0");
    }

    #[test]
    fn unknown_escapes_keep_the_backslash() {
        assert_eq!(unescape_string(r"\q"), "\\q");
        assert_eq!(unescape_string(r"\u0041"), "\\u0041");
        assert_eq!(unescape_string("trailing\\"), "trailing\\");
    }

    #[test]
    fn escapes_resolve_left_to_right() {
        assert_eq!(unescape_string(r#"\"\n"#), "\"\n");
        assert_eq!(unescape_string(r"\\n"), "\\\n");
    }

    #[test]
    fn char_escapes() {
        assert_eq!(unescape_char(r"\'"), Some('\''));
        assert_eq!(unescape_char(r"\n"), Some('\n'));
        assert_eq!(unescape_char(r"\0"), Some('\0'));
        assert_eq!(unescape_char(r"\b"), Some('\u{8}'));
    }

    #[test]
    fn char_takes_first_character() {
        assert_eq!(unescape_char("a"), Some('a'));
        assert_eq!(unescape_char("ab"), Some('a'));
        assert_eq!(unescape_char(r"\q"), Some('\\'));
        assert_eq!(unescape_char(""), None);
    }
}
