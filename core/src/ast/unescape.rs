/// Resolve `\"`, `\n`, `\t`, `\r`, `\f`, `\b` and `\0` in string literal
/// contents. Any other backslash sequence is kept as written.
pub fn unescape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escaped = match chars.peek() {
            Some('"') => '"',
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('f') => '\u{c}',
            Some('b') => '\u{8}',
            Some('0') => '\0',
            _ => {
                out.push('\\');
                continue;
            }
        };
        chars.next();
        out.push(escaped);
    }
    out
}

/// Resolve char literal contents: a whole-text escape (`\'`, `\n`, `\r`,
/// `\t`, `\b`, `\f`, `\0`) or else the first character. `None` when empty.
pub fn unescape_char(s: &str) -> Option<char> {
    let c = match s {
        "\\'" => '\'',
        "\\n" => '\n',
        "\\r" => '\r',
        "\\t" => '\t',
        "\\b" => '\u{8}',
        "\\f" => '\u{c}',
        "\\0" => '\0',
        _ => return s.chars().next(),
    };
    Some(c)
}
