#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_sanitize_path_allows_simple_relative() {
        let p = sanitize_path("foo/expr.txt").expect("relative path should be allowed");
        assert_eq!(p, PathBuf::from("foo/expr.txt"));
    }

    #[test]
    fn test_sanitize_path_rejects_parent_dir() {
        let err = sanitize_path("foo/../expr.txt").unwrap_err();
        assert!(err.to_string().contains("Parent directory components"));
    }

    #[test]
    fn test_cli_args_parse_inline_expression() {
        let args = CliArgs::try_parse_from(["jexpr", "parse", "a + b"]).expect("should parse");
        match args.command {
            Commands::Parse { expr, file, emit } => {
                assert_eq!(expr.as_deref(), Some("a + b"));
                assert!(file.is_none());
                assert_eq!(emit, EmitKind::Text);
            }
            other => panic!("expected parse command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_args_parse_file_with_emit() {
        let args =
            CliArgs::try_parse_from(["jexpr", "parse", "--file", "e.txt", "--emit", "json"]).expect("should parse");
        match args.command {
            Commands::Parse { expr, file, emit } => {
                assert!(expr.is_none());
                assert_eq!(file.as_deref(), Some(Path::new("e.txt")));
                assert_eq!(emit, EmitKind::Json);
            }
            other => panic!("expected parse command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_args_rejects_expression_and_file_together() {
        assert!(CliArgs::try_parse_from(["jexpr", "parse", "a", "--file", "e.txt"]).is_err());
        assert!(CliArgs::try_parse_from(["jexpr", "parse"]).is_err());
    }

    #[test]
    fn test_cli_args_rejects_parent_dir_in_file() {
        assert!(CliArgs::try_parse_from(["jexpr", "parse", "--file", "../e.txt"]).is_err());
    }

    #[test]
    fn test_cli_args_trace_is_global() {
        let args = CliArgs::try_parse_from(["jexpr", "tokens", "x", "--trace", "jexpr_core=trace"]).expect("should parse");
        assert_eq!(args.trace.as_deref(), Some("jexpr_core=trace"));
    }

    #[test]
    fn test_render_emit_kinds() {
        let expr = parse_expression("f(1)").unwrap();
        assert_eq!(render(&expr, EmitKind::Text).unwrap(), "f(1)");
        assert!(render(&expr, EmitKind::Debug).unwrap().starts_with("MethodCall {"));
        let json: serde_json::Value = serde_json::from_str(&render(&expr, EmitKind::Json).unwrap()).unwrap();
        assert_eq!(json["MethodCall"]["arguments"][0]["Integer"], "1");
    }

    #[test]
    fn test_describe_failure_points_at_token() {
        let source = "(1 + )";
        let err = parse_expression(source).unwrap_err();
        assert_eq!(
            describe_failure(source, &err),
            "error: unexpected ')' at 1:6\n1 | (1 + )\n  |      ^"
        );
    }

    #[test]
    fn test_describe_failure_on_second_line() {
        let source = "f(a,\n  b c)";
        let err = parse_expression(source).unwrap_err();
        assert_eq!(
            describe_failure(source, &err),
            "error: unexpected name 'c' at 2:5\n2 |   b c)\n  |     ^"
        );
    }

    #[test]
    fn test_describe_failure_underlines_whole_token() {
        let source = "f(1 foo)";
        let err = parse_expression(source).unwrap_err();
        assert_eq!(
            describe_failure(source, &err),
            "error: unexpected name 'foo' at 1:5\n1 | f(1 foo)\n  |     ^^^"
        );
    }

    #[test]
    fn test_describe_failure_at_end_of_input() {
        let source = "a +";
        let err = parse_expression(source).unwrap_err();
        assert_eq!(
            describe_failure(source, &err),
            "error: unexpected end of input at 1:4\n1 | a +\n  |    ^"
        );
    }

    #[test]
    fn test_describe_failure_passes_lex_errors_through() {
        let err = parse_expression("\"open").unwrap_err();
        let text = describe_failure("\"open", &err);
        assert!(text.starts_with("error: "));
        assert!(text.contains("String not closed"));
    }

    #[test]
    fn test_dump_tokens_skips_whitespace() {
        let dump = dump_tokens("a /* c */ + 1").unwrap();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "   0  Name                 a");
        assert_eq!(lines[1], "  10  ArithmeticOp         +");
        assert_eq!(lines[2], "  12  DecimalIntLiteral    1");
        assert!(lines[3].trim_end().ends_with("Eof"));
    }
}
