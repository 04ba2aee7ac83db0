use std::path::{Component, Path, PathBuf};
use std::sync::Once;

static TRACE_INIT: Once = Once::new();
const DEFAULT_TRACE_FILTER: &str = "jexpr_core=warn,jexpr=warn";

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use jexpr_core::{
    Expr, UnexpectedToken, parse_expression,
    token::{TokenStream, Tokenizer},
};
use tracing::debug;

#[cfg(test)]
mod main_test;

#[derive(Debug, Parser)]
#[command(
    name = "jexpr",
    author,
    version,
    about = "Parse Java-like expressions into syntax trees",
    long_about = None
)]
struct CliArgs {
    #[command(subcommand)]
    command: Commands,

    /// Log filter such as `jexpr_core=trace`; falls back to `RUST_LOG`
    #[arg(long, global = true, value_name = "FILTER")]
    trace: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EmitKind {
    /// Source-like rendering
    Text,
    /// Rust debug tree
    Debug,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse one expression and print its tree.
    Parse {
        #[arg(value_name = "EXPR", required_unless_present = "file", conflicts_with = "file")]
        expr: Option<String>,
        /// Read the expression from a file instead
        #[arg(long, short, value_name = "FILE", value_parser = parse_sanitized_path)]
        file: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = EmitKind::Text)]
        emit: EmitKind,
    },
    /// Print the significant tokens of an expression.
    Tokens {
        #[arg(value_name = "EXPR")]
        expr: String,
    },
}

fn read_file_content(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file '{}'", path.display()))
}

fn sanitize_path(raw: &str) -> anyhow::Result<PathBuf> {
    let p = Path::new(raw);
    if p.components().any(|comp| matches!(comp, Component::ParentDir)) {
        anyhow::bail!("Parent directory components ('..') are not allowed in file paths.");
    }
    Ok(p.to_path_buf())
}

fn parse_sanitized_path(raw: &str) -> Result<PathBuf, String> {
    sanitize_path(raw).map_err(|e| e.to_string())
}

fn init_tracing(filter: Option<&str>) {
    TRACE_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let filter_expr = filter.map(str::to_string).or_else(|| std::env::var("RUST_LOG").ok());

        let builder = fmt().with_writer(std::io::stderr);

        let builder = match filter_expr.and_then(|expr| EnvFilter::try_new(expr).ok()) {
            Some(filter) => builder.with_env_filter(filter),
            None => builder.with_env_filter(DEFAULT_TRACE_FILTER),
        };

        let _ = builder.try_init();
    });
}

fn render(expr: &Expr, emit: EmitKind) -> anyhow::Result<String> {
    Ok(match emit {
        EmitKind::Text => expr.to_string(),
        EmitKind::Debug => format!("{:#?}", expr),
        EmitKind::Json => serde_json::to_string_pretty(expr)?,
    })
}

/// Error line, then the offending source line with carets under the token.
/// Lexer failures already carry their own context and are printed as is.
fn describe_failure(source: &str, err: &anyhow::Error) -> String {
    let Some(unexpected) = err.downcast_ref::<UnexpectedToken>() else {
        return format!("error: {err}");
    };

    let span = unexpected.span(source);
    let position = span.start;
    let line = source
        .lines()
        .nth(position.line.saturating_sub(1) as usize)
        .unwrap_or_default();
    let gutter = position.line.to_string();

    format!(
        "error: unexpected {} at {}\n{} | {}\n{} | {}{}",
        unexpected.token(),
        position,
        gutter,
        line,
        " ".repeat(gutter.len()),
        " ".repeat(position.column.saturating_sub(1) as usize),
        "^".repeat(span.underline_width())
    )
}

fn dump_tokens(source: &str) -> anyhow::Result<String> {
    let stream = TokenStream::new(Tokenizer::tokenize_enhanced(source)?);
    let lines: Vec<String> = stream
        .significant()
        .map(|token| format!("{:>4}  {:<20} {}", token.pos, format!("{:?}", token.kind), token.text))
        .collect();
    Ok(lines.join("\n"))
}

fn main() -> anyhow::Result<()> {
    let CliArgs { command, trace } = CliArgs::parse();
    init_tracing(trace.as_deref());

    match command {
        Commands::Parse { expr, file, emit } => {
            let source = match (expr, file) {
                (Some(expr), _) => expr,
                (None, Some(path)) => read_file_content(&path)?,
                (None, None) => anyhow::bail!("Nothing to parse, pass an expression or --file"),
            };
            debug!(?emit, "parse command");

            match parse_expression(&source) {
                Ok(expr) => println!("{}", render(&expr, emit)?),
                Err(err) => {
                    eprintln!("{}", describe_failure(&source, &err));
                    std::process::exit(1);
                }
            }
        }
        Commands::Tokens { expr } => println!("{}", dump_tokens(&expr)?),
    }

    Ok(())
}
