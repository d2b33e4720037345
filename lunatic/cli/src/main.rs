use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use colored::Colorize;
use lunatic_common::error::LunaticError;
use lunatic_common::value::Value;
use lunatic_lambda::strings;
use lunatic_params::{Parameters, raw_parameters_from_json};
use std::io;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "lunatic")]
#[command(version)]
#[command(about = "Plugin parameter decoding and text helpers", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a JSON object of plugin parameters read from stdin
    Decode {
        /// Pretty-print the decoded object
        #[arg(long)]
        pretty: bool,

        /// Keep only parameters that decode to this kind
        #[arg(long, value_enum)]
        only: Option<Kind>,
    },
    /// Apply a text helper to stdin
    Text {
        #[arg(value_enum)]
        mode: TextMode,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    fn matches(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Kind::Null, Value::Null)
                | (Kind::Boolean, Value::Bool(_))
                | (Kind::Number, Value::Number(_))
                | (Kind::String, Value::String(_))
                | (Kind::Array, Value::Array(_))
                | (Kind::Object, Value::Object(_))
        )
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TextMode {
    Lower,
    Capitalize,
    Title,
    TrimLines,
    MonoSpace,
    Words,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_error(source: &str, err: &LunaticError) {
    let mut files = SimpleFiles::new();
    let file_id = files.add("<stdin>", source);

    let diagnostic = match err {
        LunaticError::InputError {
            message,
            span: Some(span),
        } => Diagnostic::error()
            .with_message("Input error")
            .with_labels(vec![
                Label::primary(file_id, span.start..span.end).with_message(message),
            ]),
        other => Diagnostic::error().with_message(other.to_string()),
    };

    let writer = StandardStream::stderr(ColorChoice::Auto);
    let config = term::Config::default();
    let _ = term::emit(&mut writer.lock(), &config, &files, &diagnostic);
}

/// JSON for output: integral numbers print without a fraction, non-finite
/// numbers and native functions become null.
fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null | Value::Native(_) => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 => {
            serde_json::Value::from(*n as i64)
        }
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Object(map) => serde_json::Value::Object(
            map.iter().map(|(k, v)| (k.clone(), to_json(v))).collect(),
        ),
    }
}

fn decode(source: &str, pretty: bool, only: Option<Kind>) -> Result<String, LunaticError> {
    let raw = raw_parameters_from_json(source)?;
    let mut params = Parameters::decode(&raw);
    debug!(count = params.len(), "decoded parameters");
    if let Some(kind) = only {
        params = params.filter(|v| kind.matches(v));
    }
    let json = to_json(&Value::Object(params.into_entries()));
    let text = if pretty {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    };
    text.map_err(|e| LunaticError::SerializationError {
        message: e.to_string(),
    })
}

fn apply_text(mode: TextMode, source: &str) -> String {
    match mode {
        TextMode::Lower => strings::lower_case(source),
        TextMode::Capitalize => strings::capitalize(source.trim_end()),
        TextMode::Title => strings::title(source.trim_end()),
        TextMode::TrimLines => strings::trim_lines(source.trim_end()),
        TextMode::MonoSpace => strings::mono_space(source.trim_end()),
        TextMode::Words => strings::word_count(source).to_string(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = match io::read_to_string(io::stdin()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}: failed to read stdin: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };

    match cli.command {
        Command::Decode { pretty, only } => match decode(&source, pretty, only) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                print_error(&source, &err);
                process::exit(1);
            }
        },
        Command::Text { mode } => println!("{}", apply_text(mode, &source)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_print_plain() {
        let json = to_json(&Value::object([("a", Value::from(4)), ("b", Value::from(0.5))]));
        assert_eq!(json.to_string(), r#"{"a":4,"b":0.5}"#);
    }

    #[test]
    fn infinity_prints_null() {
        assert_eq!(to_json(&Value::from(f64::INFINITY)), serde_json::Value::Null);
    }

    #[test]
    fn decode_with_kind_filter() {
        let out = decode(r#"{"a":"1","b":"x","c":"true"}"#, false, Some(Kind::Number)).unwrap();
        assert_eq!(out, r#"{"a":1}"#);
    }

    #[test]
    fn kind_matches_variant() {
        assert!(Kind::Boolean.matches(&Value::from(true)));
        assert!(Kind::Object.matches(&Value::object([("a", 1)])));
        assert!(!Kind::String.matches(&Value::from(1)));
        assert!(!Kind::Null.matches(&Value::from("null")));
    }

    #[test]
    fn decode_keeps_only_objects_in_order() {
        let out = decode(
            r#"{"b":"{\"x\":\"1\"}","a":"7","c":"[]","d":"{}"}"#,
            false,
            Some(Kind::Object),
        )
        .unwrap();
        assert_eq!(out, r#"{"b":{"x":1},"d":{}}"#);
    }

    #[test]
    fn text_modes() {
        assert_eq!(apply_text(TextMode::Title, "hello there\n"), "Hello There");
        assert_eq!(apply_text(TextMode::Words, "one two  three\n"), "3");
        assert_eq!(apply_text(TextMode::Lower, "  LOUD \n"), "loud");
    }
}
