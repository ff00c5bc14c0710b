//! Command-line interface for rex
//! Explains what a regular expression pattern does, maps pattern offsets to
//! the nodes that produced them, and (on request) reports whether the native
//! regex engine accepts the same pattern.
//!
//! Usage:
//!   rex '<pattern>' [-x] [-n] [--format <format>]   - Explain a pattern
//!   rex '<pattern>' --at <offset>                   - Innermost node at an offset
//!   rex '<pattern>' --check                         - Also ask the native engine

use clap::{Arg, ArgAction, Command};
use rex_parser::rex::{explain, ExplainOptions, ParseError};

fn main() {
    let matches = Command::new("rex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for explaining regular expression patterns")
        .arg_required_else_help(true)
        .arg(
            Arg::new("pattern")
                .help("The pattern to explain")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("ignore-whitespace")
                .long("ignore-whitespace")
                .short('x')
                .help("Skip unescaped whitespace and # comments while parsing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("explicit-capture")
                .long("explicit-capture")
                .short('n')
                .help("Describe plain groups as non-capturing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ignore-case")
                .long("ignore-case")
                .short('i')
                .help("Engine flag; no effect on the explanation")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("multiline")
                .long("multiline")
                .short('m')
                .help("Engine flag; no effect on the explanation")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("singleline")
                .long("singleline")
                .short('s')
                .help("Engine flag; no effect on the explanation")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("at")
                .long("at")
                .help("Print the innermost node covering this pattern offset")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: text or json")
                .default_value("text"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Also compile the pattern with the native regex engine and report its verdict")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let pattern = matches
        .get_one::<String>("pattern")
        .expect("pattern is required");
    let format = matches.get_one::<String>("format").expect("has a default");

    let options = ExplainOptions {
        ignore_pattern_whitespace: matches.get_flag("ignore-whitespace"),
        explicit_capture: matches.get_flag("explicit-capture"),
        ignore_case: matches.get_flag("ignore-case"),
        multiline: matches.get_flag("multiline"),
        singleline: matches.get_flag("singleline"),
        ..Default::default()
    };

    let explanation = explain(pattern, options).unwrap_or_else(|error| {
        report_parse_error(pattern, &error);
        std::process::exit(1);
    });

    if let Some(&offset) = matches.get_one::<usize>("at") {
        handle_at_command(&explanation, offset, format);
        return;
    }

    match format.as_str() {
        "text" => {
            print!("{}", explanation.text());
        }
        "json" => {
            let output = serde_json::json!({
                "pattern": pattern,
                "explanation": explanation.text(),
                "spans": explanation.spans().entries(),
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
                    eprintln!("Error formatting output: {}", e);
                    std::process::exit(1);
                })
            );
        }
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: text, json");
            std::process::exit(1);
        }
    }

    if matches.get_flag("check") {
        // The delegated execution engine's verdict is independent of
        // explainability: either can succeed while the other fails.
        match regex::Regex::new(pattern) {
            Ok(_) => println!("engine: ok"),
            Err(error) => println!("engine: error: {}", error),
        }
    }
}

/// Handle the --at command
fn handle_at_command(explanation: &rex_parser::Explanation, offset: usize, format: &str) {
    let entry = explanation.lookup(offset).unwrap_or_else(|| {
        eprintln!("No node covers offset {}", offset);
        std::process::exit(1);
    });

    if format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(entry).unwrap_or_else(|e| {
                eprintln!("Error formatting output: {}", e);
                std::process::exit(1);
            })
        );
    } else {
        println!("[{}..{}] {}", entry.start, entry.end, entry.label);
    }
}

/// Print a parse failure, with a caret line pointing at the offending
/// delimiter when the error carries a location.
fn report_parse_error(pattern: &str, error: &ParseError) {
    eprintln!("Parse error: {}", error);
    if let ParseError::UnterminatedGroup { location, length } = error {
        eprintln!("  {}", pattern);
        eprintln!("  {}{}", " ".repeat(*location), "^".repeat(*length));
    }
}
