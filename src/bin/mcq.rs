//! Command-line interface for mcq
//! Parses free-form MCQ text from a file (or stdin) and prints the
//! normalized questions, or the reasons nothing parsed.
//!
//! Usage:
//!   mcq parse `<path>` [--format `<format>`]   - Parse a submission and print the result
//!   mcq check `<path>`                       - Exit 0 iff at least one question parses

use clap::{Arg, ArgAction, Command};
use mcq::{Engine, EngineConfig, ParseOutcome};
use std::io::Read;

fn main() {
    let matches = Command::new("mcq")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tolerant parser for free-form multiple-choice questions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a submission and print the normalized questions")
                .arg(
                    Arg::new("path")
                        .help("Path to the submission text, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json' or 'text')")
                        .default_value("text"),
                )
                .arg(
                    Arg::new("require-explanation")
                        .long("require-explanation")
                        .help("Reject questions without an explanation")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Quietly verify that a submission parses")
                .arg(
                    Arg::new("path")
                        .help("Path to the submission text, or '-' for stdin")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = parse_matches.get_one::<String>("path").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            let require_explanation = parse_matches.get_flag("require-explanation");
            handle_parse_command(path, format, require_explanation);
        }
        Some(("check", check_matches)) => {
            let path = check_matches.get_one::<String>("path").unwrap();
            handle_check_command(path);
        }
        _ => unreachable!(),
    }
}

/// Read the submission from a path, or from stdin for `-`.
fn read_submission(path: &str) -> String {
    if path == "-" {
        let mut buffer = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        }
        buffer
    } else {
        std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        })
    }
}

fn run_engine(raw: &str, require_explanation: bool) -> ParseOutcome {
    let engine = Engine::with_config(EngineConfig {
        require_explanation,
        ..Default::default()
    });
    engine.parse(raw)
}

/// Handle the parse command
fn handle_parse_command(path: &str, format: &str, require_explanation: bool) {
    let raw = read_submission(path);
    let outcome = run_engine(&raw, require_explanation);

    match format {
        "json" => {
            let rendered = serde_json::to_string_pretty(&outcome).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", rendered);
        }
        "text" => print_text_outcome(&outcome),
        other => {
            eprintln!("Unknown format '{}', expected 'json' or 'text'", other);
            std::process::exit(1);
        }
    }

    if outcome.recognized_none() {
        std::process::exit(1);
    }
}

fn print_text_outcome(outcome: &ParseOutcome) {
    for (number, question) in outcome.questions.iter().enumerate() {
        println!("Question {}: {}", number + 1, question.stem);
        for (idx, option) in question.options.iter().enumerate() {
            let marker = if idx == question.correct_index { "*" } else { " " };
            println!("  {} {}", marker, option);
        }
        if let Some(explanation) = &question.explanation {
            println!("  ({})", explanation);
        }
    }
    for failure in &outcome.failures {
        println!("failed - {}", failure);
    }
    if outcome.recognized_none() {
        println!("no valid question recognized");
    }
}

/// Handle the check command
fn handle_check_command(path: &str) {
    let raw = read_submission(path);
    let outcome = run_engine(&raw, false);
    if outcome.recognized_none() {
        for failure in &outcome.failures {
            eprintln!("{}", failure);
        }
        eprintln!("no valid question recognized");
        std::process::exit(1);
    }
}
