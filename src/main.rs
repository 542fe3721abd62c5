//! CLI tool that prints the token stream of Gherkin feature files.

use std::fs;
use std::process::ExitCode;

use gherkin_matcher::{BuiltinDialects, DEFAULT_LANGUAGE, Matcher};

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn usage() -> ExitCode {
    eprintln!("Usage: gherkin-tokens [--language CODE] <files...>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --language CODE  Starting dialect (default: {DEFAULT_LANGUAGE})");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  gherkin-tokens login.feature");
    eprintln!("  gherkin-tokens --language fr connexion.feature");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let mut language = DEFAULT_LANGUAGE.to_string();
    let mut files = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return usage(),
            "--language" => match args.next() {
                Some(code) => language = code,
                None => {
                    eprintln!("Error: --language needs a value");
                    return ExitCode::from(2);
                }
            },
            _ => files.push(arg),
        }
    }

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return usage();
    }

    let dialects = BuiltinDialects::new();
    let mut had_error = false;

    for path in &files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        let mut matcher = match Matcher::with_language(&dialects, &language) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::from(2);
            }
        };

        match gherkin_matcher::scan(&mut matcher, &content) {
            Ok(tokens) => print!("{}", gherkin_matcher::format(&tokens)),
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
