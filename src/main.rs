use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;

use skyscrapers_checker::config::{Config, OutputFormat};
use skyscrapers_checker::source;
use skyscrapers_checker::validation::{validate_board, Diagnostic, VisibilityPolicy};

/// JSON report printed for `--format json`.
#[derive(Serialize)]
struct Report<'a> {
    valid: bool,
    policy: VisibilityPolicy,
    diagnostics: &'a [Diagnostic],
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("sky-check: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let config = Config::from_args_and_env()?;
    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .init();

    let board = source::load_board(&config.board_file)?;
    let result = validate_board(&board, config.policy);

    match config.format {
        OutputFormat::Text => {
            for diagnostic in &result.diagnostics {
                println!("{:?}: {}", diagnostic.severity, diagnostic.message);
            }
            println!("{}", if result.is_valid() { "valid" } else { "invalid" });
        }
        OutputFormat::Json => {
            let report = Report {
                valid: result.is_valid(),
                policy: config.policy,
                diagnostics: &result.diagnostics,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
