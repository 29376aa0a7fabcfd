//! Configuration management for the skyscrapers checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Visibility policy and report format selection

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use crate::validation::VisibilityPolicy;

/// Command-line arguments for the skyscrapers checker
#[derive(Debug, Parser)]
#[command(name = "sky-check")]
#[command(about = "Validate a filled skyscrapers puzzle board")]
#[command(version)]
pub struct Args {
    /// Path to the board file (7 lines of 7 characters)
    pub board_file: PathBuf,

    /// Hint counting rule
    #[arg(long, default_value = "lagging", help = "Hint counting rule ('lagging' or 'strict')")]
    pub policy: String,

    /// Report output format
    #[arg(long, default_value = "text", help = "Report format ('text' or 'json')")]
    pub format: String,

    /// Log level for the checker
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Board file to validate
    pub board_file: PathBuf,
    /// Hint counting policy
    pub policy: VisibilityPolicy,
    /// Report output format
    pub format: OutputFormat,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let policy = match args.policy.as_str() {
            "lagging" => VisibilityPolicy::Lagging,
            "strict" => VisibilityPolicy::Strict,
            other => bail!("unknown visibility policy '{}'", other),
        };

        let format = match args.format.as_str() {
            "text" => OutputFormat::Text,
            "json" => OutputFormat::Json,
            other => bail!("unknown report format '{}'", other),
        };

        Ok(Config {
            board_file: args.board_file,
            policy,
            format,
            log_level: args.log_level,
        })
    }
}
