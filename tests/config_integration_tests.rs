//! Tests for the CLI argument to configuration mapping
use clap::Parser;

use skyscrapers_checker::config::{Args, Config, OutputFormat};
use skyscrapers_checker::validation::VisibilityPolicy;

#[test]
fn test_default_configuration() {
    let args = Args::try_parse_from(["sky-check", "board.txt"]).expect("parse args");
    let config = Config::from_args(args).expect("create config");

    assert_eq!(config.board_file.to_str(), Some("board.txt"));
    assert_eq!(config.policy, VisibilityPolicy::Lagging);
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_strict_policy_and_json_format() {
    let args = Args::try_parse_from([
        "sky-check",
        "board.txt",
        "--policy",
        "strict",
        "--format",
        "json",
        "--log-level",
        "debug",
    ])
    .expect("parse args");
    let config = Config::from_args(args).expect("create config");

    assert_eq!(config.policy, VisibilityPolicy::Strict);
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_unknown_policy_is_rejected() {
    let args =
        Args::try_parse_from(["sky-check", "board.txt", "--policy", "wishful"]).expect("parse args");
    let err = Config::from_args(args).unwrap_err();
    assert!(err.to_string().contains("unknown visibility policy"));
}

#[test]
fn test_unknown_format_is_rejected() {
    let args =
        Args::try_parse_from(["sky-check", "board.txt", "--format", "xml"]).expect("parse args");
    let err = Config::from_args(args).unwrap_err();
    assert!(err.to_string().contains("unknown report format"));
}

#[test]
fn test_board_file_is_required() {
    assert!(Args::try_parse_from(["sky-check"]).is_err());
}
