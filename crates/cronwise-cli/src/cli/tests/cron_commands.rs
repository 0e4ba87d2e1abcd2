//! Tests for describe, generate, validate, presets.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use cronwise_core::cron::{self, RecurrenceKind};

#[test]
fn cli_parse_describe() {
    match parse(&["cronwise", "describe", "0 0 2 * * ?"]) {
        CliCommand::Describe { expr, json } => {
            assert_eq!(expr, "0 0 2 * * ?");
            assert!(!json);
        }
        _ => panic!("expected Describe"),
    }
}

#[test]
fn cli_parse_describe_json() {
    match parse(&["cronwise", "describe", "--json", "0 30 8 ? * 1"]) {
        CliCommand::Describe { json, .. } => assert!(json),
        _ => panic!("expected Describe --json"),
    }
}

#[test]
fn cli_parse_generate_weekly() {
    match parse(&[
        "cronwise",
        "generate",
        "--type",
        "weekly",
        "--time",
        "08:30",
        "--day-of-week",
        "1",
    ]) {
        CliCommand::Generate(args) => {
            let config = args.to_config();
            assert_eq!(config.kind, RecurrenceKind::Weekly);
            assert_eq!(cron::generate(&config), "0 30 8 ? * 1");
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_generate_interval() {
    match parse(&["cronwise", "generate", "--type", "interval", "--interval-minutes", "120"]) {
        CliCommand::Generate(args) => {
            assert_eq!(args.interval_minutes, Some(120));
            assert_eq!(cron::generate(&args.to_config()), "0 0 */2 * * ?");
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_generate_unknown_type_falls_back() {
    match parse(&["cronwise", "generate", "--type", "yearly"]) {
        CliCommand::Generate(args) => {
            let config = args.to_config();
            assert_eq!(config.kind, RecurrenceKind::Unknown);
            assert_eq!(cron::generate(&config), cron::DEFAULT_EXPRESSION);
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_generate_defaults_to_daily_midnight() {
    match parse(&["cronwise", "generate"]) {
        CliCommand::Generate(args) => assert_eq!(cron::generate(&args.to_config()), "0 0 0 * * ?"),
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_validate_and_presets() {
    match parse(&["cronwise", "validate", "0 0 2 * *"]) {
        CliCommand::Validate { expr } => assert_eq!(expr, "0 0 2 * *"),
        _ => panic!("expected Validate"),
    }
    assert!(matches!(parse(&["cronwise", "presets"]), CliCommand::Presets));
}

#[test]
fn cli_verbose_is_global() {
    let cli = Cli::try_parse_from(["cronwise", "presets", "--verbose"]).unwrap();
    assert!(cli.verbose);
    let cli = Cli::try_parse_from(["cronwise", "presets"]).unwrap();
    assert!(!cli.verbose);
}
