//! Tests for argument parsing of every subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_parse() {
    match parse(&["yurl", "parse", "http://a/b", "//c"]) {
        CliCommand::Parse {
            urls,
            json,
            validate,
        } => {
            assert_eq!(urls, vec!["http://a/b", "//c"]);
            assert!(!json);
            assert!(!validate);
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_parse_flags() {
    match parse(&["yurl", "parse", "--json", "--validate", "x"]) {
        CliCommand::Parse { json, validate, .. } => {
            assert!(json);
            assert!(validate);
        }
        _ => panic!("expected Parse with flags"),
    }
}

#[test]
fn cli_parse_join() {
    match parse(&["yurl", "join", "http://a/b/c/d;p?q", "../g", "#s"]) {
        CliCommand::Join { base, references } => {
            assert_eq!(base, "http://a/b/c/d;p?q");
            assert_eq!(references, vec!["../g", "#s"]);
        }
        _ => panic!("expected Join"),
    }
}

#[test]
fn cli_parse_validate() {
    match parse(&["yurl", "validate", "http://ok/"]) {
        CliCommand::Validate { urls } => assert_eq!(urls, vec!["http://ok/"]),
        _ => panic!("expected Validate"),
    }
}

#[test]
fn cli_parse_normalize_remove_dots() {
    match parse(&["yurl", "normalize", "--remove-dots", "HTTP://A/./b"]) {
        CliCommand::Normalize { urls, remove_dots } => {
            assert_eq!(urls, vec!["HTTP://A/./b"]);
            assert!(remove_dots);
        }
        _ => panic!("expected Normalize"),
    }
}

#[test]
fn cli_requires_inputs() {
    assert!(Cli::try_parse_from(["yurl", "parse"]).is_err());
    assert!(Cli::try_parse_from(["yurl", "join", "http://a/"]).is_err());
    assert!(Cli::try_parse_from(["yurl", "validate"]).is_err());
}
