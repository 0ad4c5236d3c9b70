//! Argument parsing through the public API

use authscan::app::cli::api::{Args, Command};
use authscan::backend::api::BaseUrlSource;
use clap::Parser;

#[test]
fn test_help_and_version_are_available() {
    let help = Args::try_parse_from(["authscan", "--help"]).unwrap_err();
    assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
    let rendered = help.to_string();
    for command in ["verify", "demo", "get", "register", "session"] {
        assert!(rendered.contains(command), "help is missing {}", command);
    }

    let version = Args::try_parse_from(["authscan", "--version"]).unwrap_err();
    assert_eq!(version.kind(), clap::error::ErrorKind::DisplayVersion);
}

#[test]
fn test_global_flags_after_subcommand_are_rejected() {
    // Global options belong before the subcommand
    assert!(Args::try_parse_from(["authscan", "verify", "X", "--timeout", "5"]).is_err());
    let args = Args::try_parse_from(["authscan", "--timeout", "5", "verify", "X"]).unwrap();
    assert_eq!(args.timeout, Some(5));
    assert_eq!(
        args.selected_command(),
        Command::Verify {
            code: "X".to_string()
        }
    );
}

#[test]
fn test_code_with_spaces_is_passed_through() {
    let args = Args::try_parse_from(["authscan", "verify", "  HERB 7  "]).unwrap();
    assert_eq!(
        args.selected_command(),
        Command::Verify {
            code: "  HERB 7  ".to_string()
        }
    );
}

#[test]
fn test_backend_url_override_wins() {
    let args = Args::try_parse_from([
        "authscan",
        "--backend-url",
        "https://verify.example.com/blockchain",
    ])
    .unwrap();
    let config = args.backend_config().unwrap();
    assert_eq!(config.source(), BaseUrlSource::Override);
    assert_eq!(
        config.base_url().as_str(),
        "https://verify.example.com/blockchain"
    );
}
