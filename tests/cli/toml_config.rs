//! CLI TOML configuration tests
//!
//! Configuration files on disk, key validation and CLI overrides.

use authscan::app::cli::api::{Args, ConfigError, CONFIG_KEYS};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use toml::Table;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn args_with_config(extra: &[&str], path: &std::path::Path) -> Args {
    let path = path.to_string_lossy().to_string();
    let mut argv = vec!["authscan", "--config-file", path.as_str()];
    argv.extend_from_slice(extra);
    Args::try_parse_from(argv).unwrap()
}

#[tokio::test]
async fn test_config_file_is_applied() {
    let file = config_file(
        r#"
backend-url = "http://10.0.0.5:4001/blockchain/"
timeout = 4
log-level = "warn"
log-format = "ext"
color = false
"#,
    );
    let mut args = args_with_config(&["demo"], file.path());

    let applied = args.apply_config_file().await.unwrap();
    assert_eq!(applied, Some(file.path().to_path_buf()));

    let config = args.backend_config().unwrap();
    assert_eq!(config.base_url().as_str(), "http://10.0.0.5:4001/blockchain");
    assert_eq!(config.timeout(), Duration::from_secs(4));
    assert_eq!(args.log_level.as_deref(), Some("warn"));
    assert_eq!(args.log_format.as_deref(), Some("ext"));
    assert!(!args.use_color());
}

#[tokio::test]
async fn test_cli_overrides_config_file() {
    let file = config_file(
        r#"
backend-url = "http://file.example.com/blockchain"
timeout = 4
log-level = "warn"
"#,
    );
    let mut args = args_with_config(
        &[
            "--backend-url",
            "http://cli.example.com/blockchain",
            "--log-level",
            "trace",
        ],
        file.path(),
    );
    args.apply_config_file().await.unwrap();

    let config = args.backend_config().unwrap();
    assert_eq!(
        config.base_url().as_str(),
        "http://cli.example.com/blockchain"
    );
    assert_eq!(config.timeout(), Duration::from_secs(4));
    assert_eq!(args.log_level.as_deref(), Some("trace"));
}

#[tokio::test]
async fn test_unknown_key_fails() {
    let file = config_file("plugin-dir = \"/tmp\"\n");
    let mut args = args_with_config(&[], file.path());

    let err = args.apply_config_file().await.unwrap_err();
    assert_eq!(
        err,
        ConfigError::UnknownKey {
            key: "plugin-dir".to_string()
        }
    );
}

#[tokio::test]
async fn test_malformed_file_fails_to_parse() {
    let file = config_file("backend-url = \n");
    let mut args = args_with_config(&[], file.path());

    let err = args.apply_config_file().await.unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[tokio::test]
async fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = args_with_config(&[], &dir.path().join("absent.toml"));

    let err = args.apply_config_file().await.unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
}

#[test]
fn test_every_documented_key_is_accepted() {
    let mut config = Table::new();
    for key in CONFIG_KEYS {
        let value = match *key {
            "backend-url" => toml::Value::String("http://localhost:4001/blockchain".into()),
            "timeout" => toml::Value::Integer(10),
            "log-level" => toml::Value::String("info".into()),
            "log-format" => toml::Value::String("text".into()),
            "log-file" => toml::Value::String("none".into()),
            "color" => toml::Value::Boolean(true),
            other => panic!("untested key {}", other),
        };
        config.insert(key.to_string(), value);
    }

    let mut args = Args::default();
    args.apply_toml_values(&config).unwrap();
    assert_eq!(args.log_file, Some(PathBuf::from("none")));
    assert!(args.use_color());
}
