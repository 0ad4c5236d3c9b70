//! TOML configuration file parsing and loading
//!
//! Values from the configuration file only fill options the command line left
//! unset, so the command line always wins.

use crate::core::logging::LOG_LEVELS;
use crate::core::validation::{validate_base_url, validate_positive_int};
use std::path::{Path, PathBuf};

use super::args::Args;

/// Keys accepted in the configuration file
pub const CONFIG_KEYS: &[&str] = &[
    "backend-url",
    "timeout",
    "log-level",
    "log-format",
    "log-file",
    "color",
];

const LOG_FORMATS: &[&str] = &["text", "ext", "json"];

/// Configuration file errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("The specified configuration file does not exist: {path}")]
    NotFound { path: String },

    #[error("Error reading configuration file {path}: {message}")]
    Read { path: String, message: String },

    #[error("Error parsing configuration file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Unknown configuration key '{key}'")]
    UnknownKey { key: String },

    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl crate::core::error_handling::ContextualError for ConfigError {
    // Display already names the file or key, shown after the operation context
    fn is_user_actionable(&self) -> bool {
        false
    }

    fn user_message(&self) -> Option<&str> {
        None
    }
}

/// Default configuration file location, `<config_dir>/Authscan/authscan.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("Authscan").join("authscan.toml"))
}

/// Read and parse a TOML configuration file
pub async fn read_config_file(path: &Path) -> ConfigResult<toml::Table> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    toml::from_str::<toml::Table>(&contents).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

impl Args {
    /// Locate, load and apply the configuration file
    ///
    /// An explicit `--config-file` must exist. The default location is only
    /// used when present. Returns the path that was applied, if any.
    pub async fn apply_config_file(&mut self) -> ConfigResult<Option<PathBuf>> {
        let path = match self.config_file.clone() {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.display().to_string(),
                    });
                }
                path
            }
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(None),
            },
        };

        let config = read_config_file(&path).await?;
        self.apply_toml_values(&config)?;
        log::debug!("Applied configuration file {}", path.display());
        Ok(Some(path))
    }

    /// Apply TOML configuration values to options not set on the command line
    pub fn apply_toml_values(&mut self, config: &toml::Table) -> ConfigResult<()> {
        if let Some(key) = config.keys().find(|k| !CONFIG_KEYS.contains(&k.as_str())) {
            return Err(ConfigError::UnknownKey { key: key.clone() });
        }

        if let Some(url) = string_value(config, "backend-url")? {
            validate_base_url(url).map_err(|message| invalid("backend-url", message))?;
            self.backend_url.get_or_insert_with(|| url.to_string());
        }
        if let Some(value) = config.get("timeout") {
            let secs = match value {
                toml::Value::Integer(n) => validate_positive_int(&n.to_string()),
                toml::Value::String(s) => validate_positive_int(s),
                _ => Err("expected a positive integer".to_string()),
            }
            .map_err(|message| invalid("timeout", message))?;
            self.timeout.get_or_insert(secs);
        }
        if let Some(level) = string_value(config, "log-level")? {
            let level = one_of("log-level", level, LOG_LEVELS)?;
            self.log_level.get_or_insert(level);
        }
        if let Some(format) = string_value(config, "log-format")? {
            let format = one_of("log-format", format, LOG_FORMATS)?;
            self.log_format.get_or_insert(format);
        }
        if let Some(file) = string_value(config, "log-file")? {
            self.log_file.get_or_insert_with(|| PathBuf::from(file));
        }
        if let Some(value) = config.get("color") {
            let color = value
                .as_bool()
                .ok_or_else(|| invalid("color", "expected true or false".to_string()))?;
            if !self.color && !self.no_color {
                self.color = color;
                self.no_color = !color;
            }
        }

        Ok(())
    }
}

fn invalid(key: &str, message: String) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    }
}

fn string_value<'a>(config: &'a toml::Table, key: &str) -> ConfigResult<Option<&'a str>> {
    match config.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| invalid(key, "expected a string".to_string())),
    }
}

fn one_of(key: &str, value: &str, allowed: &[&str]) -> ConfigResult<String> {
    let lowered = value.to_ascii_lowercase();
    if allowed.contains(&lowered.as_str()) {
        Ok(lowered)
    } else {
        Err(invalid(
            key,
            format!("'{}' is not one of {}", value, allowed.join(", ")),
        ))
    }
}
