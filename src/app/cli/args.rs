//! Core CLI arguments structure and basic functionality
//!
//! This module contains the Args struct definition and the accessors used by
//! startup. Configuration file loading lives in `config`.

use crate::backend::api::{BackendConfig, BackendResult};
use crate::core::validation::validate_positive_int;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// Global arguments structure with all command-line options
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "authscan")]
#[command(about = "Verify product authenticity against a verification service")]
#[command(version, long_version = crate::core::version::long_version())]
pub struct Args {
    /// Verification service base URL
    #[arg(short = 'b', long = "backend-url", value_name = "URL")]
    pub backend_url: Option<String>,

    /// Request timeout in seconds
    #[arg(short = 't', long = "timeout", value_name = "SECONDS", value_parser = validate_positive_int)]
    pub timeout: Option<u64>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(
        short = 'f',
        long = "log-file",
        value_name = "FILE",
        help = "Log file path (use 'none' to disable file logging)"
    )]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Force colored output (overrides TTY detection)
    #[arg(long = "color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color", conflicts_with = "color")]
    pub no_color: bool,

    /// Print verdicts and envelopes as JSON
    #[arg(long = "json")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Commands; without one an interactive session starts
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Verify a single product code
    Verify {
        /// Decoded product code
        #[arg(value_name = "CODE")]
        code: String,
    },
    /// Show the demo verdict without contacting the service
    Demo,
    /// Fetch the full record of a product
    Get {
        #[arg(value_name = "PRODUCT_ID")]
        product_id: String,
    },
    /// Register a product record read from a JSON file
    Register {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Read codes line by line and keep a session history
    Session,
}

impl Args {
    /// Command to run, defaulting to an interactive session
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Session)
    }

    /// Whether output should be colored
    ///
    /// Explicit flags win; otherwise color follows whether stdout is a terminal.
    pub fn use_color(&self) -> bool {
        if self.no_color {
            false
        } else if self.color {
            true
        } else {
            std::io::IsTerminal::is_terminal(&std::io::stdout())
        }
    }

    /// Log file as a string, if one was requested
    pub fn log_file_str(&self) -> Option<String> {
        self.log_file
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
    }

    /// Resolve the backend configuration, once, from these arguments
    pub fn backend_config(&self) -> BackendResult<BackendConfig> {
        let config = BackendConfig::resolve(self.backend_url.as_deref())?;
        Ok(match self.timeout {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        })
    }
}
