//! Interactive scan session
//!
//! Each input line is a decoded product code as delivered by the capture
//! widget. Lines starting with `:` are session commands.

use crate::app::display::{render_error, render_history, render_verdict, DisplayOptions};
use crate::core::logging::{reconfigure_logging, LOG_LEVELS};
use crate::scanner::api::ScanOrchestrator;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Scan(String),
    Demo,
    Clear,
    History,
    /// Change the log level for the rest of the session
    Log(String),
    Quit,
    Unknown(String),
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.strip_prefix(':') {
            Some(command) => {
                let mut words = command.split_whitespace();
                let name = words.next().unwrap_or_default().to_ascii_lowercase();
                let argument = words.next();
                match (name.as_str(), argument) {
                    ("demo", None) => SessionCommand::Demo,
                    ("clear", None) => SessionCommand::Clear,
                    ("history", None) => SessionCommand::History,
                    ("log", Some(level)) => SessionCommand::Log(level.to_ascii_lowercase()),
                    ("quit" | "exit" | "q", None) => SessionCommand::Quit,
                    _ => SessionCommand::Unknown(trimmed.to_string()),
                }
            }
            // The orchestrator trims and validates the raw line
            None => SessionCommand::Scan(line.to_string()),
        }
    }
}

/// Totals reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub resolved: usize,
    pub failed: usize,
}

/// Run a session until `:quit` or end of input
pub async fn run_session<R, W>(
    orchestrator: &ScanOrchestrator,
    input: R,
    out: &mut W,
    options: DisplayOptions,
) -> std::io::Result<SessionSummary>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut summary = SessionSummary::default();
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let outcome = match SessionCommand::parse(&line) {
            SessionCommand::Quit => break,
            SessionCommand::Clear => {
                orchestrator.clear();
                writeln!(out, "Cleared")?;
                continue;
            }
            SessionCommand::History => {
                writeln!(out, "{}", render_history(&orchestrator.history(), options))?;
                continue;
            }
            SessionCommand::Log(level) => {
                writeln!(out, "{}", change_log_level(&level))?;
                continue;
            }
            SessionCommand::Unknown(command) => {
                writeln!(
                    out,
                    "Unknown command '{}' (try :demo, :clear, :history, :log <level>, :quit)",
                    command
                )?;
                continue;
            }
            SessionCommand::Demo => orchestrator.scan_demo().await,
            SessionCommand::Scan(code) => orchestrator.scan(&code).await,
        };

        match outcome {
            Ok(product) => {
                summary.resolved += 1;
                writeln!(out, "{}", render_verdict(&product, options))?;
            }
            Err(error) => {
                summary.failed += 1;
                writeln!(out, "{}", render_error(&error, options))?;
            }
        }
        out.flush()?;
    }

    log::info!(
        "Session ended: {} resolved, {} failed",
        summary.resolved,
        summary.failed
    );
    Ok(summary)
}

fn change_log_level(level: &str) -> String {
    if !LOG_LEVELS.contains(&level) {
        return format!(
            "Unknown log level '{}' (expected one of {})",
            level,
            LOG_LEVELS.join(", ")
        );
    }
    match reconfigure_logging(level) {
        Ok(()) => {
            log::info!("Log level changed to {}", level);
            format!("Log level set to {}", level)
        }
        Err(e) => format!("Could not change log level: {}", e),
    }
}
