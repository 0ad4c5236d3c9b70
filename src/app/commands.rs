//! Handlers for the one-shot subcommands
//!
//! Each handler writes its output to the given writer and returns the process
//! exit code.

use crate::app::display::{render_envelope, render_error, render_verdict, DisplayOptions};
use crate::backend::api::{Envelope, FullProductRecord, ProductBackend};
use crate::core::validation::validate_product_code;
use crate::scanner::api::{
    from_record, ScanError, ScanOrchestrator, ScanResult, VerifiedProduct, DEFAULT_FAILURE_MESSAGE,
};
use std::io::Write;
use std::path::Path;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Verify one code and print the verdict
///
/// Any resolved verdict succeeds, suspicious ones included.
pub async fn verify<W: Write>(
    orchestrator: &ScanOrchestrator,
    code: &str,
    out: &mut W,
    options: DisplayOptions,
) -> std::io::Result<i32> {
    report(orchestrator.scan(code).await, out, options)
}

/// Print the demo verdict
pub async fn demo<W: Write>(
    orchestrator: &ScanOrchestrator,
    out: &mut W,
    options: DisplayOptions,
) -> std::io::Result<i32> {
    report(orchestrator.scan_demo().await, out, options)
}

/// Fetch a full product record
///
/// The record is shown as a verdict, or as the raw envelope in JSON mode.
pub async fn get<W: Write>(
    backend: &dyn ProductBackend,
    product_id: &str,
    out: &mut W,
    options: DisplayOptions,
) -> std::io::Result<i32> {
    let envelope = match validate_product_code(product_id) {
        Ok(product_id) => backend
            .get(&product_id)
            .await
            .unwrap_or_else(|e| failed("Fetching product", e)),
        Err(message) => Envelope::failure(Some(message)),
    };
    if options.json {
        return print_envelope(&envelope, out);
    }

    let outcome = envelope
        .payload()
        .and_then(from_record)
        .ok_or_else(|| ScanError::NotFoundOrInvalid {
            message: envelope
                .message()
                .unwrap_or(DEFAULT_FAILURE_MESSAGE)
                .to_string(),
        });
    report(outcome, out, options)
}

/// Register the product record stored as JSON in `file`
pub async fn register<W: Write>(
    backend: &dyn ProductBackend,
    file: &Path,
    out: &mut W,
) -> std::io::Result<i32> {
    let envelope = match read_record(file).await {
        Ok(record) => {
            log::debug!("Registering product '{}'", record.product_id);
            backend
                .register(&record)
                .await
                .unwrap_or_else(|e| failed("Registering product", e))
        }
        Err(message) => Envelope::failure(Some(message)),
    };
    print_envelope(&envelope, out)
}

/// Load a product record from a JSON file
pub async fn read_record(file: &Path) -> Result<FullProductRecord, String> {
    let contents = tokio::fs::read_to_string(file)
        .await
        .map_err(|e| format!("Error reading {}: {}", file.display(), e))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Invalid product record in {}: {}", file.display(), e))
}

fn failed<T>(context: &str, error: crate::backend::api::BackendError) -> Envelope<T> {
    crate::core::error_handling::log_error_with_context(&error, context);
    Envelope::from_error(&error)
}

fn report<W: Write>(
    outcome: ScanResult<VerifiedProduct>,
    out: &mut W,
    options: DisplayOptions,
) -> std::io::Result<i32> {
    match outcome {
        Ok(product) => {
            writeln!(out, "{}", render_verdict(&product, options))?;
            Ok(EXIT_SUCCESS)
        }
        Err(error) => {
            log::debug!("Command failed with {} error", error.kind());
            writeln!(out, "{}", render_error(&error, options))?;
            Ok(EXIT_FAILURE)
        }
    }
}

fn print_envelope<T: serde::Serialize, W: Write>(
    envelope: &Envelope<T>,
    out: &mut W,
) -> std::io::Result<i32> {
    writeln!(out, "{}", render_envelope(envelope))?;
    Ok(if envelope.success {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    })
}
