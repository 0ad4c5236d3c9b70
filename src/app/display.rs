//! Terminal rendering of verdicts, errors, history and envelopes
//!
//! Every function returns the text to print so callers decide where it goes.

use crate::backend::api::Envelope;
use crate::core::styles::StyleRole;
use crate::scanner::api::{ScanError, VerifiedProduct};
use prettytable::{format, Cell, Row, Table};
use serde::Serialize;

/// How output should be rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub color: bool,
    pub json: bool,
}

/// Render a single verdict
pub fn render_verdict(product: &VerifiedProduct, options: DisplayOptions) -> String {
    if options.json {
        return to_json(product);
    }

    let role = StyleRole::for_status(product.status);
    let verdict = if product.status.is_trusted() {
        "Authentic product"
    } else {
        "Not verified as authentic"
    };

    let mut lines = vec![format!(
        "{} {}",
        role.paint(&format!("[{}]", product.status.label()), options.color),
        StyleRole::Header.paint(verdict, options.color)
    )];

    let mut field = |key: &str, value: &str| {
        lines.push(format!(
            "  {} {}",
            StyleRole::Key.paint(&format!("{:<15}", format!("{}:", key)), options.color),
            StyleRole::Value.paint(value, options.color)
        ));
    };

    field("Product ID", &product.product_id);
    field("Name", &product.product_name);
    field("Category", &product.category);
    field("Origin", &product.origin);
    if let Some(farmer) = &product.farmer {
        field("Farmer", farmer);
    }
    if let Some(harvest_date) = &product.harvest_date {
        field("Harvest date", harvest_date);
    }
    if let Some(lab_tested) = product.lab_tested {
        field("Lab tested", if lab_tested { "yes" } else { "no" });
    }
    if product.certifications.is_empty() {
        field("Certifications", "none");
    } else {
        field("Certifications", &product.certifications.join(", "));
    }

    lines.join("\n")
}

/// Render a failed command
pub fn render_error(error: &ScanError, options: DisplayOptions) -> String {
    if options.json {
        return to_json(&serde_json::json!({
            "error": error.to_string(),
            "kind": error.kind(),
        }));
    }
    format!(
        "{} {}",
        StyleRole::Error.paint("Error:", options.color),
        error
    )
}

/// Render the session history, most recent first
pub fn render_history(history: &[VerifiedProduct], options: DisplayOptions) -> String {
    if options.json {
        return to_json(&history);
    }
    if history.is_empty() {
        return StyleRole::Dim.paint("No scans yet", options.color);
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(Row::new(
        ["#", "Product ID", "Name", "Origin", "Status"]
            .iter()
            .map(|title| Cell::new(&StyleRole::Header.paint(title, options.color)))
            .collect(),
    ));

    for (index, product) in history.iter().enumerate() {
        let status = StyleRole::for_status(product.status)
            .paint(product.status.label(), options.color);
        table.add_row(Row::new(vec![
            Cell::new(&(index + 1).to_string()),
            Cell::new(&product.product_id),
            Cell::new(&product.product_name),
            Cell::new(&product.origin),
            Cell::new(&status),
        ]));
    }

    table.to_string()
}

/// Render a raw service envelope as JSON
pub fn render_envelope<T: Serialize>(envelope: &Envelope<T>) -> String {
    to_json(envelope)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        log::warn!("Failed to serialise output: {}", e);
        format!("{{\"error\": \"{}\"}}", e)
    })
}
