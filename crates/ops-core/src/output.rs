//! Table Output
//!
//! Renders the ledger as delimited text: one header row naming each field,
//! one row per event in timestamp order, with the derived running-supply
//! column last. This is the run's sole external interface; I/O errors are
//! surfaced to the caller unmodified.

use std::fs;
use std::path::Path;

use ops_events::{EventCategory, LedgerRow};

/// Field separator for the output table.
pub const DELIMITER: char = ',';

/// Column names, in output order.
pub const COLUMNS: &[&str] = &[
    "event_id",
    "timestamp",
    "user_id",
    "user_join_date",
    "user_business_type",
    "user_region",
    "user_acquisition_channel",
    "category",
    "product",
    "blockchain",
    "transaction_id",
    "amount",
    "status",
    "running_supply",
];

/// Renders the full table, header first, one line per row.
pub fn render_table(rows: &[LedgerRow]) -> String {
    let mut out = String::new();
    out.push_str(&COLUMNS.join(&DELIMITER.to_string()));
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(row));
        out.push('\n');
    }
    out
}

/// Renders the table and writes it to `path`.
pub fn write_table(rows: &[LedgerRow], path: impl AsRef<Path>) -> std::io::Result<()> {
    tracing::info!(rows = rows.len(), path = %path.as_ref().display(), "writing operations table");
    fs::write(path, render_table(rows))
}

fn format_row(row: &LedgerRow) -> String {
    let event = &row.event;
    // The acquisition channel is only meaningful on the signup event itself.
    let channel = if event.category == EventCategory::SignupBusiness {
        event.user.acquisition_channel.as_str()
    } else {
        ""
    };

    let fields: [String; 14] = [
        event.event_id.clone(),
        event.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        event.user.user_id.clone(),
        event.user.join_date.format("%Y-%m-%d").to_string(),
        event.user.business_type.as_str().to_string(),
        event.user.region.as_str().to_string(),
        channel.to_string(),
        event.category.as_str().to_string(),
        event.product.clone().unwrap_or_default(),
        event.blockchain.clone().unwrap_or_default(),
        event.transaction_id.clone().unwrap_or_default(),
        event.amount.map(|a| format!("{:.2}", a)).unwrap_or_default(),
        event.status.as_str().to_string(),
        format!("{:.2}", row.running_supply),
    ];

    fields
        .iter()
        .map(|field| quote(field))
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string())
}

/// Quotes a field if it contains the delimiter, a quote, or a newline.
fn quote(field: &str) -> String {
    if field.contains(DELIMITER) || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
