// src/reporting/json.rs
//! JSON export for machine consumption.

use crate::analysis::AnalysisReport;
use crate::error::Result;
use crate::graph::CooccurrenceTable;

/// Formats the full report as pretty-printed JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Serializes a table as the nested `ingredient -> neighbor -> count` mapping.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn table_to_json(table: &CooccurrenceTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(table)?)
}

/// Parses a nested mapping back into a validated table.
///
/// # Errors
/// Returns an error for invalid JSON, or for asymmetric counts, zero counts or
/// self entries.
pub fn table_from_json(json: &str) -> Result<CooccurrenceTable> {
    Ok(serde_json::from_str(json)?)
}
