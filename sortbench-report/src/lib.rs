#![warn(missing_docs)]
//! SortBench Report - Result Structures and Output Formats
//!
//! Turns collected measurements into the three output surfaces:
//! - An aligned console table (human-readable)
//! - CSV with the canonical Spanish header (spreadsheet-compatible)
//! - JSON with run metadata (machine-readable)

mod csv;
mod json;
mod report;
mod table;

pub use crate::csv::{generate_csv_report, write_csv_report};
pub use json::{generate_json_report, write_json_report};
pub use report::{Report, ReportMeta, ResultRow};
pub use table::format_results_table;

use thiserror::Error;

/// Errors raised while producing or persisting a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// CSV serialization failed
    #[error("failed to serialize CSV: {0}")]
    Csv(#[from] ::csv::Error),
    /// JSON serialization failed
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Writing the output file failed
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
