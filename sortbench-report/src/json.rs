//! JSON Output

use crate::ReportError;
use crate::report::Report;
use std::io::Write;
use std::path::Path;

/// Generate a prettified JSON report, including run metadata.
pub fn generate_json_report(report: &Report) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write the JSON report to `path`, replacing any existing file.
pub fn write_json_report(path: &Path, report: &Report) -> Result<(), ReportError> {
    let json = generate_json_report(report)?;
    let mut file = std::fs::File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}
