//! Report Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sortbench_core::Scenario;

/// One aggregated measurement for a (scenario, size, algorithm) cell.
///
/// Serde renames pin the serialized field names to the canonical CSV
/// header: `escenario,n,algoritmo,repeticiones,promedio_s,desv_std_s`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Data distribution the dataset was generated with
    #[serde(rename = "escenario")]
    pub scenario: Scenario,
    /// Dataset length
    #[serde(rename = "n")]
    pub size: usize,
    /// Report label of the measured algorithm
    #[serde(rename = "algoritmo")]
    pub algorithm: String,
    /// Number of timed executions aggregated into this row
    #[serde(rename = "repeticiones")]
    pub repeats: usize,
    /// Mean elapsed time, seconds
    #[serde(rename = "promedio_s")]
    pub mean_s: f64,
    /// Sample standard deviation, seconds
    #[serde(rename = "desv_std_s")]
    pub std_dev_s: f64,
}

/// Complete experiment report (JSON output).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata
    pub meta: ReportMeta,
    /// One row per (scenario, size, algorithm) measurement, in run order
    pub results: Vec<ResultRow>,
}

/// Run metadata captured alongside the results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Crate version that produced the report
    pub version: String,
    /// UTC time the report was generated
    pub timestamp: DateTime<Utc>,
    /// Base seed for dataset generation
    pub seed: u64,
    /// Repeat count per measurement
    pub repeats: usize,
    /// Dataset sizes, in run order
    pub sizes: Vec<usize>,
    /// Scenarios, in run order
    pub scenarios: Vec<Scenario>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_serializes_with_spanish_field_names() {
        let row = ResultRow {
            scenario: Scenario::Random,
            size: 100,
            algorithm: "Burbuja".to_string(),
            repeats: 5,
            mean_s: 0.001,
            std_dev_s: 0.0002,
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["escenario"], "random");
        assert_eq!(json["n"], 100);
        assert_eq!(json["algoritmo"], "Burbuja");
        assert_eq!(json["repeticiones"], 5);
        assert!(json.get("promedio_s").is_some());
        assert!(json.get("desv_std_s").is_some());
    }

    #[test]
    fn test_row_roundtrips() {
        let row = ResultRow {
            scenario: Scenario::Reversed,
            size: 10,
            algorithm: "Quicksort".to_string(),
            repeats: 1,
            mean_s: 0.5,
            std_dev_s: 0.0,
        };

        let json = serde_json::to_string(&row).unwrap();
        let back: ResultRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}
