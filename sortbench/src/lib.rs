#![warn(missing_docs)]
//! # SortBench
//!
//! Benchmark harness comparing bubble sort and quicksort across dataset
//! sizes and data distributions:
//! - **Deterministic Datasets**: seeded random permutations and reversed
//!   runs, reproducible per (seed, size)
//! - **Timing Harness**: repeated wall-clock measurements against one
//!   shared dataset
//! - **Summary Statistics**: mean and sample standard deviation per cell
//! - **Reporting**: aligned console table, CSV with the canonical header,
//!   optional JSON report with run metadata
//!
//! ## Quick Start
//!
//! ```ignore
//! use sortbench::prelude::*;
//!
//! let rows = run_experiment(&ExperimentConfig::default(), ALGORITHMS);
//! print!("{}", format_results_table(&rows));
//! ```

// Re-export core types
pub use sortbench_core::{
    ALGORITHMS, AlgorithmDef, DEFAULT_SEED, Scenario, SortFn, UnsupportedScenario, bubble_sort,
    generate, measure_sort, pin_to_cpu, quicksort,
};

// Re-export stats
pub use sortbench_stats::{SummaryStatistics, compute_summary};

// Re-export report types and formats
pub use sortbench_report::{
    Report, ReportError, ReportMeta, ResultRow, format_results_table, generate_csv_report,
    generate_json_report, write_csv_report, write_json_report,
};

// Re-export the runner and configuration
pub use sortbench_cli::{ExperimentConfig, SortbenchConfig, run_experiment};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        ALGORITHMS, ExperimentConfig, ResultRow, Scenario, format_results_table, run_experiment,
    };
}

/// Run the SortBench CLI harness.
///
/// Call this from the binary's `main()`:
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     sortbench::run()
/// }
/// ```
pub use sortbench_cli::run;
