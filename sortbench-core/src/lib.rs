#![warn(missing_docs)]
//! SortBench Core - Algorithms, Datasets, and Timing
//!
//! This crate provides the measured side of the benchmark:
//! - The sorting implementations under test (bubble sort, quicksort)
//! - Deterministic dataset generation per (scenario, size) pair
//! - The wall-clock timing harness that produces raw samples
//! - CPU affinity pinning for steadier measurements

mod algorithms;
mod dataset;
mod measure;

pub use algorithms::{SortFn, bubble_sort, quicksort};
pub use dataset::{DEFAULT_SEED, Scenario, UnsupportedScenario, generate};
pub use measure::{measure_sort, pin_to_cpu};

/// Sort algorithm registered for benchmarking.
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmDef {
    /// Unique identifier (used for `--filter` and `list`)
    pub id: &'static str,
    /// Label used in reports
    pub name: &'static str,
    /// Asymptotic complexity shown by `list`
    pub complexity: &'static str,
    /// Function pointer to the implementation
    pub sort_fn: SortFn,
}

/// All benchmarked algorithms, in their fixed execution order.
///
/// The order is part of the output contract: result rows for one
/// (scenario, size) pair always appear bubble sort first.
pub const ALGORITHMS: &[AlgorithmDef] = &[
    AlgorithmDef {
        id: "bubble",
        name: "Burbuja",
        complexity: "O(n^2)",
        sort_fn: bubble_sort,
    },
    AlgorithmDef {
        id: "quicksort",
        name: "Quicksort",
        complexity: "O(n log n)",
        sort_fn: quicksort,
    },
];
