//! Experiment Execution
//!
//! Cross-product driver: scenario-major, then size, then algorithm in
//! registry order. One dataset is generated per (scenario, size) pair and
//! shared read-only by every algorithm measured against it, so all
//! algorithms in a cell see identical input.

use sortbench_core::{AlgorithmDef, Scenario, generate, measure_sort};
use sortbench_report::ResultRow;
use sortbench_stats::compute_summary;

/// Fully resolved inputs for one experiment run.
///
/// Reified as a struct (rather than module-level constants) so tests can
/// run tiny experiments.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Dataset sizes, in run order
    pub sizes: Vec<usize>,
    /// Scenarios, in run order
    pub scenarios: Vec<Scenario>,
    /// Timed executions per (scenario, size, algorithm) cell
    pub repeats: usize,
    /// Base seed for dataset generation
    pub seed: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            sizes: vec![100, 1000, 5000, 10000],
            scenarios: Scenario::ALL.to_vec(),
            repeats: 5,
            seed: sortbench_core::DEFAULT_SEED,
        }
    }
}

/// Run the full cross-product and collect one row per measurement.
///
/// Row order is reproducible: scenario-major, then size, then algorithm
/// in the order `algorithms` lists them.
pub fn run_experiment(config: &ExperimentConfig, algorithms: &[AlgorithmDef]) -> Vec<ResultRow> {
    let mut results =
        Vec::with_capacity(config.scenarios.len() * config.sizes.len() * algorithms.len());

    for &scenario in &config.scenarios {
        for &n in &config.sizes {
            let data = generate(n, scenario, config.seed);

            for alg in algorithms {
                tracing::info!(
                    scenario = %scenario,
                    n,
                    algorithm = alg.id,
                    repeats = config.repeats,
                    "measuring"
                );

                let samples = measure_sort(alg.sort_fn, &data, config.repeats);
                let stats = compute_summary(&samples);

                tracing::debug!(
                    mean_s = stats.mean,
                    std_dev_s = stats.std_dev,
                    min_s = stats.min,
                    max_s = stats.max,
                    cv_pct = stats.coefficient_of_variation(),
                    "aggregated"
                );

                results.push(ResultRow {
                    scenario,
                    size: n,
                    algorithm: alg.name.to_string(),
                    repeats: config.repeats,
                    mean_s: stats.mean,
                    std_dev_s: stats.std_dev,
                });
            }
        }
    }

    results
}
