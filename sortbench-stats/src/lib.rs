#![warn(missing_docs)]
//! SortBench Statistical Engine
//!
//! Aggregates raw elapsed-seconds samples into summary statistics:
//! - Arithmetic mean and median
//! - Sample standard deviation (N-1 divisor, 0.0 below two samples)
//! - Extremes (min, max)
//!
//! Timing samples are transient: the harness hands them over, the
//! summary is computed, and only the aggregate travels into the report.

/// Summary statistics over one batch of timing samples.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStatistics {
    /// Arithmetic mean of all samples
    pub mean: f64,
    /// Median of all samples
    pub median: f64,
    /// Sample standard deviation (0.0 for fewer than two samples)
    pub std_dev: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// Number of samples aggregated
    pub sample_count: usize,
}

impl SummaryStatistics {
    /// Coefficient of variation (relative stddev, percent)
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean == 0.0 {
            0.0
        } else {
            (self.std_dev / self.mean) * 100.0
        }
    }
}

/// Compute summary statistics over raw samples.
///
/// Empty input yields all-zero statistics rather than an error: the
/// caller distinguishes "no samples" via `sample_count`.
pub fn compute_summary(samples: &[f64]) -> SummaryStatistics {
    if samples.is_empty() {
        return SummaryStatistics {
            mean: 0.0,
            median: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
            sample_count: 0,
        };
    }

    let mean = samples.iter().sum::<f64>() / samples.len() as f64;

    // Sample standard deviation with the N-1 divisor; a single sample
    // has no dispersion estimate and reports 0.0.
    let std_dev = if samples.len() < 2 {
        0.0
    } else {
        let variance =
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (samples.len() - 1) as f64;
        variance.sqrt()
    };

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let median = if sorted.len() % 2 == 0 {
        let mid = sorted.len() / 2;
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[sorted.len() / 2]
    };

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    SummaryStatistics {
        mean,
        median,
        std_dev,
        min,
        max,
        sample_count: samples.len(),
    }
}
