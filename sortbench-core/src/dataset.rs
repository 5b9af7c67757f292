//! Deterministic Benchmark Datasets
//!
//! One dataset is generated per (scenario, size) pair and shared
//! read-only by every algorithm measured against it. Generation is fully
//! deterministic: the random scenario derives its stream from
//! `seed + n`, so repeated runs for the same size always see the same
//! permutation while different sizes draw from unrelated streams.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Base seed combined with the dataset length for the random scenario.
pub const DEFAULT_SEED: u64 = 42;

/// Data-distribution pattern used to generate benchmark input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Seeded random permutation of `0..n`
    Random,
    /// Strictly descending sequence `n..=1`
    Reversed,
}

impl Scenario {
    /// All scenarios, in their canonical run order.
    pub const ALL: [Scenario; 2] = [Scenario::Random, Scenario::Reversed];

    /// The tag used in configuration, reports, and CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            Scenario::Random => "random",
            Scenario::Reversed => "reversed",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for scenario tags the generator does not understand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported scenario: {0:?} (expected one of: random, reversed)")]
pub struct UnsupportedScenario(pub String);

impl FromStr for Scenario {
    type Err = UnsupportedScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(Scenario::Random),
            "reversed" => Ok(Scenario::Reversed),
            other => Err(UnsupportedScenario(other.to_string())),
        }
    }
}

/// Generate the input sequence for one (scenario, size) cell.
///
/// Random: a ChaCha8 shuffle of `[0, n)` seeded with `seed + n`. ChaCha8
/// keeps the permutation reproducible across platforms and releases.
/// Reversed: the strictly descending run `[n, n-1, ..., 1]`.
pub fn generate(n: usize, scenario: Scenario, seed: u64) -> Vec<i64> {
    match scenario {
        Scenario::Random => {
            let mut data: Vec<i64> = (0..n as i64).collect();
            let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(n as u64));
            data.shuffle(&mut rng);
            data
        }
        Scenario::Reversed => (1..=n as i64).rev().collect(),
    }
}
