//! Configuration loading from sortbench.toml
//!
//! Defaults can be overridden in a `sortbench.toml` file discovered by
//! walking up from the current directory; CLI flags override both.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// SortBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SortbenchConfig {
    /// Experiment configuration
    #[serde(default)]
    pub experiment: ExperimentSection,
    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Experiment parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentSection {
    /// Dataset sizes, in run order
    #[serde(default = "default_sizes")]
    pub sizes: Vec<usize>,
    /// Scenario tags: subset of "random", "reversed"
    #[serde(default = "default_scenarios")]
    pub scenarios: Vec<String>,
    /// Timed executions per (scenario, size, algorithm) cell
    #[serde(default = "default_repeats")]
    pub repeats: usize,
    /// Base seed for dataset generation
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Pin the run to this CPU core
    #[serde(default)]
    pub pin_cpu: Option<usize>,
}

impl Default for ExperimentSection {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            scenarios: default_scenarios(),
            repeats: default_repeats(),
            seed: default_seed(),
            pin_cpu: None,
        }
    }
}

fn default_sizes() -> Vec<usize> {
    vec![100, 1000, 5000, 10000]
}
fn default_scenarios() -> Vec<String> {
    vec!["random".to_string(), "reversed".to_string()]
}
fn default_repeats() -> usize {
    5
}
fn default_seed() -> u64 {
    sortbench_core::DEFAULT_SEED
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    /// CSV output path
    #[serde(default = "default_csv_path")]
    pub csv_path: String,
    /// Also write a JSON report here
    #[serde(default)]
    pub json_path: Option<String>,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            json_path: None,
        }
    }
}

fn default_csv_path() -> String {
    "resultados_ordenamiento.csv".to_string()
}

impl SortbenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("sortbench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# SortBench Configuration

[experiment]
# Dataset sizes, in run order
sizes = [100, 1000, 5000, 10000]
# Scenarios: subset of "random", "reversed"
scenarios = ["random", "reversed"]
# Timed executions per (scenario, size, algorithm) cell
repeats = 5
# Base seed for dataset generation (combined with each size)
seed = 42
# Pin the run to a CPU core (uncomment to enable)
# pin_cpu = 0

[output]
# CSV output path (overwritten on each run)
csv_path = "resultados_ordenamiento.csv"
# Also write a JSON report (uncomment to enable)
# json_path = "resultados_ordenamiento.json"
"#
        .to_string()
    }
}
