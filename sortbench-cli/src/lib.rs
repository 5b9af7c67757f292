#![warn(missing_docs)]
//! SortBench CLI Library
//!
//! Wires configuration, the experiment runner, and the reporters into
//! the `sortbench` binary: parse flags, layer them over
//! `sortbench.toml`, run the cross-product, print the table, persist the
//! CSV (and optionally a JSON report).

mod config;
mod runner;

pub use config::{ExperimentSection, OutputSection, SortbenchConfig};
pub use runner::{ExperimentConfig, run_experiment};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use regex::Regex;
use sortbench_core::{ALGORITHMS, AlgorithmDef, Scenario, pin_to_cpu};
use sortbench_report::{
    Report, ReportMeta, format_results_table, write_csv_report, write_json_report,
};
use std::path::PathBuf;

/// SortBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "sortbench")]
#[command(author, version, about = "SortBench - sorting algorithm benchmark")]
pub struct Cli {
    /// Optional subcommand (List, Run); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Dataset sizes, comma-separated (e.g. 100,1000,5000)
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<usize>>,

    /// Scenarios, comma-separated: random, reversed
    #[arg(long, value_delimiter = ',')]
    pub scenarios: Option<Vec<String>>,

    /// Timed executions per (scenario, size, algorithm) cell
    #[arg(short, long)]
    pub repeats: Option<usize>,

    /// Base seed for dataset generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// CSV output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write a JSON report to this path
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Filter algorithms by regex over id or name
    #[arg(long)]
    pub filter: Option<String>,

    /// Pin the run to this CPU core
    #[arg(long)]
    pub pin_cpu: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the algorithm registry
    List,
    /// Run the experiment (default)
    Run,
}

/// Run the SortBench CLI. Entry point for the `sortbench` binary.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("sortbench=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("sortbench=info")
            .init();
    }

    run_with_cli(cli)
}

/// Run the SortBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Discover sortbench.toml configuration (CLI flags override)
    let config = SortbenchConfig::discover().unwrap_or_default();

    match cli.command {
        Some(Commands::List) => list_algorithms(),
        Some(Commands::Run) | None => run_benchmarks(&cli, &config),
    }
}

fn list_algorithms() -> anyhow::Result<()> {
    println!("SortBench Algorithms:");
    for alg in ALGORITHMS {
        println!("├── {} ({}, {})", alg.id, alg.name, alg.complexity);
    }
    println!("{} algorithms registered.", ALGORITHMS.len());
    Ok(())
}

/// Select algorithms from the registry, preserving registry order.
///
/// Ordering is part of the output contract, so matches are never
/// re-sorted.
fn filter_algorithms(filter: Option<&str>) -> anyhow::Result<Vec<AlgorithmDef>> {
    let Some(pattern) = filter else {
        return Ok(ALGORITHMS.to_vec());
    };

    let re = Regex::new(pattern).with_context(|| format!("invalid --filter regex: {pattern}"))?;
    let selected: Vec<AlgorithmDef> = ALGORITHMS
        .iter()
        .filter(|alg| re.is_match(alg.id) || re.is_match(alg.name))
        .copied()
        .collect();

    if selected.is_empty() {
        let available: Vec<&str> = ALGORITHMS.iter().map(|a| a.id).collect();
        bail!(
            "no algorithm matches filter {:?}; available: {}",
            pattern,
            available.join(", ")
        );
    }

    Ok(selected)
}

/// Build the experiment inputs by layering: sortbench.toml defaults → CLI overrides.
fn build_experiment_config(
    cli: &Cli,
    config: &SortbenchConfig,
) -> anyhow::Result<ExperimentConfig> {
    let sizes = cli
        .sizes
        .clone()
        .unwrap_or_else(|| config.experiment.sizes.clone());

    let scenario_tags = cli
        .scenarios
        .clone()
        .unwrap_or_else(|| config.experiment.scenarios.clone());
    let scenarios = scenario_tags
        .iter()
        .map(|tag| tag.parse::<Scenario>())
        .collect::<Result<Vec<_>, _>>()?;

    let repeats = cli.repeats.unwrap_or(config.experiment.repeats);
    let seed = cli.seed.unwrap_or(config.experiment.seed);

    if sizes.is_empty() {
        bail!("no dataset sizes configured");
    }
    if scenarios.is_empty() {
        bail!("no scenarios configured");
    }
    if repeats == 0 {
        bail!("repeats must be at least 1");
    }

    Ok(ExperimentConfig {
        sizes,
        scenarios,
        repeats,
        seed,
    })
}

fn run_benchmarks(cli: &Cli, config: &SortbenchConfig) -> anyhow::Result<()> {
    let algorithms = filter_algorithms(cli.filter.as_deref())?;
    let experiment = build_experiment_config(cli, config)?;

    if let Some(cpu) = cli.pin_cpu.or(config.experiment.pin_cpu) {
        match pin_to_cpu(cpu) {
            Ok(()) => tracing::info!(cpu, "pinned to core"),
            Err(e) => tracing::warn!(cpu, error = %e, "failed to pin to core"),
        }
    }

    tracing::info!(
        measurements = experiment.scenarios.len() * experiment.sizes.len() * algorithms.len(),
        repeats = experiment.repeats,
        "starting experiment"
    );

    let rows = run_experiment(&experiment, &algorithms);

    // The table goes out before any file I/O, so a failed write still
    // leaves the printed results intact.
    print!("{}", format_results_table(&rows));

    let csv_path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.csv_path));
    write_csv_report(&csv_path, &rows)
        .with_context(|| format!("could not write CSV to {}", csv_path.display()))?;
    println!("\n✅ CSV guardado como: {}", csv_path.display());

    let json_path = cli
        .json
        .clone()
        .or_else(|| config.output.json_path.as_deref().map(PathBuf::from));
    if let Some(path) = json_path {
        let report = Report {
            meta: build_report_meta(&experiment),
            results: rows,
        };
        write_json_report(&path, &report)
            .with_context(|| format!("could not write JSON report to {}", path.display()))?;
        println!("Report written to: {}", path.display());
    }

    Ok(())
}

/// Capture run metadata for the JSON report.
fn build_report_meta(experiment: &ExperimentConfig) -> ReportMeta {
    ReportMeta {
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        seed: experiment.seed,
        repeats: experiment.repeats,
        sizes: experiment.sizes.clone(),
        scenarios: experiment.scenarios.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = parse(&[
            "sortbench",
            "--sizes",
            "10,20",
            "--scenarios",
            "reversed",
            "--repeats",
            "2",
            "--seed",
            "7",
        ]);
        let config = SortbenchConfig::default();

        let experiment = build_experiment_config(&cli, &config).unwrap();
        assert_eq!(experiment.sizes, vec![10, 20]);
        assert_eq!(experiment.scenarios, vec![Scenario::Reversed]);
        assert_eq!(experiment.repeats, 2);
        assert_eq!(experiment.seed, 7);
    }

    #[test]
    fn test_config_fills_unset_flags() {
        let cli = parse(&["sortbench"]);
        let config = SortbenchConfig::default();

        let experiment = build_experiment_config(&cli, &config).unwrap();
        assert_eq!(experiment.sizes, vec![100, 1000, 5000, 10000]);
        assert_eq!(
            experiment.scenarios,
            vec![Scenario::Random, Scenario::Reversed]
        );
        assert_eq!(experiment.repeats, 5);
        assert_eq!(experiment.seed, 42);
    }

    #[test]
    fn test_unknown_scenario_is_rejected() {
        let cli = parse(&["sortbench", "--scenarios", "bogus"]);
        let config = SortbenchConfig::default();

        let err = build_experiment_config(&cli, &config).unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_zero_repeats_is_rejected() {
        let cli = parse(&["sortbench", "--repeats", "0"]);
        let config = SortbenchConfig::default();

        assert!(build_experiment_config(&cli, &config).is_err());
    }

    #[test]
    fn test_filter_preserves_registry_order() {
        let all = filter_algorithms(None).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "bubble");

        let quick_only = filter_algorithms(Some("quick")).unwrap();
        assert_eq!(quick_only.len(), 1);
        assert_eq!(quick_only[0].id, "quicksort");
    }

    #[test]
    fn test_filter_without_match_fails() {
        let err = filter_algorithms(Some("mergesort")).unwrap_err();
        assert!(err.to_string().contains("bubble"));
    }
}
