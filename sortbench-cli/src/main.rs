//! SortBench binary entry point.

fn main() -> anyhow::Result<()> {
    sortbench_cli::run()
}
