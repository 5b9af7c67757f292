//! Console Table Output

use crate::report::ResultRow;

/// Format result rows as a fixed-width aligned table.
///
/// The dash rule under the header spans exactly the header's width, and
/// both time columns carry six decimal places.
pub fn format_results_table(rows: &[ResultRow]) -> String {
    let mut output = String::new();

    let header = format!(
        "{:<12} {:>8} {:<10} {:>4} {:>14} {:>12}",
        "Escenario", "n", "Algoritmo", "Rep", "Promedio (s)", "DesvStd (s)"
    );
    output.push_str(&header);
    output.push('\n');
    output.push_str(&"-".repeat(header.chars().count()));
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "{:<12} {:>8} {:<10} {:>4} {:>14.6} {:>12.6}\n",
            row.scenario, row.size, row.algorithm, row.repeats, row.mean_s, row.std_dev_s
        ));
    }

    output
}
