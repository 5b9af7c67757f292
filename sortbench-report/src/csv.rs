//! CSV Output

use crate::ReportError;
use crate::report::ResultRow;
use std::io::Write;
use std::path::Path;

/// Serialize result rows to CSV.
///
/// The header row comes straight from the `ResultRow` serde renames:
/// `escenario,n,algoritmo,repeticiones,promedio_s,desv_std_s`.
pub fn generate_csv_report(rows: &[ResultRow]) -> Result<String, ReportError> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    let csv = String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(csv)
}

/// Write the CSV report to `path`, replacing any existing file.
///
/// The file handle lives only inside this function, so it is closed on
/// every exit path, including failures.
pub fn write_csv_report(path: &Path, rows: &[ResultRow]) -> Result<(), ReportError> {
    let csv = generate_csv_report(rows)?;
    let mut file = std::fs::File::create(path)?;
    file.write_all(csv.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::Scenario;

    fn sample_rows() -> Vec<ResultRow> {
        vec![
            ResultRow {
                scenario: Scenario::Random,
                size: 100,
                algorithm: "Burbuja".to_string(),
                repeats: 5,
                mean_s: 0.001,
                std_dev_s: 0.0002,
            },
            ResultRow {
                scenario: Scenario::Reversed,
                size: 1000,
                algorithm: "Quicksort".to_string(),
                repeats: 5,
                mean_s: 0.01,
                std_dev_s: 0.003,
            },
        ]
    }

    #[test]
    fn test_header_is_canonical() {
        let csv = generate_csv_report(&sample_rows()).unwrap();
        assert_eq!(
            csv.lines().next().unwrap(),
            "escenario,n,algoritmo,repeticiones,promedio_s,desv_std_s"
        );
    }

    #[test]
    fn test_one_line_per_row_plus_header() {
        let rows = sample_rows();
        let csv = generate_csv_report(&rows).unwrap();
        assert_eq!(csv.lines().count(), 1 + rows.len());
    }

    #[test]
    fn test_numeric_fields_parse() {
        let csv = generate_csv_report(&sample_rows()).unwrap();
        for line in csv.lines().skip(1) {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), 6);
            assert!(fields[1].parse::<usize>().is_ok());
            assert!(fields[3].parse::<usize>().is_ok());
            assert!(fields[4].parse::<f64>().unwrap() >= 0.0);
            assert!(fields[5].parse::<f64>().unwrap() >= 0.0);
        }
    }

    #[test]
    fn test_scenario_tags_in_rows() {
        let csv = generate_csv_report(&sample_rows()).unwrap();
        let mut lines = csv.lines().skip(1);
        assert!(lines.next().unwrap().starts_with("random,100,Burbuja,"));
        assert!(lines.next().unwrap().starts_with("reversed,1000,Quicksort,"));
    }

    #[test]
    fn test_empty_rows_yield_empty_output() {
        // With no rows serialized, the csv writer never learns the
        // header, so the output is empty rather than header-only.
        let csv = generate_csv_report(&[]).unwrap();
        assert!(csv.is_empty());
    }
}
