use std::fs;
use std::path::{Path, PathBuf};

use csv::Writer;
use serde::Serialize;

use crate::mes::collect::ConvergenceDataset;
use crate::mes::error::MesResult;

#[derive(Serialize)]
struct RowData {
    spacing: f64,
    error: f64,
    order: f64,
}

const COL_WIDTH: usize = 20;

/// Fixed-width table, one `#`-prefixed header plus one row per sample.
/// Undefined orders render as NaN.
pub fn render_table(dataset: &ConvergenceDataset, orders: &[f64]) -> Vec<String> {
    let mut lines = Vec::with_capacity(dataset.len() + 1);
    lines.push(format!(
        "#{:<w$}{:<w$}{:<w$}",
        "spacing",
        "error",
        "order",
        w = COL_WIDTH
    ));
    for (sample, order) in dataset.iter().zip(orders) {
        lines.push(format!(
            " {:<w$.10e}{:<w$.10e}{:<w$.10e}",
            sample.spacing,
            sample.error,
            order,
            w = COL_WIDTH
        ));
    }
    lines
}

/// Print the table to stdout and persist it as `MES.txt` in the
/// results directory, with a machine-readable `MES.csv` next to it.
/// Any filesystem failure is fatal to the call.
pub fn write_report(
    dataset: &ConvergenceDataset,
    orders: &[f64],
    out_dir: &Path,
) -> MesResult<PathBuf> {
    fs::create_dir_all(out_dir)?;

    let table = render_table(dataset, orders);
    for line in &table {
        println!("{}", line);
    }

    let txt_path = out_dir.join("MES.txt");
    fs::write(&txt_path, table.join("\n") + "\n")?;

    let mut wtr = Writer::from_path(out_dir.join("MES.csv"))?;
    for (sample, order) in dataset.iter().zip(orders) {
        wtr.serialize(RowData {
            spacing: sample.spacing,
            error: sample.error,
            order: *order,
        })?;
    }
    wtr.flush()?;

    Ok(txt_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mes::collect::ConvergenceSample;
    use crate::mes::order::estimate_orders;

    fn second_order_dataset() -> ConvergenceDataset {
        vec![
            ConvergenceSample {
                spacing: 0.2,
                error: 4.0,
            },
            ConvergenceSample {
                spacing: 0.1,
                error: 1.0,
            },
            ConvergenceSample {
                spacing: 0.05,
                error: 0.25,
            },
        ]
    }

    #[test]
    fn table_has_header_plus_one_row_per_sample() {
        let data = second_order_dataset();
        let orders = estimate_orders(&data);
        let table = render_table(&data, &orders);

        assert_eq!(table.len(), 4);
        assert!(table[0].starts_with('#'));
        for row in &table[1..] {
            assert_eq!(row.split_whitespace().count(), 3);
        }
        // Rows past the first hold three scientific-notation numbers.
        for row in &table[2..] {
            let sci = row.split_whitespace().filter(|t| t.contains('e')).count();
            assert_eq!(sci, 3, "row '{}' should hold three numbers", row);
        }
    }

    #[test]
    fn undefined_order_renders_as_nan() {
        let data = second_order_dataset();
        let orders = estimate_orders(&data);
        let table = render_table(&data, &orders);
        assert!(table[1].contains("NaN"));
        assert!(!table[2].contains("NaN"));
    }

    #[test]
    fn report_files_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("MES_results").join("dx");
        let data = second_order_dataset();
        let orders = estimate_orders(&data);

        let txt = write_report(&data, &orders, &out).unwrap();
        assert!(txt.ends_with("MES.txt"));

        let content = fs::read_to_string(&txt).unwrap();
        assert_eq!(content.lines().count(), 4);
        let csv = fs::read_to_string(out.join("MES.csv")).unwrap();
        assert!(csv.contains("spacing,error,order"));
    }
}
