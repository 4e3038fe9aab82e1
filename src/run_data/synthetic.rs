use std::fs;
use std::path::Path;

use csv::Writer;

use crate::mes::error::MesResult;

/// Write a synthetic run directory with uniform spacing fields and a
/// manufactured error field whose maximum is exactly `c * h^order`.
/// Used by the demo driver and the test suite; real runs come from the
/// simulation code itself.
pub fn write_run_dir(
    dir: &Path,
    error_field: &str,
    h: f64,
    order: f64,
    c: f64,
    n_cells: usize,
) -> MesResult<()> {
    fs::create_dir_all(dir)?;

    for name in ["dx", "dy", "dz"] {
        let mut wtr = Writer::from_path(dir.join(format!("{}.csv", name)))?;
        for _ in 0..n_cells {
            wtr.write_record([format!("{:e}", h)])?;
        }
        wtr.flush()?;
    }

    // Error profile peaking at the interior so the max-abs reduction is
    // exercised on a non-constant field.
    let peak = c * h.powf(order);
    let mut wtr = Writer::from_path(dir.join(format!("{}.csv", error_field)))?;
    for i in 0..n_cells {
        let x = (i as f64 + 0.5) / n_cells as f64;
        let profile = (std::f64::consts::PI * x).sin();
        // Alternate sign, the collector reduces with |.|
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        let v = if i == n_cells / 2 {
            peak
        } else {
            sign * peak * 0.5 * profile
        };
        wtr.write_record([format!("{:e}", v)])?;
    }
    wtr.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run_data::field::{CsvRunDir, FieldSource};

    #[test]
    fn peak_error_matches_manufactured_order() {
        let dir = tempfile::tempdir().unwrap();
        write_run_dir(dir.path(), "e_phi", 0.1, 2.0, 1.0, 17).unwrap();

        let run = CsvRunDir::new(dir.path());
        let err = run.read_field("e_phi").unwrap();
        let dx = run.read_field("dx").unwrap();

        assert_eq!(dx.len(), 17);
        assert!((err.amax() - 0.01).abs() < 1e-14);
        assert!((dx.max() - 0.1).abs() < 1e-14);
    }
}
