extern crate nalgebra as na;

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::mes::error::{MesError, MesResult};

/// Seam between the pipeline and one run's stored output.
pub trait FieldSource {
    fn read_field(&self, name: &str) -> MesResult<na::DVector<f64>>;

    /// Location of the run's output, used to derive the results root.
    fn run_path(&self) -> &Path;
}

/// Run directory holding one headerless CSV file per field,
/// `<dir>/<field>.csv`. Every numeric column of every record is
/// flattened, so 1d dumps and row-per-slice 2d dumps read the same way.
pub struct CsvRunDir {
    path: PathBuf,
}

impl CsvRunDir {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        CsvRunDir { path: path.into() }
    }
}

impl FieldSource for CsvRunDir {
    fn read_field(&self, name: &str) -> MesResult<na::DVector<f64>> {
        let file = self.path.join(format!("{}.csv", name));
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&file)?;

        let mut values: Vec<f64> = Vec::new();
        for record in rdr.records() {
            let record = record?;
            for entry in record.iter() {
                let entry = entry.trim();
                if entry.is_empty() {
                    continue;
                }
                let v: f64 = entry.parse().map_err(|_| MesError::BadValue {
                    path: file.clone(),
                    message: format!("'{}' is not a number", entry),
                })?;
                values.push(v);
            }
        }

        if values.is_empty() {
            return Err(MesError::EmptyField {
                field: name.to_string(),
                path: self.path.clone(),
            });
        }
        Ok(na::DVector::from_vec(values))
    }

    fn run_path(&self) -> &Path {
        &self.path
    }
}
