use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("field '{field}' in {path:?} is empty")]
    EmptyField { field: String, path: PathBuf },

    #[error("{what} reduced to non-positive value {value} for run {path:?}")]
    NonPositive {
        what: &'static str,
        value: f64,
        path: PathBuf,
    },

    #[error("no spatial direction selected")]
    NoDirection,

    #[error("no run directories given")]
    NoRuns,

    #[error("bad value in {path:?}: {message}")]
    BadValue { path: PathBuf, message: String },

    #[error("plot rendering failed: {0}")]
    Plot(String),
}

pub type MesResult<T> = Result<T, MesError>;
