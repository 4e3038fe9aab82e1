use indicatif::{ProgressBar, ProgressStyle};

use crate::mes::error::{MesError, MesResult};
use crate::run_data::field::FieldSource;
use crate::run_data::selector::DirectionSelector;

/// One run's contribution to the convergence study. Both values are
/// strictly positive by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceSample {
    pub spacing: f64,
    pub error: f64,
}

impl ConvergenceSample {
    pub fn new(spacing: f64, error: f64) -> Option<Self> {
        if spacing > 0.0 && error > 0.0 && spacing.is_finite() && error.is_finite() {
            Some(ConvergenceSample { spacing, error })
        } else {
            None
        }
    }
}

pub type ConvergenceDataset = Vec<ConvergenceSample>;

fn reduce_field<S: FieldSource>(
    source: &S,
    name: &str,
    what: &'static str,
    abs: bool,
) -> MesResult<f64> {
    let field = source.read_field(name)?;
    if field.is_empty() {
        return Err(MesError::EmptyField {
            field: name.to_string(),
            path: source.run_path().to_path_buf(),
        });
    }
    let reduced = if abs { field.amax() } else { field.max() };
    if !(reduced > 0.0) || !reduced.is_finite() {
        return Err(MesError::NonPositive {
            what,
            value: reduced,
            path: source.run_path().to_path_buf(),
        });
    }
    Ok(reduced)
}

/// Reduce each run to a (spacing, error) sample:
/// error is max|error field|, spacing the max over the flagged
/// directions of the max spacing field. Any read failure aborts the
/// whole collection.
pub fn collect_samples<S: FieldSource>(
    sources: &[S],
    error_field: &str,
    selector: &DirectionSelector,
) -> MesResult<ConvergenceDataset> {
    selector.validate()?;
    if sources.is_empty() {
        return Err(MesError::NoRuns);
    }

    let pb = ProgressBar::new(sources.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}",
            )
            .unwrap()
            .progress_chars("█░"),
    );

    let mut dataset = Vec::with_capacity(sources.len());
    for source in sources {
        pb.set_message(source.run_path().display().to_string());

        let error = reduce_field(source, error_field, "error field", true)?;
        let mut spacing = f64::NEG_INFINITY;
        for name in selector.field_names() {
            let dir_max = reduce_field(source, name, "grid spacing", false)?;
            spacing = spacing.max(dir_max);
        }

        // Both reductions were checked positive and finite above.
        dataset.push(ConvergenceSample { spacing, error });
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run_data::field::CsvRunDir;
    use crate::run_data::synthetic::write_run_dir;

    #[test]
    fn sample_construction_rejects_non_positive() {
        assert!(ConvergenceSample::new(0.1, 1e-3).is_some());
        assert!(ConvergenceSample::new(0.0, 1e-3).is_none());
        assert!(ConvergenceSample::new(0.1, -1e-3).is_none());
        assert!(ConvergenceSample::new(f64::NAN, 1e-3).is_none());
    }

    #[test]
    fn collects_one_sample_per_run() {
        let root = tempfile::tempdir().unwrap();
        let mut sources = Vec::new();
        for (i, h) in [0.2, 0.1, 0.05].iter().enumerate() {
            let dir = root.path().join(format!("run_{}", i));
            write_run_dir(&dir, "e_phi", *h, 2.0, 1.0, 16).unwrap();
            sources.push(CsvRunDir::new(dir));
        }

        let dataset = collect_samples(&sources, "e_phi", &DirectionSelector::xyz()).unwrap();
        assert_eq!(dataset.len(), 3);
        for (sample, h) in dataset.iter().zip([0.2, 0.1, 0.05]) {
            assert!(sample.spacing > 0.0 && sample.error > 0.0);
            assert!((sample.spacing - h).abs() < 1e-14);
            assert!((sample.error - h * h).abs() < 1e-14);
        }
    }

    #[test]
    fn missing_run_aborts_collection() {
        let root = tempfile::tempdir().unwrap();
        let good = root.path().join("run_0");
        write_run_dir(&good, "e_phi", 0.1, 2.0, 1.0, 8).unwrap();
        let sources = vec![
            CsvRunDir::new(good),
            CsvRunDir::new(root.path().join("does_not_exist")),
        ];

        assert!(collect_samples(&sources, "e_phi", &DirectionSelector::x()).is_err());
    }

    #[test]
    fn no_runs_is_an_error() {
        let sources: Vec<CsvRunDir> = Vec::new();
        assert!(matches!(
            collect_samples(&sources, "e_phi", &DirectionSelector::x()),
            Err(MesError::NoRuns)
        ));
    }
}
