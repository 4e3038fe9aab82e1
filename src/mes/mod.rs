pub mod collect;
pub mod error;
pub mod order;
pub mod plot;
pub mod report;
pub mod session;

use std::path::Path;

use crate::run_data::field::{CsvRunDir, FieldSource};
use crate::run_data::selector::DirectionSelector;

use self::collect::{collect_samples, ConvergenceDataset};
use self::error::MesResult;
use self::order::{estimate_orders, last_order, sort_descending};
use self::plot::plot_convergence;
use self::report::write_report;
use self::session::{results_dir, PlotConfig, PlotSession};

/// Full MES pipeline: collect → sort → estimate orders → report → plot.
/// The plot is skipped when the dataset holds a single sample, since no
/// order estimate exists to overlay.
pub fn run_mes<S: FieldSource>(
    sources: &[S],
    error_field: &str,
    selector: &DirectionSelector,
    config: &PlotConfig,
    session: &PlotSession,
) -> MesResult<(ConvergenceDataset, Vec<f64>)> {
    selector.validate()?;

    let mut dataset = collect_samples(sources, error_field, selector)?;
    sort_descending(&mut dataset);
    let orders = estimate_orders(&dataset);

    let out_dir = results_dir(sources[0].run_path(), selector, config, session);
    write_report(&dataset, &orders, &out_dir)?;

    if let Some(order) = last_order(&orders) {
        plot_convergence(&dataset, order, selector, config, &out_dir)?;
    }

    Ok((dataset, orders))
}

/// Convenience wrapper for run directories on disk, with a fresh plot
/// session per call.
pub fn run_mes_dirs<P: AsRef<Path>>(
    paths: &[P],
    error_field: &str,
    selector: &DirectionSelector,
    config: &PlotConfig,
) -> MesResult<(ConvergenceDataset, Vec<f64>)> {
    let sources: Vec<CsvRunDir> = paths
        .iter()
        .map(|p| CsvRunDir::new(p.as_ref()))
        .collect();
    let session = PlotSession::new();
    run_mes(&sources, error_field, selector, config, &session)
}
