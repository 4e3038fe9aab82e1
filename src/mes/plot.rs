use std::path::{Path, PathBuf};
use std::process::Command;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::mes::collect::ConvergenceDataset;
use crate::mes::error::{MesError, MesResult};
use crate::mes::session::PlotConfig;
use crate::run_data::selector::DirectionSelector;
use crate::task::spawn_detached;

/// Reference error at spacing `h` for the fitted `order`, anchored so
/// the line passes exactly through the finest data point.
pub fn reference_error(h: f64, h_fine: f64, e_fine: f64, order: f64) -> f64 {
    e_fine * (h / h_fine).powf(order)
}

fn draw_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    dataset: &ConvergenceDataset,
    order: f64,
    selector: &DirectionSelector,
) -> Result<(), String>
where
    DB: DrawingBackend,
{
    // Dataset is sorted descending: first sample coarsest, last finest.
    let coarse = dataset[0];
    let fine = dataset[dataset.len() - 1];

    let e_min = dataset.iter().map(|s| s.error).fold(f64::INFINITY, f64::min);
    let e_max = dataset
        .iter()
        .map(|s| s.error)
        .fold(f64::NEG_INFINITY, f64::max);

    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let mut chart = ChartBuilder::on(root)
        .margin(30)
        .caption("MES convergence", ("sans-serif", 22))
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (fine.spacing * 0.8..coarse.spacing * 1.25).log_scale(),
            (e_min * 0.5..e_max * 2.0).log_scale(),
        )
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc(selector.axis_label())
        .y_desc("max |error|")
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| e.to_string())?;

    let points: Vec<(f64, f64)> = dataset.iter().map(|s| (s.spacing, s.error)).collect();

    chart
        .draw_series(LineSeries::new(points.iter().copied(), &BLUE))
        .map_err(|e| e.to_string())?
        .label(format!("measured, order ≈ {:.2}", order))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(
            points
                .iter()
                .map(|&(h, e)| Circle::new((h, e), 4, BLUE.filled())),
        )
        .map_err(|e| e.to_string())?;

    let reference: Vec<(f64, f64)> = points
        .iter()
        .map(|&(h, _)| (h, reference_error(h, fine.spacing, fine.error, order)))
        .collect();

    chart
        .draw_series(plotters::series::DashedLineSeries::new(
            reference.into_iter(),
            8,
            6,
            RED.stroke_width(1),
        ))
        .map_err(|e| e.to_string())?
        .label(format!("h^{:.2} reference", order))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())?;
    Ok(())
}

fn draw_svg(
    path: &Path,
    dataset: &ConvergenceDataset,
    order: f64,
    selector: &DirectionSelector,
) -> Result<(), String> {
    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    draw_chart(&root, dataset, order, selector)
}

/// Render the log-log convergence plot to `<out_dir>/MES.<extension>`.
/// A failing bitmap render is retried once with the SVG backend so a
/// headless environment still gets a plot file.
pub fn plot_convergence(
    dataset: &ConvergenceDataset,
    order: f64,
    selector: &DirectionSelector,
    config: &PlotConfig,
    out_dir: &Path,
) -> MesResult<PathBuf> {
    let path = out_dir.join(format!("MES.{}", config.extension));

    let path = if config.extension == "svg" {
        draw_svg(&path, dataset, order, selector).map_err(MesError::Plot)?;
        path
    } else {
        let bitmap = {
            let root = BitMapBackend::new(&path, (800, 600)).into_drawing_area();
            draw_chart(&root, dataset, order, selector)
        };
        match bitmap {
            Ok(()) => path,
            Err(msg) => {
                println!("bitmap backend failed ({}), falling back to svg", msg);
                let fallback = out_dir.join("MES.svg");
                draw_svg(&fallback, dataset, order, selector).map_err(MesError::Plot)?;
                fallback
            }
        }
    };

    println!("saved convergence plot to {}", path.display());

    if config.show {
        let path = path.clone();
        spawn_detached("mes-plot-viewer", move || {
            let _ = Command::new("xdg-open").arg(&path).status();
        });
    }

    Ok(path)
}
