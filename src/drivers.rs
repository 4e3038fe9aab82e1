use std::error::Error;

use crate::mes::run_mes_dirs;
use crate::mes::session::{PlotConfig, SavePathStrategy};
use crate::run_data::selector::DirectionSelector;
use crate::run_data::synthetic::write_run_dir;

/// Convergence study over existing run directories, x and z spacings
/// combined.
pub fn mes_xz() -> Result<(), Box<dyn Error>> {
    let paths = [
        "runs/mes_nx32",
        "runs/mes_nx64",
        "runs/mes_nx128",
        "runs/mes_nx256",
    ];
    let error_field = "e_phi";

    let selector = DirectionSelector {
        use_dx: true,
        use_dy: false,
        use_dz: true,
    };
    let config = PlotConfig::default();

    run_mes_dirs(&paths, error_field, &selector, &config)?;
    Ok(())
}

/// Self-contained demo: generates synthetic second-order runs under
/// `demo_runs/` and pushes them through the full pipeline.
pub fn mes_demo() -> Result<(), Box<dyn Error>> {
    let error_field = "e_phi";
    let order = 2.0;
    let c = 0.5;
    let n_cells = 64;

    let spacings = [0.2, 0.1, 0.05, 0.025];
    let mut paths = Vec::new();
    for (i, h) in spacings.iter().enumerate() {
        let dir = format!("demo_runs/mes_level_{}", i);
        write_run_dir(dir.as_ref(), error_field, *h, order, c, n_cells)?;
        paths.push(dir);
    }

    let selector = DirectionSelector::xyz();
    let config = PlotConfig {
        extension: "png".to_string(),
        show: false,
        strategy: SavePathStrategy::Timestamped,
    };

    run_mes_dirs(&paths, error_field, &selector, &config)?;
    Ok(())
}
