use std::path::{Path, PathBuf};

use chrono::Local;

use crate::run_data::selector::DirectionSelector;

/// Shared per-analysis state for plot output. Created once and passed
/// to each plot-producing call so every artifact of one analysis lands
/// in the same timestamped folder.
#[derive(Debug, Clone)]
pub struct PlotSession {
    pub stamp: String,
}

impl PlotSession {
    pub fn new() -> Self {
        PlotSession {
            stamp: Local::now().format("%Y%m%d_%H%M%S").to_string(),
        }
    }
}

impl Default for PlotSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Where result files go, relative to the first run's storage root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavePathStrategy {
    /// `<root>/MES_results/<combo>`
    Flat,
    /// `<root>/MES_results/<stamp>/<combo>`
    Timestamped,
}

#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub extension: String,
    pub show: bool,
    pub strategy: SavePathStrategy,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            extension: "png".to_string(),
            show: false,
            strategy: SavePathStrategy::Flat,
        }
    }
}

/// Results directory for one analysis, derived from the storage root
/// the first run directory lives in. Run directories of one study sit
/// side by side under that root.
pub fn results_dir(
    first_run: &Path,
    selector: &DirectionSelector,
    config: &PlotConfig,
    session: &PlotSession,
) -> PathBuf {
    let root = match first_run.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => Path::new("."),
    };

    let mut dir = root.join("MES_results");
    if config.strategy == SavePathStrategy::Timestamped {
        dir.push(&session.stamp);
    }
    dir.push(selector.combo_label());
    dir
}
