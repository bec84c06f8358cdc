use crate::utils::constants::{CHART_FILE_EXTENSION, CHART_TITLE};
use std::path::{Path, PathBuf};

/// Chart artifact name derived from a chart title, e.g. `My Title.html`
pub fn chart_filename(title: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", title.trim(), CHART_FILE_EXTENSION))
}

/// Default chart artifact path inside `dir`
pub fn default_chart_path(dir: &Path) -> PathBuf {
    dir.join(chart_filename(CHART_TITLE))
}
