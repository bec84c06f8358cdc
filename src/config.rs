//! File locations and run switches for a pipeline run.
//!
//! File names are fixed; only the directory they live in can change. The
//! target country and cutoff date are constants in [`crate::utils::constants`].

use crate::utils::constants::{
    FILTERED_TEMPERATURE_FILE, MERGED_OUTPUT_FILE, TEMPERATURE_SOURCE_FILE, VALUE_SOURCE_FILE,
};
use crate::utils::filename::default_chart_path;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub temperature_source: PathBuf,
    pub value_source: PathBuf,
    pub filtered_output: PathBuf,
    pub merged_output: PathBuf,
    pub chart_output: PathBuf,
    /// Open the interactive viewer after writing the chart
    pub open_viewer: bool,
    /// Suppress progress spinners
    pub silent: bool,
}

impl PipelineConfig {
    /// Resolve every fixed file name inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            temperature_source: dir.join(TEMPERATURE_SOURCE_FILE),
            value_source: dir.join(VALUE_SOURCE_FILE),
            filtered_output: dir.join(FILTERED_TEMPERATURE_FILE),
            merged_output: dir.join(MERGED_OUTPUT_FILE),
            chart_output: default_chart_path(dir),
            open_viewer: true,
            silent: false,
        }
    }

    pub fn with_open_viewer(mut self, open_viewer: bool) -> Self {
        self.open_viewer = open_viewer;
        self
    }

    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::in_dir(Path::new("."))
    }
}
