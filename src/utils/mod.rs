pub mod constants;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use filename::{chart_filename, default_chart_path};
pub use progress::ProgressReporter;
