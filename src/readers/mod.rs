pub mod merged_reader;
pub mod temperature_reader;
pub mod value_reader;

pub use merged_reader::MergedReader;
pub use temperature_reader::{TemperatureIterator, TemperatureReader};
pub use value_reader::ValueReader;

use crate::error::{PipelineError, Result};

/// Fail with the first name in `required` that `headers` lacks
pub(crate) fn ensure_columns(headers: &csv::StringRecord, required: &[&str]) -> Result<()> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(PipelineError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}
