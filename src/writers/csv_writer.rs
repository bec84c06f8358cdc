use crate::error::Result;
use crate::models::{MergedRecord, ReducedTemperatureRow};
use crate::utils::constants::{FILTERED_HEADERS, MERGED_HEADERS};
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Writes pipeline tables as CSV, replacing any existing file.
///
/// The header row is always written, so an empty table still yields a valid
/// file for the next stage.
pub struct CsvWriter;

impl CsvWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_filtered(&self, rows: &[ReducedTemperatureRow], path: &Path) -> Result<usize> {
        self.write_rows(rows, &FILTERED_HEADERS, path)
    }

    pub fn write_merged(&self, records: &[MergedRecord], path: &Path) -> Result<usize> {
        self.write_rows(records, &MERGED_HEADERS, path)
    }

    fn write_rows<T: Serialize>(&self, rows: &[T], headers: &[&str], path: &Path) -> Result<usize> {
        let file = File::create(path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        writer.write_record(headers)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        debug!("Wrote {} rows to {}", rows.len(), path.display());
        Ok(rows.len())
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}
