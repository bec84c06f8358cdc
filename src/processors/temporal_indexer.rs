use crate::error::Result;
use crate::models::{ReducedTemperatureRow, TemperatureObservation, TemporalIndex};
use crate::readers::TemperatureReader;
use std::path::Path;

/// Groups filtered temperature rows by their exact date string.
pub struct TemporalIndexer;

impl TemporalIndexer {
    pub fn new() -> Self {
        Self
    }

    pub fn build<I>(&self, rows: I) -> TemporalIndex
    where
        I: IntoIterator<Item = ReducedTemperatureRow>,
    {
        let mut index = TemporalIndex::new();
        for row in rows {
            index.insert(
                &row.date,
                TemperatureObservation {
                    region: row.region,
                    average_temperature: row.average_temperature,
                },
            );
        }
        index
    }

    /// Re-read the filtered file and index it
    pub fn index_file(&self, path: &Path) -> Result<TemporalIndex> {
        let rows = TemperatureReader::new().read_filtered(path)?;
        Ok(self.build(rows))
    }
}

impl Default for TemporalIndexer {
    fn default() -> Self {
        Self::new()
    }
}
