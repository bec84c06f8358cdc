use crate::error::Result;
use crate::models::{ReducedTemperatureRow, TemperatureRecord};
use crate::readers::ensure_columns;
use crate::utils::constants::FILTERED_HEADERS;
use std::fs::File;
use std::path::Path;
use tracing::debug;

const SOURCE_COLUMNS: [&str; 4] = ["dt", "Country", "State", "AverageTemperature"];

pub struct TemperatureReader;

impl TemperatureReader {
    pub fn new() -> Self {
        Self
    }

    /// Read every record of the raw temperature source into memory
    pub fn read_records(&self, path: &Path) -> Result<Vec<TemperatureRecord>> {
        self.stream_records(path)?.collect()
    }

    /// Stream raw temperature records in file order
    pub fn stream_records(&self, path: &Path) -> Result<TemperatureIterator> {
        TemperatureIterator::new(path)
    }

    /// Read the reduced three-column file written by the filter stage
    pub fn read_filtered(&self, path: &Path) -> Result<Vec<ReducedTemperatureRow>> {
        let mut reader = csv::Reader::from_reader(File::open(path)?);
        ensure_columns(reader.headers()?, &FILTERED_HEADERS)?;

        let mut rows = Vec::new();
        for result in reader.deserialize() {
            let row: ReducedTemperatureRow = result?;
            rows.push(row);
        }

        debug!("Read {} filtered rows from {}", rows.len(), path.display());
        Ok(rows)
    }
}

impl Default for TemperatureReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator for streaming raw temperature records
pub struct TemperatureIterator {
    records: csv::DeserializeRecordsIntoIter<File, TemperatureRecord>,
}

impl TemperatureIterator {
    fn new(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(File::open(path)?);
        ensure_columns(reader.headers()?, &SOURCE_COLUMNS)?;

        Ok(Self {
            records: reader.into_deserialize(),
        })
    }
}

impl Iterator for TemperatureIterator {
    type Item = Result<TemperatureRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(|r| r.map_err(Into::into))
    }
}
