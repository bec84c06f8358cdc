use crate::error::{PipelineError, Result};
use crate::models::{RegionValues, ValueIndex};
use crate::utils::constants::MISSING_VALUE;
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

/// Reads the wide-format value source: a date column followed by one
/// integer column per region.
pub struct ValueReader;

impl ValueReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_value_index(&self, path: &Path) -> Result<ValueIndex> {
        let mut reader = csv::Reader::from_reader(File::open(path)?);
        let headers = reader.headers()?.clone();

        if headers.is_empty() {
            return Err(PipelineError::MissingColumn("date".to_string()));
        }
        let regions: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
        debug!("Value source has {} region columns", regions.len());

        let mut index = ValueIndex::with_regions(regions);
        for result in reader.records() {
            let record = result?;
            let date = record.get(0).unwrap_or_default();

            let mut values = RegionValues::with_capacity(index.regions().len());
            for (region, cell) in index.regions().iter().zip(record.iter().skip(1)) {
                let value = parse_value_cell(cell).map_err(|source| PipelineError::ValueParse {
                    date: date.to_string(),
                    column: region.clone(),
                    value: cell.to_string(),
                    source,
                })?;
                values.insert(region.clone(), value);
            }

            if index.insert(date, values).is_some() {
                warn!("Duplicate date {} in value source, keeping the later row", date);
            }
        }

        debug!("Indexed values for {} dates", index.len());
        Ok(index)
    }
}

impl Default for ValueReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert one value cell; only an empty cell counts as zero
pub fn parse_value_cell(cell: &str) -> std::result::Result<i64, std::num::ParseIntError> {
    if cell.is_empty() {
        return Ok(MISSING_VALUE);
    }
    cell.trim().parse::<i64>()
}
