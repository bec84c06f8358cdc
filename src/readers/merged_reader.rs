use crate::error::Result;
use crate::models::{ChartRow, MergedRecord};
use crate::readers::ensure_columns;
use crate::utils::constants::MERGED_HEADERS;
use std::fs::File;
use std::path::Path;

/// Loads the merged CSV back as typed chart rows.
pub struct MergedReader;

impl MergedReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_merged(&self, path: &Path) -> Result<Vec<MergedRecord>> {
        let mut reader = csv::Reader::from_reader(File::open(path)?);
        ensure_columns(reader.headers()?, &MERGED_HEADERS)?;

        let mut records = Vec::new();
        for result in reader.deserialize() {
            let record: MergedRecord = result?;
            records.push(record);
        }
        Ok(records)
    }

    /// Rows stably sorted by region name, file order kept within a region
    pub fn read_chart_rows(&self, path: &Path) -> Result<Vec<ChartRow>> {
        let mut rows = self
            .read_merged(path)?
            .into_iter()
            .map(ChartRow::try_from)
            .collect::<Result<Vec<_>>>()?;

        rows.sort_by(|a, b| a.region.cmp(&b.region));
        Ok(rows)
    }
}

impl Default for MergedReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_chart_rows_sorted_by_region() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "dt,State,Average Temperature,Average Value")?;
        writeln!(temp_file, "2000-01-31,Texas,15.0,200000")?;
        writeln!(temp_file, "2000-01-31,California,10.5,0")?;
        writeln!(temp_file, "2000-02-29,Texas,16.0,201000")?;
        writeln!(temp_file, "2000-02-29,Alabama,,150000")?;
        temp_file.flush()?;

        let rows = MergedReader::new().read_chart_rows(temp_file.path())?;

        let regions: Vec<&str> = rows.iter().map(|r| r.region.as_str()).collect();
        assert_eq!(regions, vec!["Alabama", "California", "Texas", "Texas"]);

        // Stable within a region
        assert_eq!(rows[2].date, NaiveDate::from_ymd_opt(2000, 1, 31).unwrap());
        assert_eq!(rows[3].date, NaiveDate::from_ymd_opt(2000, 2, 29).unwrap());
        assert_eq!(rows[0].temperature, None);

        Ok(())
    }

    #[test]
    fn test_region_sort_is_lexicographic() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "dt,State,Average Temperature,Average Value")?;
        writeln!(temp_file, "2000-01-31,texas,1.0,1")?;
        writeln!(temp_file, "2000-01-31,Texas,1.0,1")?;
        writeln!(temp_file, "2000-01-31,10,1.0,1")?;
        writeln!(temp_file, "2000-01-31,9,1.0,1")?;
        temp_file.flush()?;

        let rows = MergedReader::new().read_chart_rows(temp_file.path())?;
        let regions: Vec<&str> = rows.iter().map(|r| r.region.as_str()).collect();
        assert_eq!(regions, vec!["10", "9", "Texas", "texas"]);

        Ok(())
    }
}
