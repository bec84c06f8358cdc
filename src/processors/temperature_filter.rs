use crate::error::Result;
use crate::models::{ReducedTemperatureRow, TemperatureRecord};
use crate::utils::constants::{CUTOFF_DATE, TARGET_COUNTRY};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub rows_read: usize,
    pub rows_kept: usize,
    pub dropped_by_country: usize,
    pub dropped_by_date: usize,
}

/// Keeps records for the target country dated on or after the cutoff.
pub struct TemperatureFilter {
    country: &'static str,
    cutoff: NaiveDate,
}

impl TemperatureFilter {
    pub fn new() -> Self {
        let (year, month, day) = CUTOFF_DATE;
        Self {
            country: TARGET_COUNTRY,
            cutoff: NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN),
        }
    }

    pub fn country(&self) -> &str {
        self.country
    }

    pub fn cutoff(&self) -> NaiveDate {
        self.cutoff
    }

    /// Whether a record belongs in the reduced table.
    ///
    /// The date is only parsed for target-country rows, so a malformed date in
    /// another country's data does not abort the run.
    pub fn retains(&self, record: &TemperatureRecord) -> Result<bool> {
        if record.country != self.country {
            return Ok(false);
        }
        Ok(record.parse_date()? >= self.cutoff)
    }

    /// Filter records in input order, stopping at the first read or parse error
    pub fn apply<I>(&self, records: I) -> Result<(Vec<ReducedTemperatureRow>, FilterStats)>
    where
        I: IntoIterator<Item = Result<TemperatureRecord>>,
    {
        let mut rows = Vec::new();
        let mut stats = FilterStats::default();

        for record in records {
            let record = record?;
            stats.rows_read += 1;

            if record.country != self.country {
                stats.dropped_by_country += 1;
            } else if self.retains(&record)? {
                rows.push(record.to_reduced());
                stats.rows_kept += 1;
            } else {
                stats.dropped_by_date += 1;
            }
        }

        Ok((rows, stats))
    }
}

impl Default for TemperatureFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use pretty_assertions::assert_eq;

    fn record(date: &str, country: &str, region: &str, temp: &str) -> Result<TemperatureRecord> {
        Ok(TemperatureRecord::new(date, country, region, temp))
    }

    #[test]
    fn test_excludes_every_other_country() {
        let filter = TemperatureFilter::new();
        let records = vec![
            record("2005-01-01", "Brazil", "Acre", "25.0"),
            record("2005-01-01", "Canada", "Ontario", "-8.0"),
            record("2005-01-01", "united states", "Texas", "9.0"),
            record("2005-01-01", "United States ", "Texas", "9.0"),
        ];

        let (rows, stats) = filter.apply(records).unwrap();
        assert!(rows.is_empty());
        assert_eq!(stats.dropped_by_country, 4);
    }

    #[test]
    fn test_cutoff_boundary_is_inclusive() {
        let filter = TemperatureFilter::new();
        let records = vec![
            record("1999-12-30", "United States", "Texas", "7.0"),
            record("1999-12-31", "United States", "Texas", "7.5"),
            record("2000-01-01", "United States", "Texas", "8.0"),
            record("1850-01-01", "United States", "Texas", "3.0"),
        ];

        let (rows, stats) = filter.apply(records).unwrap();
        assert_eq!(
            rows,
            vec![
                ReducedTemperatureRow::new("1999-12-31", "Texas", "7.5"),
                ReducedTemperatureRow::new("2000-01-01", "Texas", "8.0"),
            ]
        );
        assert_eq!(
            stats,
            FilterStats {
                rows_read: 4,
                rows_kept: 2,
                dropped_by_country: 0,
                dropped_by_date: 2,
            }
        );
    }

    #[test]
    fn test_preserves_input_order_and_empty_temperatures() {
        let filter = TemperatureFilter::new();
        let records = vec![
            record("2001-03-01", "United States", "Wyoming", "1.0"),
            record("2001-01-01", "United States", "Alabama", ""),
            record("2000-06-01", "United States", "Maine", "15.2"),
        ];

        let (rows, _) = filter.apply(records).unwrap();
        let regions: Vec<&str> = rows.iter().map(|r| r.region.as_str()).collect();
        assert_eq!(regions, vec!["Wyoming", "Alabama", "Maine"]);
        assert_eq!(rows[1].average_temperature, "");
    }

    #[test]
    fn test_malformed_target_date_fails() {
        let filter = TemperatureFilter::new();
        let records = vec![
            record("2001-01-01", "United States", "Ohio", "1.0"),
            record("01/02/2001", "United States", "Ohio", "1.0"),
        ];

        assert!(matches!(
            filter.apply(records),
            Err(PipelineError::DateParse { .. })
        ));
    }

    #[test]
    fn test_malformed_date_outside_target_country_is_ignored() {
        let filter = TemperatureFilter::new();
        let records = vec![record("not-a-date", "Brazil", "Acre", "25.0")];

        let (rows, stats) = filter.apply(records).unwrap();
        assert!(rows.is_empty());
        assert_eq!(stats.dropped_by_country, 1);
    }

    #[test]
    fn test_read_errors_propagate() {
        let filter = TemperatureFilter::new();
        let records = vec![
            record("2001-01-01", "United States", "Ohio", "1.0"),
            Err(PipelineError::MissingColumn("Country".to_string())),
        ];

        assert!(filter.apply(records).is_err());
    }
}
