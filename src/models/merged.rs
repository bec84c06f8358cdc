use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};
use crate::models::temperature::{parse_date, parse_temperature};

/// Joined temperature/value row as written to the merged CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedRecord {
    #[serde(rename = "dt")]
    pub date: String,
    #[serde(rename = "State")]
    pub region: String,
    #[serde(rename = "Average Temperature")]
    pub average_temperature: String,
    #[serde(rename = "Average Value")]
    pub value: i64,
}

impl MergedRecord {
    pub fn new(date: &str, region: &str, average_temperature: &str, value: i64) -> Self {
        Self {
            date: date.to_string(),
            region: region.to_string(),
            average_temperature: average_temperature.to_string(),
            value,
        }
    }

    /// Key used to drop repeated observations during the join
    pub fn dedup_key(&self) -> (String, String, String) {
        (
            self.date.clone(),
            self.region.clone(),
            self.average_temperature.clone(),
        )
    }
}

/// Merged row with typed columns, ready for plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub date: NaiveDate,
    pub region: String,
    pub temperature: Option<f64>,
    pub value: i64,
}

impl TryFrom<MergedRecord> for ChartRow {
    type Error = PipelineError;

    fn try_from(record: MergedRecord) -> Result<Self> {
        let date = parse_date(&record.date)?;
        let temperature = parse_temperature(&record.average_temperature).map_err(|source| {
            PipelineError::TemperatureParse {
                date: record.date.clone(),
                region: record.region.clone(),
                value: record.average_temperature.clone(),
                source,
            }
        })?;

        Ok(Self {
            date,
            region: record.region,
            temperature,
            value: record.value,
        })
    }
}
