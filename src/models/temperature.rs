use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::num::ParseFloatError;

use crate::error::{PipelineError, Result};
use crate::utils::constants::DATE_FORMAT;

/// One row of the global land temperature source.
///
/// Columns beyond these four are ignored; a missing one fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRecord {
    #[serde(rename = "dt")]
    pub date: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "State")]
    pub region: String,
    /// Source text, empty when the reading is missing
    #[serde(rename = "AverageTemperature")]
    pub average_temperature: String,
}

impl TemperatureRecord {
    pub fn new(date: &str, country: &str, region: &str, average_temperature: &str) -> Self {
        Self {
            date: date.to_string(),
            country: country.to_string(),
            region: region.to_string(),
            average_temperature: average_temperature.to_string(),
        }
    }

    pub fn parse_date(&self) -> Result<NaiveDate> {
        parse_date(&self.date)
    }

    /// Project onto the reduced three-column layout, copying text verbatim
    pub fn to_reduced(&self) -> ReducedTemperatureRow {
        ReducedTemperatureRow {
            date: self.date.clone(),
            region: self.region.clone(),
            average_temperature: self.average_temperature.clone(),
        }
    }
}

/// Filtered temperature row as stored in the intermediate CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReducedTemperatureRow {
    #[serde(rename = "dt")]
    pub date: String,
    #[serde(rename = "State")]
    pub region: String,
    #[serde(rename = "Average Temperature")]
    pub average_temperature: String,
}

impl ReducedTemperatureRow {
    pub fn new(date: &str, region: &str, average_temperature: &str) -> Self {
        Self {
            date: date.to_string(),
            region: region.to_string(),
            average_temperature: average_temperature.to_string(),
        }
    }
}

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| PipelineError::DateParse {
        value: value.to_string(),
        source,
    })
}

/// Numeric view of a temperature cell; blank cells are missing readings.
pub fn parse_temperature(value: &str) -> std::result::Result<Option<f64>, ParseFloatError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<f64>().map(Some)
}
