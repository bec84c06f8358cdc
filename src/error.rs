use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Date parsing error for '{value}': {source}")]
    DateParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid value '{value}' in column '{column}' for date {date}: {source}")]
    ValueParse {
        date: String,
        column: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid temperature '{value}' for {region} on {date}: {source}")]
    TemperatureParse {
        date: String,
        region: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}
