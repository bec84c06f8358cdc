/// Input file names
pub const TEMPERATURE_SOURCE_FILE: &str = "GlobalLandTemperaturesByState.csv";
pub const VALUE_SOURCE_FILE: &str = "ZHVI.csv";

/// Intermediate and output file names
pub const FILTERED_TEMPERATURE_FILE: &str = "US_state_temps.csv";
pub const MERGED_OUTPUT_FILE: &str = "merged_output.csv";

/// Temperature filter criteria
pub const TARGET_COUNTRY: &str = "United States";
/// Earliest retained date as (year, month, day), aligned to the ZHVI start
pub const CUTOFF_DATE: (i32, u32, u32) = (1999, 12, 31);
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column headers
pub const COL_DATE: &str = "dt";
pub const COL_STATE: &str = "State";
pub const COL_AVG_TEMPERATURE: &str = "Average Temperature";
pub const COL_AVG_VALUE: &str = "Average Value";

pub const FILTERED_HEADERS: [&str; 3] = [COL_DATE, COL_STATE, COL_AVG_TEMPERATURE];
pub const MERGED_HEADERS: [&str; 4] = [COL_DATE, COL_STATE, COL_AVG_TEMPERATURE, COL_AVG_VALUE];

/// Value used when a region has no entry for a date
pub const MISSING_VALUE: i64 = 0;

/// Chart layout
pub const CHART_TITLE: &str = "Average US Home Prices and Surface Temperatures Over Time";
pub const CHART_TITLE_FONT_SIZE: usize = 28;
pub const CHART_ASPECT_RATIO: (f64, f64, f64) = (2.0, 1.0, 1.0);
pub const CHART_MARKER_OPACITY: f64 = 0.7;
pub const CHART_FILE_EXTENSION: &str = "html";
