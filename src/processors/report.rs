use crate::processors::{FilterStats, MergeStats};
use std::path::PathBuf;

/// Counters gathered across one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    pub filter: FilterStats,
    pub temporal_dates: usize,
    pub temporal_observations: usize,
    pub value_dates: usize,
    pub value_regions: usize,
    pub merge: MergeStats,
    pub merged_rows: usize,
    pub chart_points: usize,
    pub chart_path: Option<PathBuf>,
}

impl PipelineReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Pipeline Report ===\n");
        summary.push_str(&format!("Temperature Rows Read: {}\n", self.filter.rows_read));
        summary.push_str(&format!(
            "Rows Kept: {} ({:.1}%)\n",
            self.filter.rows_kept,
            percentage(self.filter.rows_kept, self.filter.rows_read)
        ));
        summary.push_str(&format!(
            "Dropped (other country): {}\n",
            self.filter.dropped_by_country
        ));
        summary.push_str(&format!("Dropped (before cutoff): {}\n", self.filter.dropped_by_date));

        summary.push_str(&format!(
            "\nTemporal Index: {} dates, {} observations\n",
            self.temporal_dates, self.temporal_observations
        ));
        summary.push_str(&format!(
            "Value Index: {} dates, {} regions\n",
            self.value_dates, self.value_regions
        ));

        summary.push_str(&format!(
            "\nDates Joined: {}\nDates Without Values: {}\n",
            self.merge.dates_joined, self.merge.dates_skipped
        ));
        summary.push_str(&format!(
            "Duplicate Observations Dropped: {}\n",
            self.merge.duplicates_dropped
        ));
        summary.push_str(&format!(
            "Zero-Value Fallbacks: {}\n",
            self.merge.zero_value_fallbacks
        ));
        summary.push_str(&format!("Merged Rows Written: {}\n", self.merged_rows));

        summary.push_str(&format!("\nChart Points: {}\n", self.chart_points));
        if let Some(ref path) = self.chart_path {
            summary.push_str(&format!("Chart: {}\n", path.display()));
        }

        summary
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * part as f64 / total as f64
    }
}
