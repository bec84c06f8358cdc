use crate::models::{MergedRecord, TemporalIndex, ValueIndex};
use crate::utils::constants::MISSING_VALUE;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub dates_joined: usize,
    pub dates_skipped: usize,
    pub duplicates_dropped: usize,
    pub zero_value_fallbacks: usize,
}

/// Inner-joins temperature observations with regional values on date.
pub struct DataMerger;

impl DataMerger {
    pub fn new() -> Self {
        Self
    }

    /// Join the indexes in temporal index order.
    ///
    /// Dates without values are skipped entirely. A region with no value on a
    /// joined date gets zero. Repeats of (date, region, temperature) after the
    /// first are dropped, whatever their value.
    pub fn merge(&self, temps: &TemporalIndex, values: &ValueIndex) -> (Vec<MergedRecord>, MergeStats) {
        let mut merged = Vec::new();
        let mut stats = MergeStats::default();
        let mut seen: HashSet<(String, String, String)> = HashSet::new();

        for (date, observations) in temps.iter() {
            if !values.contains_date(date) {
                debug!("No values for {}, skipping {} observations", date, observations.len());
                stats.dates_skipped += 1;
                continue;
            }
            stats.dates_joined += 1;

            for observation in observations {
                let found = values.value_for(date, &observation.region);
                let record = MergedRecord::new(
                    date,
                    &observation.region,
                    &observation.average_temperature,
                    found.unwrap_or(MISSING_VALUE),
                );
                if !seen.insert(record.dedup_key()) {
                    stats.duplicates_dropped += 1;
                    continue;
                }
                if found.is_none() {
                    stats.zero_value_fallbacks += 1;
                }
                merged.push(record);
            }
        }

        (merged, stats)
    }
}

impl Default for DataMerger {
    fn default() -> Self {
        Self::new()
    }
}
