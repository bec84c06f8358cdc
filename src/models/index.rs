use std::collections::HashMap;

/// A single (region, temperature) reading filed under a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperatureObservation {
    pub region: String,
    pub average_temperature: String,
}

impl TemperatureObservation {
    pub fn new(region: &str, average_temperature: &str) -> Self {
        Self {
            region: region.to_string(),
            average_temperature: average_temperature.to_string(),
        }
    }
}

/// Date-keyed temperature observations.
///
/// Dates iterate in the order they were first inserted; observations inside a
/// date keep insertion order and may repeat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemporalIndex {
    dates: Vec<String>,
    buckets: HashMap<String, Vec<TemperatureObservation>>,
}

impl TemporalIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: &str, observation: TemperatureObservation) {
        match self.buckets.get_mut(date) {
            Some(bucket) => bucket.push(observation),
            None => {
                self.dates.push(date.to_string());
                self.buckets.insert(date.to_string(), vec![observation]);
            }
        }
    }

    pub fn get(&self, date: &str) -> Option<&[TemperatureObservation]> {
        self.buckets.get(date).map(Vec::as_slice)
    }

    /// Dates in first-encounter order
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[TemperatureObservation])> + '_ {
        self.dates.iter().map(move |date| {
            let bucket = self.buckets.get(date).map(Vec::as_slice).unwrap_or(&[]);
            (date.as_str(), bucket)
        })
    }

    /// Number of distinct dates
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn observation_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Region → value mapping for one date.
pub type RegionValues = HashMap<String, i64>;

/// Date-keyed regional values from the wide-format source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueIndex {
    regions: Vec<String>,
    values: HashMap<String, RegionValues>,
}

impl ValueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_regions(regions: Vec<String>) -> Self {
        Self {
            regions,
            values: HashMap::new(),
        }
    }

    /// Store the mapping for `date`, returning the one it replaced
    pub fn insert(&mut self, date: &str, values: RegionValues) -> Option<RegionValues> {
        self.values.insert(date.to_string(), values)
    }

    pub fn get(&self, date: &str) -> Option<&RegionValues> {
        self.values.get(date)
    }

    pub fn contains_date(&self, date: &str) -> bool {
        self.values.contains_key(date)
    }

    pub fn value_for(&self, date: &str, region: &str) -> Option<i64> {
        self.get(date).and_then(|v| v.get(region)).copied()
    }

    /// Region column headers in source order
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temporal_index_preserves_order_and_duplicates() {
        let mut index = TemporalIndex::new();
        index.insert("2000-02-29", TemperatureObservation::new("Texas", "12.0"));
        index.insert("2000-01-31", TemperatureObservation::new("Ohio", "1.0"));
        index.insert("2000-02-29", TemperatureObservation::new("Texas", "12.0"));
        index.insert("2000-02-29", TemperatureObservation::new("Maine", "-4.2"));

        assert_eq!(index.dates(), &["2000-02-29", "2000-01-31"]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.observation_count(), 4);

        let regions: Vec<&str> = index
            .get("2000-02-29")
            .unwrap()
            .iter()
            .map(|o| o.region.as_str())
            .collect();
        assert_eq!(regions, vec!["Texas", "Texas", "Maine"]);

        let iterated: Vec<&str> = index.iter().map(|(date, _)| date).collect();
        assert_eq!(iterated, vec!["2000-02-29", "2000-01-31"]);
    }

    #[test]
    fn test_value_index_lookup_and_overwrite() {
        let mut index = ValueIndex::with_regions(vec!["Texas".to_string()]);
        let first: RegionValues = [("Texas".to_string(), 100)].into_iter().collect();
        let second: RegionValues = [("Texas".to_string(), 200)].into_iter().collect();

        assert!(index.insert("2000-01-31", first).is_none());
        assert!(index.insert("2000-01-31", second).is_some());

        assert_eq!(index.len(), 1);
        assert_eq!(index.value_for("2000-01-31", "Texas"), Some(200));
        assert_eq!(index.value_for("2000-01-31", "Ohio"), None);
        assert!(!index.contains_date("2000-02-29"));
        assert_eq!(index.regions(), &["Texas"]);
    }
}
