//! Filter pipeline and heat alert scan
//!
//! Pure functions over record slices; the reducer calls them on load and on
//! every search change.

use crate::state::WeatherRecord;

/// Parallel label/value sequences feeding the trend chart
///
/// `labels[i]` and `values[i]` always come from the same record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Project records into city labels and temperature values, keeping order
    pub fn from_records(records: &[WeatherRecord]) -> Self {
        let (labels, values) = records
            .iter()
            .map(|record| (record.city.clone(), record.temperature))
            .unzip();
        Self { labels, values }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// `(index, value)` points for a line chart
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, value)| (i as f64, *value))
            .collect()
    }

    /// Lowest and highest value, `None` when empty
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values.iter().fold(None, |range, &value| match range {
            None => Some((value, value)),
            Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
        })
    }
}

/// Records whose city contains `term`, ignoring case, in their original order
///
/// An empty term keeps every record.
pub fn filter_records(records: &[WeatherRecord], term: &str) -> Vec<WeatherRecord> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| record.city.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// First record (in load order) strictly hotter than `threshold`
pub fn first_above(records: &[WeatherRecord], threshold: f64) -> Option<&WeatherRecord> {
    records.iter().find(|record| record.temperature > threshold)
}

/// Alert text for the first record above `threshold`, if any
pub fn scan_threshold(records: &[WeatherRecord], threshold: f64) -> Option<String> {
    first_above(records, threshold).map(alert_message)
}

/// `"High temperature alert: {city} is {temperature}°C"`
///
/// `f64`'s `Display` prints whole numbers without a fraction (`40`, not `40.0`).
pub fn alert_message(record: &WeatherRecord) -> String {
    format!(
        "High temperature alert: {} is {}°C",
        record.city, record.temperature
    )
}
