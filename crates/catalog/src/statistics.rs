//! Aggregated price statistics, computed and supplied externally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pricewatch_core::ValueObject;

/// Which statistics series of a record a delivery targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsWindow {
    Weekly,
    Monthly,
    Global,
}

/// One aggregated metric window (min/max/average over a period).
///
/// All amounts are in smallest currency unit; the average is rounded by the
/// external statistics computation before it reaches this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsEntry {
    /// Start of the aggregation period.
    pub period_start: DateTime<Utc>,
    pub min_minor: i64,
    pub max_minor: i64,
    pub average_minor: i64,
}

impl StatisticsEntry {
    pub fn new(period_start: DateTime<Utc>, min_minor: i64, max_minor: i64, average_minor: i64) -> Self {
        Self {
            period_start,
            min_minor,
            max_minor,
            average_minor,
        }
    }
}

impl ValueObject for StatisticsEntry {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_compare_by_value() {
        let at = Utc::now();
        let a = StatisticsEntry::new(at, 100, 300, 175);
        let b = StatisticsEntry::new(at, 100, 300, 175);
        assert_eq!(a, b);
        assert_ne!(a, StatisticsEntry::new(at, 100, 300, 176));
    }

    #[test]
    fn window_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&StatsWindow::Weekly).unwrap(), "\"weekly\"");
        assert_eq!(serde_json::to_string(&StatsWindow::Global).unwrap(), "\"global\"");
    }
}
