//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Formats the date part for report headers, e.g. `15 January 2024`.
    pub fn report_date(&self) -> String {
        self.0.format("%-d %B %Y").to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed() -> Timestamp {
        serde_json::from_str("\"2024-01-15T10:30:00Z\"").unwrap()
    }

    #[test]
    fn later_timestamps_order_after_earlier_ones() {
        let earlier = fixed();
        let now = Timestamp::now();
        assert!(earlier < now);
    }

    #[test]
    fn report_date_is_human_readable() {
        assert_eq!(fixed().report_date(), "15 January 2024");
    }

    #[test]
    fn timestamp_roundtrips_through_json() {
        let json = serde_json::to_string(&fixed()).unwrap();
        assert!(json.contains("2024-01-15T10:30:00"));

        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fixed());
    }
}
