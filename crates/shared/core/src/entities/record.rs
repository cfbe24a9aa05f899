use serde::{Deserialize, Serialize};

use super::Severity;
use crate::values::Timestamp;

/// Default job label identifying the simulated venue
pub const DEFAULT_JOB: &str = "crypto-exchange";

/// Fixed label set attached to every record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    pub job: String,
}

impl Labels {
    pub fn new(job: impl Into<String>) -> Self {
        Self { job: job.into() }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::new(DEFAULT_JOB)
    }
}

/// A fully rendered log line, ready for delivery
///
/// Built once per tick and consumed exactly once by a sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub message: String,
    pub severity: Severity,
    pub timestamp: Timestamp,
    pub labels: Labels,
}

impl EventRecord {
    pub fn new(
        message: impl Into<String>,
        severity: Severity,
        timestamp: Timestamp,
        labels: Labels,
    ) -> Self {
        Self {
            message: message.into(),
            severity,
            timestamp,
            labels,
        }
    }

    /// Emission time in nanoseconds since the Unix epoch
    pub fn timestamp_nanos(&self) -> i64 {
        self.timestamp.timestamp_nanos_opt().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_timestamp_nanos() {
        let ts = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        let record = EventRecord::new("hello", Severity::Info, ts, Labels::default());

        assert_eq!(record.timestamp_nanos(), 1_700_000_000_123_456_789);
        assert_eq!(record.labels.job, "crypto-exchange");
    }
}
