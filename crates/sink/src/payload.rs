//! Loki push API body
//!
//! ```json
//! {"streams":[{"stream":{"job":"crypto-exchange","level":"INFO"},"values":[["<ts-nanos>","<message>"]]}]}
//! ```
//!
//! Field order is fixed by the struct definitions, so the serialized body is
//! byte-for-byte reproducible for a given record.

use hermes_core::EventRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamLabels {
    pub job: String,
    pub level: String,
}

/// One labelled stream with `[timestamp-nanos, line]` pairs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushStream {
    pub stream: StreamLabels,
    pub values: Vec<[String; 2]>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushRequest {
    pub streams: Vec<PushStream>,
}

impl PushRequest {
    /// Single-stream, single-line body for one record
    pub fn from_record(record: &EventRecord) -> Self {
        Self {
            streams: vec![PushStream {
                stream: StreamLabels {
                    job: record.labels.job.clone(),
                    level: record.severity.as_str().to_string(),
                },
                values: vec![[record.timestamp_nanos().to_string(), record.message.clone()]],
            }],
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
