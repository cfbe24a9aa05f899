use async_trait::async_trait;
use hermes_core::EventRecord;

use crate::error::{DeliveryError, DeliveryResult};

/// Port for delivering rendered records to a logging backend
///
/// Implementations:
/// - Loki push API over HTTP
/// - Standard output
/// - In-memory recorders for tests
#[async_trait]
pub trait Sink: Send + Sync {
    /// Deliver one record. The record is not retained after this call.
    async fn emit(&self, record: &EventRecord) -> DeliveryResult<()>;

    /// Get the sink's name/identifier for debugging
    fn name(&self) -> &str {
        "Sink"
    }
}

/// Local diagnostic channel for delivery outcomes
///
/// Called exactly once per emitted record.
pub trait DeliveryReporter: Send + Sync {
    fn delivered(&self, record: &EventRecord);

    fn failed(&self, record: &EventRecord, error: &DeliveryError);
}
