use async_trait::async_trait;
use hermes_core::EventRecord;
use hermes_ports::{DeliveryError, DeliveryResult, Sink};
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::error::{SinkError, delivery_error};
use crate::payload::PushRequest;

/// Default Loki push endpoint
pub const DEFAULT_LOKI_URL: &str = "http://localhost:3100/loki/api/v1/push";

/// Per-request timeout so a hung backend cannot stall the scheduler forever
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Pushes each record to a Loki endpoint as its own stream entry
///
/// Only `204 No Content` counts as delivered.
#[derive(Clone)]
pub struct LokiSink {
    client: Client,
    endpoint: String,
}

impl LokiSink {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SinkError> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SinkError> {
        let endpoint = endpoint.into();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(SinkError::InvalidEndpoint(endpoint));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Sink for LokiSink {
    async fn emit(&self, record: &EventRecord) -> DeliveryResult<()> {
        let body = PushRequest::from_record(record);

        log::trace!("POST {} ({})", self.endpoint, record.severity);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(delivery_error)?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(()),
            status => Err(DeliveryError::Status(status.as_u16())),
        }
    }

    fn name(&self) -> &str {
        "LokiSink"
    }
}
