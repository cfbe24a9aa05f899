//! Error types for the sink crate

use hermes_ports::DeliveryError;
use thiserror::Error;

/// Errors raised while building a sink (delivery errors use [`DeliveryError`])
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Map a reqwest failure onto the delivery taxonomy
pub(crate) fn delivery_error(err: reqwest::Error) -> DeliveryError {
    if err.is_timeout() {
        DeliveryError::Timeout
    } else {
        DeliveryError::Transport(err.to_string())
    }
}
