use thiserror::Error;

/// A sink could not accept a record
///
/// Recovered locally by the caller: the record is dropped, never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Unexpected status code: {0}")]
    Status(u16),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Timeout waiting for sink")]
    Timeout,

    #[error("IO error: {0}")]
    Io(String),
}

pub type DeliveryResult<T> = std::result::Result<T, DeliveryError>;
