//! Hermes Sink
//!
//! Adapters implementing the [`Sink`] port:
//!
//! - [`LokiSink`]: HTTP POST to a Grafana Loki push endpoint, 204 = delivered
//! - [`ConsoleSink`]: one line per record on stdout (or any writer)
//!
//! ```text
//!   Scheduler ──▶ EventRecord ──▶ Sink::emit ──▶ Loki / stdout
//! ```

pub mod console;
pub mod error;
pub mod loki;
pub mod payload;

// Re-export commonly used types
pub use console::ConsoleSink;
pub use error::SinkError;
pub use loki::{DEFAULT_LOKI_URL, DEFAULT_TIMEOUT, LokiSink};
pub use payload::{PushRequest, PushStream, StreamLabels};

pub use hermes_ports::{DeliveryError, Sink};
