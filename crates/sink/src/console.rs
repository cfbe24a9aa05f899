use async_trait::async_trait;
use chrono::SecondsFormat;
use hermes_core::EventRecord;
use hermes_ports::{DeliveryError, DeliveryResult, Sink};
use parking_lot::Mutex;
use std::io::{self, Write};

/// Writes one line per record: `<rfc3339> <LEVEL> [<job>] <message>`
pub struct ConsoleSink<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    /// Text written for a record, without the trailing newline
    pub fn format_line(record: &EventRecord) -> String {
        format!(
            "{} {:<5} [{}] {}",
            record
                .timestamp
                .to_rfc3339_opts(SecondsFormat::Nanos, true),
            record.severity.as_str(),
            record.labels.job,
            record.message
        )
    }
}

#[async_trait]
impl<W: Write + Send> Sink for ConsoleSink<W> {
    async fn emit(&self, record: &EventRecord) -> DeliveryResult<()> {
        let line = Self::format_line(record);
        let mut out = self.out.lock();
        writeln!(out, "{}", line)
            .and_then(|_| out.flush())
            .map_err(|e| DeliveryError::Io(e.to_string()))
    }

    fn name(&self) -> &str {
        "ConsoleSink"
    }
}
