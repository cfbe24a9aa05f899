use hermes_core::EventRecord;
use hermes_ports::{DeliveryError, DeliveryReporter};

/// Reports delivery outcomes through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl DeliveryReporter for LogReporter {
    fn delivered(&self, record: &EventRecord) {
        log::info!("✓ delivered: {}", record.message);
    }

    fn failed(&self, record: &EventRecord, error: &DeliveryError) {
        log::warn!("✗ delivery failed: {}", error);
        log::debug!("dropped {} record: {}", record.severity, record.message);
    }
}
