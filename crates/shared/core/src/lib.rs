//! Hermes Core Domain
//!
//! Pure domain types for the Hermes venue telemetry simulator.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod instruments;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Actor, ActorPool, DEFAULT_ACTORS, DEFAULT_JOB, EventRecord, Labels, Severity};
pub use error::{SimError, SimResult};
pub use instruments::{DEFAULT_SEEDS, Instrument, WHALE_SYMBOLS};
pub use values::{Price, Quantity, Symbol, Timestamp};
