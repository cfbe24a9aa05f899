//! Hermes Ports
//!
//! Port definitions (traits) for the Hermes telemetry simulator.
//! These define the boundaries between the simulation core and infrastructure:
//! where time comes from, how the loop waits, and where records go.

mod clock;
mod error;
mod sink;

pub use clock::{Clock, Sleeper};
pub use error::{DeliveryError, DeliveryResult};
pub use sink::{DeliveryReporter, Sink};
