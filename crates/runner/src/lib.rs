//! Hermes Runner - Venue telemetry scheduler
//!
//! Drives the simulated venue and ships every event to a sink:
//!
//! - **Bootstrap**: builds the sink and scheduler from configuration
//! - **Config**: JSON file or environment driven settings
//! - **Delay**: inter-event delay distribution
//! - **Reporter**: local diagnostics for every delivery outcome
//! - **Scheduler**: the main loop
//!
//! ## Architecture
//!
//! ```text
//!        ┌──────────────────────────── Scheduler ────────────────────────────┐
//!        │                                                                    │
//!        │  PriceModel.advance ─▶ EventCatalog.next ─▶ EventKind.generate     │
//!        │                                                  │                 │
//!        │                                      EventMessage ─▶ EventRecord   │
//!        │                                                  │                 │
//!        └──────────────────────────────────────────────────┼─────────────────┘
//!                                                           ▼
//!                                   ┌────────────┐   ┌────────────┐
//!                                   │    Sink    │──▶│  Reporter  │ ──▶ sleep ──▶ next tick
//!                                   │ Loki/stdout│   │  (log)     │
//!                                   └────────────┘   └────────────┘
//! ```

pub mod bootstrap;
pub mod config;
pub mod delay;
pub mod error;
pub mod reporter;
pub mod scheduler;

// Re-export main types
pub use bootstrap::{build_scheduler, build_sink};
pub use config::{ConfigError, HermesConfig, ScheduleConfig, SinkConfig, SinkKind};
pub use delay::DelayPolicy;
pub use error::RunnerError;
pub use reporter::LogReporter;
pub use scheduler::{Scheduler, SchedulerConfig, SchedulerStats, TickOutcome};
