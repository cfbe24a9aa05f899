//! Hermes Clock Infrastructure
//!
//! Provides time abstractions for the scheduler loop:
//!
//! - [`SystemClock`] + [`TokioSleeper`]: wall-clock time and real waits, used in production
//! - [`ManualClock`]: frozen time that only moves when slept on or advanced,
//!   so tests can run a fixed number of ticks without waiting
//!
//! ## Usage
//!
//! ```ignore
//! use hermes_clock::{ManualClock, Sleeper, Clock};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new(None);
//! let before = clock.now();
//! clock.sleep(Duration::from_millis(500)).await; // returns immediately
//! assert_eq!(clock.now() - before, chrono::Duration::milliseconds(500));
//! ```

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::{SystemClock, TokioSleeper};

// Re-export the ports for convenience
pub use hermes_ports::{Clock, Sleeper};
