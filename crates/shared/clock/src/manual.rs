use async_trait::async_trait;
use chrono::Utc;
use hermes_core::Timestamp;
use hermes_ports::{Clock, Sleeper};
use parking_lot::RwLock;
use std::time::Duration;

/// Fixed clock that only moves when explicitly advanced
///
/// Doubles as a [`Sleeper`]: sleeping advances the clock by the requested
/// duration and returns immediately, so a scheduler driven by this clock
/// runs deterministically without wall-clock waits.
pub struct ManualClock {
    current_time: RwLock<Timestamp>,
    /// Every duration passed to `sleep`, in call order
    sleeps: RwLock<Vec<Duration>>,
}

impl ManualClock {
    /// Create a new manual clock
    ///
    /// # Arguments
    /// * `initial_time` - Optional starting time. If None, uses current wall time.
    pub fn new(initial_time: Option<Timestamp>) -> Self {
        Self {
            current_time: RwLock::new(initial_time.unwrap_or_else(Utc::now)),
            sleeps: RwLock::new(Vec::new()),
        }
    }

    /// Advance the clock by a specified duration
    pub fn advance(&self, duration: Duration) {
        let delta = chrono::Duration::from_std(duration).unwrap_or(chrono::Duration::zero());
        *self.current_time.write() += delta;
    }

    /// Explicitly set the time
    pub fn set_time(&self, time: Timestamp) {
        *self.current_time.write() = time;
    }

    /// Durations requested through `sleep` so far
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.read().clone()
    }

    /// Sum of all requested sleeps
    pub fn total_slept(&self) -> Duration {
        self.sleeps.read().iter().sum()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current_time.read()
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}

#[async_trait]
impl Sleeper for ManualClock {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.write().push(duration);
        self.advance(duration);
    }
}
