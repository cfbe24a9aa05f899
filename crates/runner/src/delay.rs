use hermes_core::{SimError, SimResult};
use rand::Rng;
use std::time::Duration;

/// Default lower bound between two events
pub const DEFAULT_MIN_DELAY: Duration = Duration::from_millis(150);

/// Default upper bound between two events
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(1200);

/// Inter-event delay, uniform in `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayPolicy {
    min: Duration,
    max: Duration,
}

impl DelayPolicy {
    pub fn new(min: Duration, max: Duration) -> SimResult<Self> {
        if min > max {
            return Err(SimError::InvalidDelay(format!(
                "min {:?} is greater than max {:?}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Always wait exactly `delay`
    pub fn fixed(delay: Duration) -> Self {
        Self {
            min: delay,
            max: delay,
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.min == self.max {
            self.min
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }
}

impl Default for DelayPolicy {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_DELAY,
            max: DEFAULT_MAX_DELAY,
        }
    }
}
