//! Configuration loading for the telemetry scheduler
//!
//! A JSON file supplies any subset of the settings below; everything else
//! falls back to defaults. Environment variables override the sink and seed
//! after loading:
//!
//! - `LOKI_URL`: push endpoint
//! - `HERMES_JOB`: `job` label
//! - `HERMES_SEED`: RNG seed (u64)

use hermes_core::{DEFAULT_JOB, Labels, SimResult};
use hermes_sink::{DEFAULT_LOKI_URL, DEFAULT_TIMEOUT};
use hermes_venue::{DEFAULT_WEIGHTS, EventCatalog, EventKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::delay::{DEFAULT_MAX_DELAY, DEFAULT_MIN_DELAY, DelayPolicy};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HermesConfig {
    pub sink: SinkConfig,
    pub schedule: ScheduleConfig,

    /// Per-kind weight overrides; a weight of 0 removes the kind
    pub weights: BTreeMap<EventKind, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Loki,
    Console,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    pub kind: SinkKind,
    pub endpoint: String,
    pub job: String,
    pub timeout_ms: u64,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            kind: SinkKind::Loki,
            endpoint: DEFAULT_LOKI_URL.to_string(),
            job: DEFAULT_JOB.to_string(),
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
        }
    }
}

impl SinkConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn labels(&self) -> Labels {
        Labels::new(self.job.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,

    /// Fixed RNG seed; entropy when absent
    pub seed: Option<u64>,

    /// Stop after this many ticks; run forever when absent
    pub max_ticks: Option<u64>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: DEFAULT_MIN_DELAY.as_millis() as u64,
            max_delay_ms: DEFAULT_MAX_DELAY.as_millis() as u64,
            seed: None,
            max_ticks: None,
        }
    }
}

impl HermesConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply `LOKI_URL`, `HERMES_JOB` and `HERMES_SEED` from the process environment
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("LOKI_URL") {
            self.sink.endpoint = url;
        }
        if let Some(job) = lookup("HERMES_JOB") {
            self.sink.job = job;
        }
        if let Some(seed) = lookup("HERMES_SEED") {
            let seed = seed
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::Invalid(format!("HERMES_SEED {:?}: {}", seed, e)))?;
            self.schedule.seed = Some(seed);
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schedule.min_delay_ms > self.schedule.max_delay_ms {
            return Err(ConfigError::Invalid(format!(
                "min_delay_ms ({}) exceeds max_delay_ms ({})",
                self.schedule.min_delay_ms, self.schedule.max_delay_ms
            )));
        }

        if self.sink.kind == SinkKind::Loki && self.sink.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("sink endpoint is empty".to_string()));
        }

        if self.sink.kind == SinkKind::Loki && self.sink.timeout_ms == 0 {
            return Err(ConfigError::Invalid("sink timeout_ms must be positive".to_string()));
        }

        if self.sink.job.trim().is_empty() {
            return Err(ConfigError::Invalid("job label is empty".to_string()));
        }

        for (kind, weight) in &self.weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "weight for {} must be a non-negative number, got {}",
                    kind, weight
                )));
            }
        }

        if self.effective_weights().is_empty() {
            return Err(ConfigError::Invalid(
                "every event kind is disabled".to_string(),
            ));
        }

        Ok(())
    }

    /// Default weights with overrides applied, in catalog order
    pub fn effective_weights(&self) -> Vec<(EventKind, f64)> {
        DEFAULT_WEIGHTS
            .iter()
            .map(|(kind, weight)| (*kind, self.weights.get(kind).copied().unwrap_or(*weight)))
            .filter(|(_, weight)| *weight != 0.0)
            .collect()
    }

    pub fn catalog(&self) -> SimResult<EventCatalog> {
        EventCatalog::new(self.effective_weights())
    }

    pub fn delay_policy(&self) -> SimResult<DelayPolicy> {
        DelayPolicy::new(
            Duration::from_millis(self.schedule.min_delay_ms),
            Duration::from_millis(self.schedule.max_delay_ms),
        )
    }
}
