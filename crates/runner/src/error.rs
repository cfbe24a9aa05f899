use hermes_core::SimError;
use hermes_sink::SinkError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Simulation error: {0}")]
    Sim(#[from] SimError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
