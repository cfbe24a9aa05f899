//! Bootstrap - wiring from configuration to a runnable scheduler
//!
//! Validates the configuration, builds the configured sink and hands the
//! venue catalog, delay policy and seed to a [`Scheduler`].

use hermes_ports::Sink;
use hermes_sink::{ConsoleSink, LokiSink};
use std::sync::Arc;

use crate::config::{HermesConfig, SinkKind};
use crate::error::Result;
use crate::scheduler::{Scheduler, SchedulerConfig};

/// Build the sink selected by `config.sink.kind`
pub fn build_sink(config: &HermesConfig) -> Result<Arc<dyn Sink>> {
    let sink: Arc<dyn Sink> = match config.sink.kind {
        SinkKind::Loki => {
            log::info!("Pushing to Loki at {}", config.sink.endpoint);
            Arc::new(LokiSink::with_timeout(
                config.sink.endpoint.clone(),
                config.sink.timeout(),
            )?)
        }
        SinkKind::Console => {
            log::info!("Writing records to stdout");
            Arc::new(ConsoleSink::stdout())
        }
    };
    Ok(sink)
}

/// Validate `config` and build a scheduler delivering to `sink`
pub fn build_scheduler(config: &HermesConfig, sink: Arc<dyn Sink>) -> Result<Scheduler> {
    config.validate()?;

    let scheduler_config = SchedulerConfig {
        delay: config.delay_policy()?,
        labels: config.sink.labels(),
        max_ticks: config.schedule.max_ticks,
    };

    let scheduler = Scheduler::new(sink, scheduler_config).with_catalog(config.catalog()?);

    Ok(match config.schedule.seed {
        Some(seed) => {
            log::info!("Using fixed seed {}", seed);
            scheduler.with_seed(seed)
        }
        None => scheduler,
    })
}
