//! Scheduler - the telemetry main loop
//!
//! Each tick runs to completion before the next begins:
//!
//! 1. advance prices
//! 2. draw an event kind and generate its message
//! 3. render an [`EventRecord`] stamped by the clock
//! 4. deliver it to the sink and report the outcome
//! 5. sleep for a sampled delay
//!
//! Delivery failures are reported and the record is dropped. Generator
//! errors are invariant violations and propagate to the caller.

use hermes_clock::{SystemClock, TokioSleeper};
use hermes_core::{ActorPool, EventRecord, Labels, Severity, SimResult};
use hermes_ports::{Clock, DeliveryReporter, Sink, Sleeper};
use hermes_venue::{EventCatalog, EventKind, EventMessage, PriceModel};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use crate::delay::DelayPolicy;
use crate::reporter::LogReporter;

/// Scheduler configuration
#[derive(Debug, Clone, Default)]
pub struct SchedulerConfig {
    /// Inter-event delay distribution
    pub delay: DelayPolicy,
    /// Labels attached to every record
    pub labels: Labels,
    /// Stop `run` after this many ticks
    pub max_ticks: Option<u64>,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub kind: EventKind,
    pub severity: Severity,
    pub delivered: bool,
    pub delay: Duration,
}

/// Counters accumulated over a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchedulerStats {
    pub ticks: u64,
    pub delivered: u64,
    pub failed: u64,
    pub by_kind: BTreeMap<EventKind, u64>,
    pub by_severity: BTreeMap<Severity, u64>,
}

impl SchedulerStats {
    fn record(&mut self, outcome: &TickOutcome) {
        self.ticks += 1;
        *self.by_kind.entry(outcome.kind).or_default() += 1;
        *self.by_severity.entry(outcome.severity).or_default() += 1;
    }

    fn record_delivery(&mut self, delivered: bool) {
        if delivered {
            self.delivered += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Drives the venue model and ships one record per tick
pub struct Scheduler {
    prices: PriceModel,
    catalog: EventCatalog,
    actors: ActorPool,
    sink: Arc<dyn Sink>,
    clock: Arc<dyn Clock>,
    sleeper: Arc<dyn Sleeper>,
    reporter: Arc<dyn DeliveryReporter>,
    rng: StdRng,
    config: SchedulerConfig,
    stats: SchedulerStats,
}

impl Scheduler {
    /// Create a scheduler with default venue state, wall-clock time and log reporting
    pub fn new(sink: Arc<dyn Sink>, config: SchedulerConfig) -> Self {
        Self {
            prices: PriceModel::default(),
            catalog: EventCatalog::default(),
            actors: ActorPool::default(),
            sink,
            clock: Arc::new(SystemClock::new()),
            sleeper: Arc::new(TokioSleeper),
            reporter: Arc::new(LogReporter),
            rng: StdRng::from_entropy(),
            config,
            stats: SchedulerStats::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn DeliveryReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn with_catalog(mut self, catalog: EventCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_prices(mut self, prices: PriceModel) -> Self {
        self.prices = prices;
        self
    }

    pub fn with_actors(mut self, actors: ActorPool) -> Self {
        self.actors = actors;
        self
    }

    /// Emit the startup record; no delay follows it
    pub async fn start(&mut self) -> bool {
        log::info!(
            "Starting scheduler: sink={}, clock={}, kinds={}, delay={:?}..={:?}",
            self.sink.name(),
            self.clock.name(),
            self.catalog.len(),
            self.config.delay.min(),
            self.config.delay.max()
        );

        let record = self.render(&EventMessage::Startup);
        let delivered = self.deliver(&record).await;
        self.stats.record_delivery(delivered);
        delivered
    }

    /// Run one generate, deliver, report, sleep cycle
    pub async fn tick(&mut self) -> SimResult<TickOutcome> {
        self.prices.advance(&mut self.rng);

        let kind = self.catalog.next(&mut self.rng);
        let message = kind.generate(&self.prices, &self.actors, &mut self.rng)?;
        let record = self.render(&message);

        log::debug!("tick {}: {} {}", self.stats.ticks + 1, kind, record.severity);

        let delivered = self.deliver(&record).await;
        let delay = self.config.delay.sample(&mut self.rng);

        let outcome = TickOutcome {
            kind,
            severity: record.severity,
            delivered,
            delay,
        };
        self.stats.record(&outcome);
        self.stats.record_delivery(delivered);

        self.sleeper.sleep(delay).await;
        Ok(outcome)
    }

    /// Start, then tick until `max_ticks` (forever when unset)
    pub async fn run(mut self) -> SimResult<SchedulerStats> {
        self.start().await;

        loop {
            if self.config.max_ticks.is_some_and(|max| self.stats.ticks >= max) {
                break;
            }
            self.tick().await?;
        }

        log::info!(
            "Scheduler finished: {} ticks, {} delivered, {} failed",
            self.stats.ticks,
            self.stats.delivered,
            self.stats.failed
        );
        Ok(self.stats)
    }

    pub fn stats(&self) -> &SchedulerStats {
        &self.stats
    }

    pub fn prices(&self) -> &PriceModel {
        &self.prices
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    fn render(&self, message: &EventMessage) -> EventRecord {
        EventRecord::new(
            message.to_string(),
            message.severity(),
            self.clock.now(),
            self.config.labels.clone(),
        )
    }

    async fn deliver(&self, record: &EventRecord) -> bool {
        match self.sink.emit(record).await {
            Ok(()) => {
                self.reporter.delivered(record);
                true
            }
            Err(e) => {
                self.reporter.failed(record, &e);
                false
            }
        }
    }
}
