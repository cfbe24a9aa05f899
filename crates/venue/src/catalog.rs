//! Event Catalog - weighted selection of the next event kind
//!
//! Backed by a cumulative-weight table with binary-search sampling
//! (`rand::distributions::WeightedIndex`), so weights may be fractional and
//! a draw is O(log n) regardless of how large the weights are.

use hermes_core::{SimError, SimResult};
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

use crate::generators::EventKind;

/// Relative weight per kind; sums to 100
pub const DEFAULT_WEIGHTS: [(EventKind, f64); 7] = [
    (EventKind::Trade, 35.0),
    (EventKind::Order, 20.0),
    (EventKind::DepositWithdrawal, 15.0),
    (EventKind::Auth, 10.0),
    (EventKind::PriceAlert, 10.0),
    (EventKind::WhaleMove, 5.0),
    (EventKind::System, 5.0),
];

/// Ordered, static set of event kinds with their weights
#[derive(Debug, Clone)]
pub struct EventCatalog {
    kinds: Vec<(EventKind, f64)>,
    index: WeightedIndex<f64>,
}

impl EventCatalog {
    /// Build a catalog from `(kind, weight)` pairs
    ///
    /// Every weight must be finite and strictly positive, and each kind may
    /// appear at most once.
    pub fn new(weights: impl IntoIterator<Item = (EventKind, f64)>) -> SimResult<Self> {
        let kinds: Vec<(EventKind, f64)> = weights.into_iter().collect();

        if kinds.is_empty() {
            return Err(SimError::InvalidWeights("catalog is empty".to_string()));
        }

        for (i, (kind, weight)) in kinds.iter().enumerate() {
            if !weight.is_finite() || *weight <= 0.0 {
                return Err(SimError::InvalidWeights(format!(
                    "{} has weight {}",
                    kind, weight
                )));
            }
            if kinds[..i].iter().any(|(k, _)| k == kind) {
                return Err(SimError::InvalidWeights(format!("{} listed twice", kind)));
            }
        }

        let index = WeightedIndex::new(kinds.iter().map(|(_, w)| *w))
            .map_err(|e| SimError::InvalidWeights(e.to_string()))?;

        Ok(Self { kinds, index })
    }

    /// Draw one kind; kind k is chosen with probability weight(k) / Σ weights
    pub fn next<R: Rng + ?Sized>(&self, rng: &mut R) -> EventKind {
        self.kinds[self.index.sample(rng)].0
    }

    pub fn weight(&self, kind: EventKind) -> Option<f64> {
        self.kinds.iter().find(|(k, _)| *k == kind).map(|(_, w)| *w)
    }

    pub fn total_weight(&self) -> f64 {
        self.kinds.iter().map(|(_, w)| w).sum()
    }

    /// Long-run frequency of a kind (0.0 if it is not in the catalog)
    pub fn probability(&self, kind: EventKind) -> f64 {
        self.weight(kind)
            .map(|w| w / self.total_weight())
            .unwrap_or(0.0)
    }

    pub fn kinds(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.kinds.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHTS).expect("default weights are positive and distinct")
    }
}
