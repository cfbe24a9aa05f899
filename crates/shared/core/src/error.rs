use rust_decimal::Decimal;
use thiserror::Error;

/// Invariant violations in the simulated venue
///
/// The instrument and actor pools are fixed at startup, so any of these
/// surfacing at runtime means the simulator was wired incorrectly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("Unknown actor: {0}")]
    UnknownActor(String),

    #[error("Empty {0} pool")]
    EmptyPool(&'static str),

    #[error("Invalid seed price for {symbol}: {price}")]
    InvalidSeedPrice { symbol: String, price: Decimal },

    #[error("Invalid event weights: {0}")]
    InvalidWeights(String),

    #[error("Invalid delay policy: {0}")]
    InvalidDelay(String),
}

pub type SimResult<T> = std::result::Result<T, SimError>;
