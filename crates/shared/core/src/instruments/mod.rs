//! Tracked instruments and their seed prices

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::values::{Price, Symbol};

/// Seed prices for the fixed instrument set
///
/// Relative magnitudes are realistic, absolute values are illustrative.
pub const DEFAULT_SEEDS: [(&str, Decimal); 11] = [
    ("BTC", dec!(67432.18)),
    ("ETH", dec!(3521.44)),
    ("SOL", dec!(172.63)),
    ("XRP", dec!(0.62)),
    ("DOGE", dec!(0.15)),
    ("ADA", dec!(0.58)),
    ("AVAX", dec!(38.90)),
    ("DOT", dec!(7.84)),
    ("BNB", dec!(587.30)),
    ("MATIC", dec!(0.91)),
    ("LINK", dec!(18.42)),
];

/// Instruments large enough to appear in whale transfers
pub const WHALE_SYMBOLS: [&str; 3] = ["BTC", "ETH", "BNB"];

/// A tradable asset with its current mid price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: Symbol,
    pub price: Price,
}

impl Instrument {
    pub fn new(symbol: impl Into<Symbol>, price: Price) -> Self {
        Self {
            symbol: symbol.into(),
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_seeds_are_unique_and_positive() {
        let symbols: HashSet<_> = DEFAULT_SEEDS.iter().map(|(s, _)| *s).collect();
        assert_eq!(symbols.len(), DEFAULT_SEEDS.len());
        assert!(DEFAULT_SEEDS.iter().all(|(_, p)| *p > Decimal::ZERO));
    }

    #[test]
    fn test_whale_symbols_are_seeded() {
        for whale in WHALE_SYMBOLS {
            assert!(DEFAULT_SEEDS.iter().any(|(s, _)| *s == whale));
        }
    }

    #[test]
    fn test_relative_magnitudes() {
        let price = |sym: &str| DEFAULT_SEEDS.iter().find(|(s, _)| *s == sym).unwrap().1;
        assert!(price("BTC") > price("ETH"));
        assert!(price("ETH") > price("XRP") * dec!(1000));
    }
}
