//! Price Model - mid prices for the tracked instruments
//!
//! Each tick every price takes a small multiplicative random step. Generators
//! only read from the model: the true mid via [`PriceModel::current_price`] or
//! a slightly stale quote via [`PriceModel::jittered_price`].

use hermes_core::{DEFAULT_SEEDS, Instrument, Price, SimError, SimResult};
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fractional digits kept on mid prices
pub const PRICE_SCALE: u32 = 6;

/// Fractional digits on quoted (jittered) prices and USD values
pub const QUOTE_SCALE: u32 = 2;

/// Per-tick drift bound, in units of 1e-9 (±0.3%)
const DRIFT_BOUND: i64 = 3_000_000;

/// Quote jitter factor bounds, in units of 1e-8 (×0.95 to ×1.05)
const JITTER_MIN: i64 = 95_000_000;
const JITTER_MAX: i64 = 105_000_000;

/// Floor applied if a step would ever produce a non-positive price
const MIN_PRICE: Decimal = dec!(0.000001);

/// Current prices for a fixed set of instruments
#[derive(Debug, Clone, PartialEq)]
pub struct PriceModel {
    instruments: Vec<Instrument>,
}

impl PriceModel {
    /// Create a model from `(symbol, seed price)` pairs
    ///
    /// Rejects an empty set and non-positive seeds.
    pub fn new<I, S>(seeds: I) -> SimResult<Self>
    where
        I: IntoIterator<Item = (S, Price)>,
        S: Into<String>,
    {
        let mut instruments = Vec::new();
        for (symbol, price) in seeds {
            let symbol = symbol.into();
            if price <= Decimal::ZERO {
                return Err(SimError::InvalidSeedPrice { symbol, price });
            }
            instruments.push(Instrument::new(symbol, price));
        }

        if instruments.is_empty() {
            return Err(SimError::EmptyPool("instrument"));
        }

        Ok(Self { instruments })
    }

    /// Move every price by a uniform step in ±0.3%, rounded to 6 decimals
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for instrument in &mut self.instruments {
            let step = Decimal::new(rng.gen_range(-DRIFT_BOUND..=DRIFT_BOUND), 9);
            let next = (instrument.price * (Decimal::ONE + step)).round_dp(PRICE_SCALE);

            instrument.price = if next > Decimal::ZERO {
                next
            } else {
                log::error!(
                    "Price for {} would drop to {}, clamping to {}",
                    instrument.symbol,
                    next,
                    MIN_PRICE
                );
                MIN_PRICE
            };
        }
    }

    /// Current mid price for an instrument
    pub fn current_price(&self, symbol: &str) -> SimResult<Price> {
        self.instruments
            .iter()
            .find(|i| i.symbol == symbol)
            .map(|i| i.price)
            .ok_or_else(|| SimError::UnknownInstrument(symbol.to_string()))
    }

    /// Slightly stale quote: mid × uniform(0.95, 1.05), rounded to 2 decimals
    ///
    /// Drawn independently on every call; does not mutate the model.
    pub fn jittered_price<R: Rng + ?Sized>(&self, symbol: &str, rng: &mut R) -> SimResult<Price> {
        let mid = self.current_price(symbol)?;
        let factor = Decimal::new(rng.gen_range(JITTER_MIN..=JITTER_MAX), 8);
        Ok((mid * factor).round_dp(QUOTE_SCALE))
    }

    /// Uniformly pick one instrument
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &Instrument {
        &self.instruments[rng.gen_range(0..self.instruments.len())]
    }

    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.instruments.iter().map(|i| i.symbol.as_str())
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

impl Default for PriceModel {
    fn default() -> Self {
        Self {
            instruments: DEFAULT_SEEDS
                .iter()
                .map(|(symbol, price)| Instrument::new(*symbol, *price))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_model_has_eleven_instruments() {
        let model = PriceModel::default();
        assert_eq!(model.len(), 11);
        assert_eq!(model.current_price("BTC").unwrap(), dec!(67432.18));
        assert_eq!(model.current_price("LINK").unwrap(), dec!(18.42));
    }

    #[test]
    fn test_unknown_instrument() {
        let model = PriceModel::default();
        assert_eq!(
            model.current_price("FOO"),
            Err(SimError::UnknownInstrument("FOO".to_string()))
        );

        let mut rng = StdRng::seed_from_u64(1);
        assert!(model.jittered_price("FOO", &mut rng).is_err());
    }

    #[test]
    fn test_invalid_seeds_rejected() {
        let err = PriceModel::new([("BAD", dec!(0))]).unwrap_err();
        assert!(matches!(err, SimError::InvalidSeedPrice { .. }));

        let empty: Vec<(String, Price)> = Vec::new();
        assert_eq!(
            PriceModel::new(empty).unwrap_err(),
            SimError::EmptyPool("instrument")
        );
    }

    #[test]
    fn test_prices_stay_positive_and_bounded_per_step() {
        let mut model = PriceModel::default();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10_000 {
            let before = model.clone();
            model.advance(&mut rng);

            for (old, new) in before.instruments().iter().zip(model.instruments()) {
                assert!(new.price > Decimal::ZERO, "{} went non-positive", new.symbol);
                // one step is at most ±0.3% plus rounding
                let bound = old.price * dec!(0.003) + dec!(0.000001);
                assert!((new.price - old.price).abs() <= bound);
            }
        }
    }

    #[test]
    fn test_advance_keeps_six_decimals() {
        let mut model = PriceModel::default();
        let mut rng = StdRng::seed_from_u64(7);
        model.advance(&mut rng);

        for instrument in model.instruments() {
            assert!(instrument.price.scale() <= PRICE_SCALE);
        }
    }

    #[test]
    fn test_tiny_price_never_reaches_zero() {
        let mut model = PriceModel::new([("DUST", dec!(0.000001))]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..1_000 {
            model.advance(&mut rng);
            assert!(model.current_price("DUST").unwrap() > Decimal::ZERO);
        }
    }

    #[test]
    fn test_jittered_price_is_read_only() {
        let model = PriceModel::default();
        let mut rng = StdRng::seed_from_u64(11);

        let before = model.clone();
        for _ in 0..100 {
            model.jittered_price("ETH", &mut rng).unwrap();
        }
        assert_eq!(model, before);
    }

    #[test]
    fn test_jittered_price_within_five_percent_plus_rounding() {
        let model = PriceModel::default();
        let mut rng = StdRng::seed_from_u64(13);

        for symbol in model.symbols() {
            let mid = model.current_price(symbol).unwrap();
            // half a cent of slack for the 2 dp rounding on sub-dollar coins
            let bound = mid * dec!(0.05) + dec!(0.005);

            let mut seen = std::collections::HashSet::new();
            for _ in 0..2_000 {
                let quote = model.jittered_price(symbol, &mut rng).unwrap();
                assert!(
                    (quote - mid).abs() <= bound,
                    "{} quoted {} against mid {}",
                    symbol,
                    quote,
                    mid
                );
                assert!(quote.scale() <= QUOTE_SCALE);
                seen.insert(quote);
            }
            assert!(seen.len() > 1, "{} quote never varied", symbol);
        }
    }

    #[test]
    fn test_pick_covers_all_instruments() {
        let model = PriceModel::default();
        let mut rng = StdRng::seed_from_u64(5);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..1_000 {
            seen.insert(model.pick(&mut rng).symbol.clone());
        }
        assert_eq!(seen.len(), model.len());
    }
}
