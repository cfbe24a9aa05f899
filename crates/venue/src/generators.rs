//! Event generators - one per simulated activity kind
//!
//! Each generator is split into a random *draw* of typed parameters and a
//! deterministic *build* that reads the price model. Tests construct the draw
//! structs directly to force an actor, instrument, amount or outcome.
//!
//! Generators never mutate prices; only [`PriceModel::advance`] does.

use hermes_core::{Actor, ActorPool, Quantity, SimResult, Symbol, WHALE_SYMBOLS};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::messages::{
    AuthFailure, EventMessage, FundsDirection, OrderKind, OrderSide, SystemMetric, TradeAction,
};
use crate::price_model::PriceModel;

/// Probability that a trade executes (otherwise it fails)
pub const TRADE_SUCCESS_PROBABILITY: f64 = 0.85;

/// Probability that a login succeeds
pub const LOGIN_SUCCESS_PROBABILITY: f64 = 0.9;

/// Categories of simulated activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Trade,
    Order,
    DepositWithdrawal,
    Auth,
    PriceAlert,
    WhaleMove,
    System,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::Trade,
        EventKind::Order,
        EventKind::DepositWithdrawal,
        EventKind::Auth,
        EventKind::PriceAlert,
        EventKind::WhaleMove,
        EventKind::System,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Trade => "trade",
            EventKind::Order => "order",
            EventKind::DepositWithdrawal => "deposit_withdrawal",
            EventKind::Auth => "auth",
            EventKind::PriceAlert => "price_alert",
            EventKind::WhaleMove => "whale_move",
            EventKind::System => "system",
        }
    }

    /// Draw parameters for this kind and build its message
    pub fn generate<R: Rng + ?Sized>(
        &self,
        prices: &PriceModel,
        actors: &ActorPool,
        rng: &mut R,
    ) -> SimResult<EventMessage> {
        match self {
            EventKind::Trade => TradeDraw::sample(prices, actors, rng).build(prices, rng),
            EventKind::Order => OrderDraw::sample(prices, actors, rng).build(prices, rng),
            EventKind::DepositWithdrawal => {
                FundsDraw::sample(prices, actors, rng).build(prices, rng)
            }
            EventKind::Auth => Ok(AuthDraw::sample(actors, rng).build()),
            EventKind::PriceAlert => PriceAlertDraw::sample(prices, rng).build(prices),
            EventKind::WhaleMove => WhaleDraw::sample(actors, rng).build(prices),
            EventKind::System => Ok(EventMessage::System(SystemMetric::sample(rng))),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Uniform actor choice; the pool is non-empty by construction
fn pick_actor<R: Rng + ?Sized>(actors: &ActorPool, rng: &mut R) -> Actor {
    let pool = actors.as_slice();
    pool[rng.gen_range(0..pool.len())].clone()
}

fn pick_symbol<R: Rng + ?Sized>(prices: &PriceModel, rng: &mut R) -> Symbol {
    prices.pick(rng).symbol.clone()
}

/// Uniform decimal in `[lo, hi]` units of `10^-scale`
fn uniform_decimal<R: Rng + ?Sized>(rng: &mut R, lo: i64, hi: i64, scale: u32) -> Decimal {
    Decimal::new(rng.gen_range(lo..=hi), scale)
}

fn pick_variant<T: Copy, R: Rng + ?Sized>(options: &[T], rng: &mut R) -> T {
    options[rng.gen_range(0..options.len())]
}

/// Trade: buy, sell or transfer of 0.01 to 10 units
#[derive(Debug, Clone, PartialEq)]
pub struct TradeDraw {
    pub actor: Actor,
    pub symbol: Symbol,
    pub action: TradeAction,
    pub amount: Quantity,
    pub succeeded: bool,
}

impl TradeDraw {
    pub fn sample<R: Rng + ?Sized>(prices: &PriceModel, actors: &ActorPool, rng: &mut R) -> Self {
        Self {
            actor: pick_actor(actors, rng),
            symbol: pick_symbol(prices, rng),
            action: pick_variant(&TradeAction::ALL, rng),
            amount: uniform_decimal(rng, 10_000, 10_000_000, 6),
            succeeded: rng.gen_bool(TRADE_SUCCESS_PROBABILITY),
        }
    }

    /// Quote is drawn even on failure so both branches consume the same randomness
    pub fn build<R: Rng + ?Sized>(self, prices: &PriceModel, rng: &mut R) -> SimResult<EventMessage> {
        let price = prices.jittered_price(&self.symbol, rng)?;

        Ok(if self.succeeded {
            EventMessage::TradeExecuted {
                actor: self.actor,
                action: self.action,
                amount: self.amount,
                symbol: self.symbol,
                price,
            }
        } else {
            EventMessage::TradeFailed {
                actor: self.actor,
                action: self.action,
                amount: self.amount,
                symbol: self.symbol,
            }
        })
    }
}

/// Order placement: market, limit or stop-loss for 0.01 to 5 units
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraw {
    pub actor: Actor,
    pub symbol: Symbol,
    pub side: OrderSide,
    pub kind: OrderKind,
    pub amount: Quantity,
}

impl OrderDraw {
    pub fn sample<R: Rng + ?Sized>(prices: &PriceModel, actors: &ActorPool, rng: &mut R) -> Self {
        Self {
            actor: pick_actor(actors, rng),
            symbol: pick_symbol(prices, rng),
            side: pick_variant(&OrderSide::ALL, rng),
            kind: pick_variant(&OrderKind::ALL, rng),
            amount: uniform_decimal(rng, 10_000, 5_000_000, 6),
        }
    }

    pub fn build<R: Rng + ?Sized>(self, prices: &PriceModel, rng: &mut R) -> SimResult<EventMessage> {
        let price = prices.jittered_price(&self.symbol, rng)?;
        Ok(EventMessage::OrderPlaced {
            actor: self.actor,
            kind: self.kind,
            side: self.side,
            amount: self.amount,
            symbol: self.symbol,
            price,
        })
    }
}

/// Deposit or withdrawal of 0.05 to 8 units, valued at a jittered quote
#[derive(Debug, Clone, PartialEq)]
pub struct FundsDraw {
    pub actor: Actor,
    pub symbol: Symbol,
    pub direction: FundsDirection,
    pub amount: Quantity,
}

impl FundsDraw {
    pub fn sample<R: Rng + ?Sized>(prices: &PriceModel, actors: &ActorPool, rng: &mut R) -> Self {
        Self {
            actor: pick_actor(actors, rng),
            symbol: pick_symbol(prices, rng),
            direction: pick_variant(&FundsDirection::ALL, rng),
            amount: uniform_decimal(rng, 50_000, 8_000_000, 6),
        }
    }

    pub fn build<R: Rng + ?Sized>(self, prices: &PriceModel, rng: &mut R) -> SimResult<EventMessage> {
        let price = prices.jittered_price(&self.symbol, rng)?;
        Ok(EventMessage::funds_moved(
            self.actor,
            self.direction,
            self.amount,
            self.symbol,
            price,
        ))
    }
}

/// Login attempt; `failure` is set on the 10% failure branch
#[derive(Debug, Clone, PartialEq)]
pub struct AuthDraw {
    pub actor: Actor,
    pub failure: Option<AuthFailure>,
}

impl AuthDraw {
    pub fn sample<R: Rng + ?Sized>(actors: &ActorPool, rng: &mut R) -> Self {
        let actor = pick_actor(actors, rng);
        let failure = if rng.gen_bool(LOGIN_SUCCESS_PROBABILITY) {
            None
        } else {
            Some(pick_variant(&AuthFailure::ALL, rng))
        };
        Self { actor, failure }
    }

    pub fn build(self) -> EventMessage {
        match self.failure {
            None => EventMessage::LoginSucceeded { actor: self.actor },
            Some(reason) => EventMessage::LoginFailed {
                actor: self.actor,
                reason,
            },
        }
    }
}

/// Price alert with a cosmetic change in [-5.00, 5.00]%
#[derive(Debug, Clone, PartialEq)]
pub struct PriceAlertDraw {
    pub symbol: Symbol,
    pub change_pct: Decimal,
}

impl PriceAlertDraw {
    pub fn sample<R: Rng + ?Sized>(prices: &PriceModel, rng: &mut R) -> Self {
        Self {
            symbol: pick_symbol(prices, rng),
            change_pct: uniform_decimal(rng, -500, 500, 2),
        }
    }

    pub fn build(self, prices: &PriceModel) -> SimResult<EventMessage> {
        let mid = prices.current_price(&self.symbol)?;
        Ok(EventMessage::price_alert(self.symbol, self.change_pct, mid))
    }
}

/// Large transfer of 50 to 500 BTC, ETH or BNB, valued at the mid price
#[derive(Debug, Clone, PartialEq)]
pub struct WhaleDraw {
    pub actor: Actor,
    pub symbol: Symbol,
    pub amount: Quantity,
}

impl WhaleDraw {
    pub fn sample<R: Rng + ?Sized>(actors: &ActorPool, rng: &mut R) -> Self {
        Self {
            actor: pick_actor(actors, rng),
            symbol: pick_variant(&WHALE_SYMBOLS, rng).to_string(),
            amount: uniform_decimal(rng, 5_000, 50_000, 2),
        }
    }

    pub fn build(self, prices: &PriceModel) -> SimResult<EventMessage> {
        let mid = prices.current_price(&self.symbol)?;
        Ok(EventMessage::whale_transfer(
            self.actor,
            self.amount,
            self.symbol,
            mid,
        ))
    }
}

impl SystemMetric {
    /// Pick one metric line uniformly, with fresh values
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0..5) {
            0 => SystemMetric::Healthcheck,
            1 => SystemMetric::WebSocketConnections(rng.gen_range(500..=15_000)),
            2 => SystemMetric::RequestsPerSecond(rng.gen_range(200..=8_000)),
            3 => SystemMetric::Resources {
                cpu_pct: uniform_decimal(rng, 100, 850, 1),
                ram_pct: uniform_decimal(rng, 200, 700, 1),
            },
            _ => SystemMetric::OrdersPerMinute(rng.gen_range(100..=5_000)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hermes_core::Severity;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal_macros::dec;

    fn setup() -> (PriceModel, ActorPool, StdRng) {
        (
            PriceModel::default(),
            ActorPool::default(),
            StdRng::seed_from_u64(42),
        )
    }

    #[test]
    fn test_every_kind_renders_non_empty_text() {
        let (prices, actors, mut rng) = setup();

        for kind in EventKind::ALL {
            for _ in 0..200 {
                let msg = kind.generate(&prices, &actors, &mut rng).unwrap();
                assert!(!msg.to_string().is_empty(), "{} rendered empty", kind);
                assert!(matches!(
                    msg.severity(),
                    Severity::Info | Severity::Warn | Severity::Error
                ));
            }
        }
    }

    #[test]
    fn test_generators_do_not_move_prices() {
        let (prices, actors, mut rng) = setup();
        let before = prices.clone();

        for kind in EventKind::ALL {
            for _ in 0..50 {
                kind.generate(&prices, &actors, &mut rng).unwrap();
            }
        }
        assert_eq!(prices, before);
    }

    #[test]
    fn test_trade_error_only_on_failure_branch() {
        let (prices, actors, mut rng) = setup();

        for _ in 0..2_000 {
            let draw = TradeDraw::sample(&prices, &actors, &mut rng);
            let succeeded = draw.succeeded;
            let msg = draw.build(&prices, &mut rng).unwrap();

            if succeeded {
                assert_eq!(msg.severity(), Severity::Info);
                assert!(msg.to_string().starts_with("Transaction executed"));
            } else {
                assert_eq!(msg.severity(), Severity::Error);
                assert!(!msg.to_string().contains('$'));
            }
        }
    }

    #[test]
    fn test_trade_failure_rate_near_fifteen_percent() {
        let (prices, actors, mut rng) = setup();
        let n = 20_000;
        let failures = (0..n)
            .filter(|_| !TradeDraw::sample(&prices, &actors, &mut rng).succeeded)
            .count();

        let rate = failures as f64 / n as f64;
        approx::assert_abs_diff_eq!(rate, 0.15, epsilon = 0.01);
    }

    #[test]
    fn test_auth_warn_only_on_failure() {
        let (_, actors, mut rng) = setup();
        let mut failures = 0;

        for _ in 0..5_000 {
            let draw = AuthDraw::sample(&actors, &mut rng);
            let failed = draw.failure.is_some();
            let msg = draw.build();

            if failed {
                failures += 1;
                assert_eq!(msg.severity(), Severity::Warn);
            } else {
                assert_eq!(msg.severity(), Severity::Info);
            }
        }
        approx::assert_abs_diff_eq!(failures as f64 / 5_000.0, 0.1, epsilon = 0.02);
    }

    #[test]
    fn test_forced_trade_scenario() {
        let (prices, actors, mut rng) = setup();
        assert_eq!(prices.current_price("BTC").unwrap(), dec!(67432.18));

        let draw = TradeDraw {
            actor: actors.get("whale_alert").unwrap().clone(),
            symbol: "BTC".to_string(),
            action: TradeAction::Buy,
            amount: dec!(1.5),
            succeeded: true,
        };
        let msg = draw.build(&prices, &mut rng).unwrap();

        let EventMessage::TradeExecuted { price, .. } = &msg else {
            panic!("expected executed trade, got {:?}", msg);
        };
        assert!(*price >= dec!(64060.57) && *price <= dec!(70803.79));

        let text = msg.to_string();
        for needle in ["whale_alert", "buy", "1.5", "BTC"] {
            assert!(text.contains(needle), "{:?} missing {}", text, needle);
        }
        assert!(text.contains(&format!("${}", price.normalize())));
    }

    #[test]
    fn test_forced_withdrawal_scenario() {
        let msg = EventMessage::funds_moved(
            Actor::new("hodler_2024"),
            FundsDirection::Withdrawal,
            dec!(2.0),
            "ETH",
            dec!(100.0),
        );

        let EventMessage::FundsMoved { usd_value, .. } = &msg else {
            panic!("expected funds movement");
        };
        assert_eq!(*usd_value, dec!(200.00));

        let text = msg.to_string();
        assert!(text.starts_with("Withdrawal:"));
        assert!(text.contains("withdrew"));
        assert!(!text.contains("Deposit"));
    }

    #[test]
    fn test_amount_ranges() {
        let (prices, actors, mut rng) = setup();

        for _ in 0..2_000 {
            let trade = TradeDraw::sample(&prices, &actors, &mut rng);
            assert!(trade.amount >= dec!(0.01) && trade.amount <= dec!(10));

            let order = OrderDraw::sample(&prices, &actors, &mut rng);
            assert!(order.amount >= dec!(0.01) && order.amount <= dec!(5));

            let funds = FundsDraw::sample(&prices, &actors, &mut rng);
            assert!(funds.amount >= dec!(0.05) && funds.amount <= dec!(8));

            let whale = WhaleDraw::sample(&actors, &mut rng);
            assert!(whale.amount >= dec!(50) && whale.amount <= dec!(500));
            assert!(WHALE_SYMBOLS.contains(&whale.symbol.as_str()));

            let alert = PriceAlertDraw::sample(&prices, &mut rng);
            assert!(alert.change_pct >= dec!(-5) && alert.change_pct <= dec!(5));
        }
    }

    #[test]
    fn test_whale_uses_mid_price() {
        let prices = PriceModel::default();
        let draw = WhaleDraw {
            actor: Actor::new("mining_pool"),
            symbol: "BNB".to_string(),
            amount: dec!(100),
        };

        let msg = draw.build(&prices).unwrap();
        assert_eq!(
            msg.to_string(),
            "Large transfer: mining_pool moved 100 BNB ($58730)"
        );
        assert_eq!(msg.severity(), Severity::Warn);
    }

    #[test]
    fn test_price_alert_quotes_current_price() {
        let prices = PriceModel::default();
        let draw = PriceAlertDraw {
            symbol: "XRP".to_string(),
            change_pct: dec!(-1.25),
        };

        let msg = draw.build(&prices).unwrap();
        assert_eq!(msg.to_string(), "Alert: XRP down 1.25%, current price $0.62");
    }

    #[test]
    fn test_unknown_instrument_is_an_error() {
        let prices = PriceModel::new([("SOL", dec!(172.63))]).unwrap();
        let actors = ActorPool::default();
        let mut rng = StdRng::seed_from_u64(9);

        // whale symbols are not in this model
        let result = EventKind::WhaleMove.generate(&prices, &actors, &mut rng);
        assert!(matches!(
            result,
            Err(hermes_core::SimError::UnknownInstrument(_))
        ));
    }

    #[test]
    fn test_system_metric_ranges() {
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..2_000 {
            match SystemMetric::sample(&mut rng) {
                SystemMetric::Healthcheck => {}
                SystemMetric::WebSocketConnections(n) => assert!((500..=15_000).contains(&n)),
                SystemMetric::RequestsPerSecond(n) => assert!((200..=8_000).contains(&n)),
                SystemMetric::Resources { cpu_pct, ram_pct } => {
                    assert!(cpu_pct >= dec!(10) && cpu_pct <= dec!(85));
                    assert!(ram_pct >= dec!(20) && ram_pct <= dec!(70));
                }
                SystemMetric::OrdersPerMinute(n) => assert!((100..=5_000).contains(&n)),
            }
        }
    }
}
