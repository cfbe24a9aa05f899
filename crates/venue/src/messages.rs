//! Typed message templates
//!
//! Generators produce an [`EventMessage`] with explicit fields instead of a
//! pre-formatted string. Severity follows from the variant, and the text is
//! rendered with `Display` only when a record is built for a sink.

use hermes_core::{Actor, Price, Quantity, Severity, Symbol};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::price_model::QUOTE_SCALE;

/// Text of the record emitted once before the loop starts
pub const STARTUP_MESSAGE: &str = "CryptoExchange backend started";

/// What a trade did with the asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeAction {
    Buy,
    Sell,
    Transfer,
}

impl TradeAction {
    pub const ALL: [TradeAction; 3] = [TradeAction::Buy, TradeAction::Sell, TradeAction::Transfer];
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TradeAction::Buy => "buy",
            TradeAction::Sell => "sell",
            TradeAction::Transfer => "transfer",
        })
    }
}

/// Order side (Buy or Sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub const ALL: [OrderSide; 2] = [OrderSide::Buy, OrderSide::Sell];
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderSide::Buy => "buy",
            OrderSide::Sell => "sell",
        })
    }
}

/// Order types shown in order placement lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    /// Execute at current market price
    Market,
    /// Execute at specified price or better
    Limit,
    /// Market order triggered when price reaches stop price
    StopLoss,
}

impl OrderKind {
    pub const ALL: [OrderKind; 3] = [OrderKind::Market, OrderKind::Limit, OrderKind::StopLoss];
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderKind::Market => "market",
            OrderKind::Limit => "limit",
            OrderKind::StopLoss => "stop-loss",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundsDirection {
    Deposit,
    Withdrawal,
}

impl FundsDirection {
    pub const ALL: [FundsDirection; 2] = [FundsDirection::Deposit, FundsDirection::Withdrawal];
}

/// Reason shown on a failed login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthFailure {
    WrongPassword,
    TwoFactorExpired,
    IpBlocked,
    AccountFrozen,
}

impl AuthFailure {
    pub const ALL: [AuthFailure; 4] = [
        AuthFailure::WrongPassword,
        AuthFailure::TwoFactorExpired,
        AuthFailure::IpBlocked,
        AuthFailure::AccountFrozen,
    ];
}

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AuthFailure::WrongPassword => "wrong password",
            AuthFailure::TwoFactorExpired => "2FA expired",
            AuthFailure::IpBlocked => "IP blocked",
            AuthFailure::AccountFrozen => "account frozen",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceDirection {
    Up,
    Down,
}

impl PriceDirection {
    /// Positive change reads as "up", zero or negative as "down"
    pub fn of(change_pct: Decimal) -> Self {
        if change_pct > Decimal::ZERO {
            PriceDirection::Up
        } else {
            PriceDirection::Down
        }
    }
}

impl fmt::Display for PriceDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PriceDirection::Up => "up",
            PriceDirection::Down => "down",
        })
    }
}

/// Synthetic operational metric lines
#[derive(Debug, Clone, PartialEq)]
pub enum SystemMetric {
    Healthcheck,
    WebSocketConnections(u32),
    RequestsPerSecond(u32),
    Resources { cpu_pct: Decimal, ram_pct: Decimal },
    OrdersPerMinute(u32),
}

impl fmt::Display for SystemMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemMetric::Healthcheck => write!(f, "System: healthcheck OK"),
            SystemMetric::WebSocketConnections(n) => {
                write!(f, "System: active WebSocket connections: {}", n)
            }
            SystemMetric::RequestsPerSecond(n) => write!(f, "System: API requests per second: {}", n),
            SystemMetric::Resources { cpu_pct, ram_pct } => {
                write!(f, "System: CPU {}%, RAM {}%", cpu_pct, ram_pct)
            }
            SystemMetric::OrdersPerMinute(n) => {
                write!(f, "System: orders processed in the last minute: {}", n)
            }
        }
    }
}

/// One simulated outcome, with typed fields
#[derive(Debug, Clone, PartialEq)]
pub enum EventMessage {
    Startup,
    TradeExecuted {
        actor: Actor,
        action: TradeAction,
        amount: Quantity,
        symbol: Symbol,
        price: Price,
    },
    TradeFailed {
        actor: Actor,
        action: TradeAction,
        amount: Quantity,
        symbol: Symbol,
    },
    OrderPlaced {
        actor: Actor,
        kind: OrderKind,
        side: OrderSide,
        amount: Quantity,
        symbol: Symbol,
        price: Price,
    },
    FundsMoved {
        actor: Actor,
        direction: FundsDirection,
        amount: Quantity,
        symbol: Symbol,
        usd_value: Price,
    },
    LoginSucceeded {
        actor: Actor,
    },
    LoginFailed {
        actor: Actor,
        reason: AuthFailure,
    },
    /// `change_pct` is cosmetic, it is not derived from price history
    PriceAlert {
        symbol: Symbol,
        change_pct: Decimal,
        price: Price,
    },
    WhaleTransfer {
        actor: Actor,
        amount: Quantity,
        symbol: Symbol,
        usd_value: Price,
    },
    System(SystemMetric),
}

/// amount × price, rounded to cents
pub fn usd_value(amount: Quantity, price: Price) -> Price {
    (amount * price).round_dp(QUOTE_SCALE)
}

impl EventMessage {
    /// Deposit or withdrawal valued at `price`
    pub fn funds_moved(
        actor: Actor,
        direction: FundsDirection,
        amount: Quantity,
        symbol: impl Into<Symbol>,
        price: Price,
    ) -> Self {
        EventMessage::FundsMoved {
            actor,
            direction,
            amount,
            symbol: symbol.into(),
            usd_value: usd_value(amount, price),
        }
    }

    /// Large transfer valued at `price`
    pub fn whale_transfer(
        actor: Actor,
        amount: Quantity,
        symbol: impl Into<Symbol>,
        price: Price,
    ) -> Self {
        EventMessage::WhaleTransfer {
            actor,
            amount,
            symbol: symbol.into(),
            usd_value: usd_value(amount, price),
        }
    }

    /// Alert quoting the current mid price rounded to cents
    pub fn price_alert(symbol: impl Into<Symbol>, change_pct: Decimal, mid: Price) -> Self {
        EventMessage::PriceAlert {
            symbol: symbol.into(),
            change_pct,
            price: mid.round_dp(QUOTE_SCALE),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            EventMessage::TradeFailed { .. } => Severity::Error,
            EventMessage::LoginFailed { .. }
            | EventMessage::PriceAlert { .. }
            | EventMessage::WhaleTransfer { .. } => Severity::Warn,
            EventMessage::Startup
            | EventMessage::TradeExecuted { .. }
            | EventMessage::OrderPlaced { .. }
            | EventMessage::FundsMoved { .. }
            | EventMessage::LoginSucceeded { .. }
            | EventMessage::System(_) => Severity::Info,
        }
    }

    pub fn price_direction(&self) -> Option<PriceDirection> {
        match self {
            EventMessage::PriceAlert { change_pct, .. } => Some(PriceDirection::of(*change_pct)),
            _ => None,
        }
    }
}

impl fmt::Display for EventMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventMessage::Startup => f.write_str(STARTUP_MESSAGE),
            EventMessage::TradeExecuted {
                actor,
                action,
                amount,
                symbol,
                price,
            } => write!(
                f,
                "Transaction executed: {} {} {} {} at ${}",
                actor,
                action,
                amount.normalize(),
                symbol,
                price.normalize()
            ),
            EventMessage::TradeFailed {
                actor,
                action,
                amount,
                symbol,
            } => write!(
                f,
                "Transaction failed: {} - {} {} {}",
                actor,
                action,
                amount.normalize(),
                symbol
            ),
            EventMessage::OrderPlaced {
                actor,
                kind,
                side,
                amount,
                symbol,
                price,
            } => write!(
                f,
                "Order {}: {} {} {} {} at ${}",
                kind,
                actor,
                side,
                amount.normalize(),
                symbol,
                price.normalize()
            ),
            EventMessage::FundsMoved {
                actor,
                direction: FundsDirection::Deposit,
                amount,
                symbol,
                usd_value,
            } => write!(
                f,
                "Deposit: {} deposited {} {} (${})",
                actor,
                amount.normalize(),
                symbol,
                usd_value.normalize()
            ),
            EventMessage::FundsMoved {
                actor,
                direction: FundsDirection::Withdrawal,
                amount,
                symbol,
                usd_value,
            } => write!(
                f,
                "Withdrawal: {} withdrew {} {} (${})",
                actor,
                amount.normalize(),
                symbol,
                usd_value.normalize()
            ),
            EventMessage::LoginSucceeded { actor } => write!(f, "Login: {} signed in", actor),
            EventMessage::LoginFailed { actor, reason } => {
                write!(f, "Login failed: {} - {}", actor, reason)
            }
            EventMessage::PriceAlert {
                symbol,
                change_pct,
                price,
            } => write!(
                f,
                "Alert: {} {} {}%, current price ${}",
                symbol,
                PriceDirection::of(*change_pct),
                change_pct.abs().normalize(),
                price.normalize()
            ),
            EventMessage::WhaleTransfer {
                actor,
                amount,
                symbol,
                usd_value,
            } => write!(
                f,
                "Large transfer: {} moved {} {} (${})",
                actor,
                amount.normalize(),
                symbol,
                usd_value.normalize()
            ),
            EventMessage::System(metric) => write!(f, "{}", metric),
        }
    }
}
