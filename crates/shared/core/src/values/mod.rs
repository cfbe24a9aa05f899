use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Price value - uses Decimal so rounding to fixed precision is exact
pub type Price = Decimal;

/// Quantity value - uses Decimal for precision
pub type Quantity = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Symbol identifier for a tracked instrument (e.g. "BTC")
pub type Symbol = String;
