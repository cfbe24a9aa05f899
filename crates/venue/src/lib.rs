//! Hermes Venue - Simulated trading venue activity
//!
//! Everything that decides *what* gets logged:
//!
//! - **Price Model**: current mid price per instrument, advanced by small random perturbations
//! - **Messages**: typed message templates, one variant per simulated outcome
//! - **Generators**: per-kind random draws that turn prices and actors into messages
//! - **Catalog**: weighted selection of the next event kind
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────┐   draw kind    ┌──────────────┐
//!   │ EventCatalog │ ─────────────▶ │  EventKind   │
//!   └──────────────┘                │  generator   │
//!                                   └──────┬───────┘
//!          reads prices / actors           │
//!   ┌──────────────┐  ┌───────────┐        │
//!   │  PriceModel  │  │ ActorPool │ ───────┤
//!   └──────────────┘  └───────────┘        ▼
//!                                   ┌──────────────┐
//!                                   │ EventMessage │ ──▶ rendered at the sink boundary
//!                                   └──────────────┘
//! ```

pub mod catalog;
pub mod generators;
pub mod messages;
pub mod price_model;

// Re-export main types
pub use catalog::{DEFAULT_WEIGHTS, EventCatalog};
pub use generators::{
    AuthDraw, EventKind, FundsDraw, OrderDraw, PriceAlertDraw, TradeDraw, WhaleDraw,
};
pub use messages::{
    AuthFailure, EventMessage, FundsDirection, OrderKind, OrderSide, PriceDirection, SystemMetric,
    TradeAction,
};
pub use price_model::PriceModel;
