//! Price feed types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single price tick from the push channel
///
/// Ordering is defined purely by arrival on the channel; no server
/// timestamp is trusted for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceTick {
    /// Traded symbol (e.g., "AAPL")
    pub symbol: String,
    /// Tick price
    pub price: Decimal,
    /// Local timestamp when the tick was received
    pub received_at: DateTime<Utc>,
}

/// Events delivered to the feed consumer
#[derive(Debug, Clone)]
pub enum FeedEvent {
    /// A new price tick, in arrival order
    Tick(PriceTick),
    /// The push channel closed and will not recover
    Disconnected,
}

/// Visible state of the feed, for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    /// No tick received yet
    Idle,
    /// Ticks flowing
    Live,
    /// Channel lost; the displayed price is no longer moving
    Disconnected,
}
