//! Price feed module
//!
//! Real-time ticks for the traded symbol from the server's push channel

mod stream;
mod types;

pub use stream::TickerFeed;
pub use types::{FeedEvent, FeedStatus, PriceTick};

use async_trait::async_trait;
use tokio::sync::mpsc;

/// Trait for price feed implementations
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Subscribe to price updates
    async fn subscribe(&self) -> anyhow::Result<FeedSubscription>;
}

/// Handle to a live feed subscription
///
/// Owns the receiving end of the event channel. Once released, no further
/// event is ever yielded, so a late tick cannot mutate torn-down state.
pub struct FeedSubscription {
    rx: mpsc::Receiver<FeedEvent>,
    released: bool,
}

impl FeedSubscription {
    pub(crate) fn new(rx: mpsc::Receiver<FeedEvent>) -> Self {
        Self {
            rx,
            released: false,
        }
    }

    /// Next feed event, in exact arrival order
    ///
    /// Returns `None` once the channel is exhausted or the subscription
    /// has been released.
    pub async fn next_event(&mut self) -> Option<FeedEvent> {
        if self.released {
            return None;
        }
        self.rx.recv().await
    }

    /// Release the subscription
    ///
    /// Idempotent: calling it more than once is a no-op.
    pub fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.rx.close();
            tracing::debug!("Feed subscription released");
        }
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}
