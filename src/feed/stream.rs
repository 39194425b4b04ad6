//! Push-channel price feed for the trading service

use super::types::{FeedEvent, PriceTick};
use super::{FeedSubscription, PriceFeed};
use crate::config::FeedConfig;
use crate::ws::{WsClient, WsConfig, WsMessage};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::mpsc;

/// Push event name carrying a price update
const PRICE_EVENT: &str = "stock_price";

/// Price update message pushed by the server
#[derive(Debug, Deserialize)]
struct StockPriceMessage {
    event: String,
    symbol: String,
    price: Decimal,
}

/// WebSocket price feed for the service's single traded symbol
pub struct TickerFeed {
    ws_url: String,
    symbol: String,
}

impl TickerFeed {
    /// Create a feed from the feed configuration
    pub fn new(config: &FeedConfig) -> Self {
        Self {
            ws_url: config.ws_url.clone(),
            symbol: config.symbol.clone(),
        }
    }

    /// Parse a push message into a PriceTick
    ///
    /// Other event types, other symbols, malformed frames, and negative
    /// prices are skipped.
    fn parse_message(msg: &str, symbol: &str) -> Option<PriceTick> {
        let update: StockPriceMessage = serde_json::from_str(msg).ok()?;

        if update.event != PRICE_EVENT || update.symbol != symbol {
            return None;
        }
        if update.price < Decimal::ZERO {
            return None;
        }

        Some(PriceTick {
            symbol: update.symbol,
            price: update.price,
            received_at: Utc::now(),
        })
    }

    /// Run the message processing loop
    ///
    /// O(1) per frame; ticks are forwarded in exact arrival order and
    /// never coalesced.
    async fn run_message_loop(
        mut ws_rx: mpsc::Receiver<WsMessage>,
        event_tx: mpsc::Sender<FeedEvent>,
        symbol: String,
    ) {
        while let Some(msg) = ws_rx.recv().await {
            match msg {
                WsMessage::Text(text) => {
                    if let Some(tick) = Self::parse_message(&text, &symbol) {
                        if event_tx.send(FeedEvent::Tick(tick)).await.is_err() {
                            tracing::debug!("Feed subscriber dropped, stopping feed");
                            break;
                        }
                    }
                }
                WsMessage::Connected => {
                    tracing::info!("Price feed connected");
                }
                WsMessage::Disconnected => {
                    tracing::warn!("Price feed disconnected");
                    let _ = event_tx.send(FeedEvent::Disconnected).await;
                    break;
                }
                WsMessage::Reconnecting { attempt } => {
                    tracing::warn!(attempt, "Price feed reconnecting...");
                }
            }
        }
    }
}

#[async_trait]
impl PriceFeed for TickerFeed {
    async fn subscribe(&self) -> anyhow::Result<FeedSubscription> {
        let (event_tx, event_rx) = mpsc::channel(1024);

        tracing::info!(symbol = %self.symbol, url = %self.ws_url, "Subscribing to price feed");

        let config = WsConfig::new(self.ws_url.clone())
            .max_reconnects(10)
            .initial_delay(Duration::from_secs(1))
            .max_delay(Duration::from_secs(60))
            .ping_interval(Duration::from_secs(30));

        let client = WsClient::new(config);
        let ws_rx = client.connect();

        let symbol = self.symbol.clone();
        tokio::spawn(async move {
            Self::run_message_loop(ws_rx, event_tx, symbol).await;
        });

        Ok(FeedSubscription::new(event_rx))
    }
}
