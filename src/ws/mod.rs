//! WebSocket module
//!
//! Reusable push-channel client with automatic reconnection. The trading
//! service only pushes messages, so the client is receive-only.

mod client;
mod types;

pub use client::WsClient;
pub use types::{WsConfig, WsError, WsMessage};
