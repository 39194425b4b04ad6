//! tickersim: headless client for a simulated single-symbol stock trading service
//!
//! This library provides the core components for:
//! - Session management (register/login/logout) against the REST API
//! - Real-time price ticks from the server's push channel
//! - Bounded price history for current-price display and charting
//! - Buy/sell execution with server-authoritative portfolio snapshots
//! - Stale-response protection via per-request sequence numbers
//! - Pure projection of client state into a renderable model

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod feed;
pub mod history;
pub mod portfolio;
pub mod session;
pub mod telemetry;
pub mod view;
pub mod ws;
