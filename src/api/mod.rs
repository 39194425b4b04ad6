//! REST API module
//!
//! Typed client for the trading service's HTTP endpoints

mod client;
mod types;

pub use client::{ApiClient, ApiClientConfig};
pub use types::{ErrorBody, LoginRequest, PortfolioSnapshot, PriceQuote, RegisterRequest};
