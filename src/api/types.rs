//! Wire types for the trading service's REST API

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Registration request body
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Login request body
///
/// `api_key` and `api_url` are only present in real-time mode.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub mode: String,
    #[serde(rename = "apiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(rename = "apiUrl", skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

/// Server-authoritative portfolio snapshot
///
/// Returned by login and by every accepted trade. The client adopts it
/// wholesale; balance and holdings are never computed locally.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioSnapshot {
    pub balance: Decimal,
    #[serde(rename = "stocks", default)]
    pub holdings: HashMap<String, u64>,
    /// Opaque session credential, when the server uses bearer transport
    #[serde(default)]
    pub token: Option<String>,
}

/// Current quote from `GET /api/stock/info`
#[derive(Debug, Clone, Deserialize)]
pub struct PriceQuote {
    pub symbol: String,
    pub price: Decimal,
}

/// Error body returned with 4xx responses
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}
