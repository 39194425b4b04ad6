//! Portfolio types and trade errors

use crate::api::PortfolioSnapshot;
use rust_decimal::Decimal;
use std::collections::HashMap;
use thiserror::Error;

/// Server-authoritative cash balance and holdings
///
/// Always replaced wholesale by the most recently admitted snapshot; the
/// client never derives either field from trade intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    pub balance: Decimal,
    /// Shares held, keyed by symbol
    pub holdings: HashMap<String, u64>,
}

impl Portfolio {
    /// Shares held for the given symbol (zero when absent)
    pub fn quantity(&self, symbol: &str) -> u64 {
        self.holdings.get(symbol).copied().unwrap_or(0)
    }
}

impl From<PortfolioSnapshot> for Portfolio {
    fn from(snapshot: PortfolioSnapshot) -> Self {
        Self {
            balance: snapshot.balance,
            holdings: snapshot.holdings,
        }
    }
}

/// Trade direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeAction {
    Buy,
    Sell,
}

impl TradeAction {
    /// REST path for the action
    pub fn endpoint(&self) -> &'static str {
        match self {
            TradeAction::Buy => "/api/stock/buy",
            TradeAction::Sell => "/api/stock/sell",
        }
    }
}

/// Trade errors
#[derive(Debug, Error)]
pub enum TradeError {
    /// Business-rule rejection (insufficient balance or holdings)
    #[error("trade rejected: {0}")]
    Rejected(String),
    /// No authenticated session
    #[error("not authenticated")]
    NotAuthenticated,
    /// Server no longer accepts the session's credential
    #[error("session expired")]
    AuthExpired,
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
