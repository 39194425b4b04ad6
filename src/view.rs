//! View projection
//!
//! Pure derivation of renderable fields from client state. No network or
//! timer access; recomputed in full on every state change, so it is
//! deterministic and total for every reachable input combination.

use crate::feed::FeedStatus;
use crate::history::PriceHistory;
use crate::portfolio::Portfolio;
use crate::session::Session;
use rust_decimal::Decimal;

/// Chart series derived from the price history
///
/// Labels restart from 1 on every projection and reflect the buffer's
/// current occupancy, not a cumulative tick count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartData {
    /// Series legend (e.g., "AAPL Stock Price")
    pub label: String,
    pub labels: Vec<u32>,
    pub series: Vec<Decimal>,
}

/// Renderable fields for the current client state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    /// Greeting shown while authenticated
    pub greeting: Option<String>,
    /// Formatted current price, absent until the first tick
    pub price_line: Option<String>,
    /// Formatted cash balance, absent without a portfolio snapshot
    pub balance_line: Option<String>,
    /// Shares owned, absent without a portfolio snapshot
    pub holdings_line: Option<String>,
    pub chart: ChartData,
    /// Visible warning when the push channel is lost
    pub feed_notice: Option<String>,
}

/// Project client state into a render model
pub fn project(
    session: &Session,
    history: &PriceHistory,
    portfolio: Option<&Portfolio>,
    feed: FeedStatus,
    symbol: &str,
) -> RenderModel {
    let greeting = if session.is_authenticated() {
        session.identity.as_ref().map(|id| format!("Welcome, {id}"))
    } else {
        None
    };

    let price_line = history
        .latest()
        .map(|price| format!("Current Price: ${price:.2}"));

    let balance_line = portfolio.map(|p| format!("Balance: ${:.2}", p.balance));
    let holdings_line = portfolio.map(|p| format!("Stocks Owned: {}", p.quantity(symbol)));

    let chart = ChartData {
        label: format!("{symbol} Stock Price"),
        labels: (1..=history.len() as u32).collect(),
        series: history.iter().copied().collect(),
    };

    let feed_notice = match feed {
        FeedStatus::Disconnected => Some("Price feed disconnected".to_string()),
        FeedStatus::Idle | FeedStatus::Live => None,
    };

    RenderModel {
        greeting,
        price_line,
        balance_line,
        holdings_line,
        chart,
        feed_notice,
    }
}
