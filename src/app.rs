//! Application core
//!
//! Single owner of the four interdependent pieces of client state:
//! session, price history, portfolio ledger, and feed status. Each is
//! written by exactly one path here and read only by the view projection.
//!
//! Ordering guarantees: ticks are applied in arrival order, and trade
//! responses in request-issue order. Trades run through `&mut self`, so
//! two can never be in flight at once; the ledger's sequence gate
//! additionally discards responses that straddle a logout.

use crate::api::ApiClient;
use crate::feed::{FeedEvent, FeedStatus};
use crate::history::PriceHistory;
use crate::portfolio::{Ledger, Portfolio, TradeAction, TradeError};
use crate::session::{AuthError, RegError, Session, SessionStore, TradingMode};
use crate::view::{self, RenderModel};
use std::sync::Arc;

/// Client application state and the operations that mutate it
pub struct App {
    api: Arc<ApiClient>,
    session: SessionStore,
    history: PriceHistory,
    ledger: Ledger,
    feed_status: FeedStatus,
    symbol: String,
}

impl App {
    /// Create an app with an anonymous session and empty state
    pub fn new(api: Arc<ApiClient>, symbol: impl Into<String>, history_capacity: usize) -> Self {
        Self {
            session: SessionStore::new(Arc::clone(&api)),
            api,
            history: PriceHistory::new(history_capacity),
            ledger: Ledger::new(),
            feed_status: FeedStatus::Idle,
            symbol: symbol.into(),
        }
    }

    pub fn session(&self) -> &Session {
        self.session.session()
    }

    pub fn history(&self) -> &PriceHistory {
        &self.history
    }

    pub fn portfolio(&self) -> Option<&Portfolio> {
        self.ledger.portfolio()
    }

    pub fn feed_status(&self) -> FeedStatus {
        self.feed_status
    }

    /// Register a new identity; does not touch session state
    pub async fn register(&self, identity: &str, credential: &str) -> Result<(), RegError> {
        self.session.register(identity, credential).await
    }

    /// Log in and adopt the server's initial portfolio snapshot verbatim
    pub async fn login(
        &mut self,
        identity: &str,
        credential: &str,
        mode: &TradingMode,
    ) -> Result<(), AuthError> {
        let snapshot = self.session.login(identity, credential, mode).await?;
        self.ledger.adopt(snapshot.into());
        Ok(())
    }

    /// Log out and clear all cached state
    ///
    /// History, portfolio, and feed gating are cleared whatever the server
    /// answers, and any in-flight trade response is invalidated.
    pub async fn logout(&mut self) -> Result<(), AuthError> {
        let result = self.session.logout().await;
        self.history.clear();
        self.ledger.clear();
        self.feed_status = FeedStatus::Idle;
        result
    }

    /// Apply one feed event
    ///
    /// Ticks arriving while not authenticated are discarded; the
    /// subscription may stay open across sessions but delivery-to-view is
    /// gated by login.
    pub fn on_feed_event(&mut self, event: FeedEvent) {
        match event {
            FeedEvent::Tick(tick) => {
                if !self.session.is_authenticated() {
                    return;
                }
                self.history.append(tick.price);
                self.feed_status = FeedStatus::Live;
            }
            FeedEvent::Disconnected => {
                self.feed_status = FeedStatus::Disconnected;
            }
        }
    }

    /// Buy or sell, replacing the portfolio with the server's snapshot
    ///
    /// On any error the portfolio is left exactly as it was. A credential
    /// rejection demotes the session to logged-out.
    pub async fn trade(&mut self, action: TradeAction, quantity: u32) -> Result<(), TradeError> {
        if !self.session.is_authenticated() {
            return Err(TradeError::NotAuthenticated);
        }
        if quantity == 0 {
            return Err(TradeError::Rejected(
                "quantity must be a positive integer".to_string(),
            ));
        }

        let seq = self.ledger.issue();
        match self.api.trade(action, quantity).await {
            Ok(snapshot) => {
                if self.ledger.apply(seq, snapshot.into()) {
                    tracing::info!(?action, quantity, "Trade applied");
                }
                Ok(())
            }
            Err(TradeError::AuthExpired) => {
                self.session.mark_logged_out();
                Err(TradeError::AuthExpired)
            }
            Err(e) => Err(e),
        }
    }

    /// Seed the history with the current REST quote
    ///
    /// Bridges the gap before the first push tick arrives. Quotes for
    /// other symbols are ignored.
    pub async fn seed_quote(&mut self) -> anyhow::Result<()> {
        let quote = self.api.stock_info().await?;
        if self.session.is_authenticated() && quote.symbol == self.symbol {
            self.history.append(quote.price);
        }
        Ok(())
    }

    /// Project current state into a render model
    pub fn render(&self) -> RenderModel {
        view::project(
            self.session.session(),
            &self.history,
            self.ledger.portfolio(),
            self.feed_status,
            &self.symbol,
        )
    }
}
