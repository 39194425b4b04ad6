//! Portfolio ledger with stale-response protection
//!
//! Every outgoing trade request is tagged with a monotonically increasing
//! sequence number. A response is admitted only if its sequence number is
//! higher than the last one applied, so responses land in request-issue
//! order even when the network reorders them, and responses that straddle
//! a logout are dropped on the floor.

use super::types::Portfolio;

/// Sequence number tagged onto one outgoing trade request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TradeSeq(u64);

/// Pure ledger state: the current portfolio plus the sequence gate
///
/// Does no I/O of its own; the app issues a sequence number before each
/// request and feeds the response back through [`Ledger::apply`].
#[derive(Debug, Clone)]
pub struct Ledger {
    portfolio: Option<Portfolio>,
    next_seq: u64,
    last_applied: u64,
}

impl Ledger {
    /// Empty ledger with no portfolio
    pub fn new() -> Self {
        Self {
            portfolio: None,
            next_seq: 1,
            last_applied: 0,
        }
    }

    /// Currently held portfolio, if any
    pub fn portfolio(&self) -> Option<&Portfolio> {
        self.portfolio.as_ref()
    }

    /// Install the login snapshot
    ///
    /// Any trade request still outstanding from a previous session becomes
    /// stale: its response can no longer pass the gate.
    pub fn adopt(&mut self, portfolio: Portfolio) {
        self.last_applied = self.next_seq - 1;
        self.portfolio = Some(portfolio);
    }

    /// Tag the next outgoing trade request
    pub fn issue(&mut self) -> TradeSeq {
        let seq = TradeSeq(self.next_seq);
        self.next_seq += 1;
        seq
    }

    /// Admit a trade response
    ///
    /// Returns `true` and replaces the portfolio wholesale when the
    /// response is newer than the last one applied; returns `false` and
    /// leaves state untouched when it is stale.
    pub fn apply(&mut self, seq: TradeSeq, portfolio: Portfolio) -> bool {
        if seq.0 <= self.last_applied {
            tracing::debug!(seq = seq.0, last_applied = self.last_applied, "Discarding stale trade response");
            return false;
        }
        self.last_applied = seq.0;
        self.portfolio = Some(portfolio);
        true
    }

    /// Drop the portfolio and invalidate all outstanding requests
    ///
    /// Called on logout so an in-flight response arriving afterwards is
    /// silently discarded instead of resurrecting the old user's state.
    pub fn clear(&mut self) {
        self.portfolio = None;
        self.last_applied = self.next_seq - 1;
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
