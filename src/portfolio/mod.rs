//! Portfolio module
//!
//! Server-authoritative balance/holdings plus the sequence gate that keeps
//! late trade responses from overwriting newer state.

mod ledger;
mod types;

pub use ledger::{Ledger, TradeSeq};
pub use types::{Portfolio, TradeAction, TradeError};
