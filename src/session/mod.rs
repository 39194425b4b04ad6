//! Session module
//!
//! Identity lifecycle: register, login, logout. Session status gates
//! tick delivery and trading for the rest of the client.

mod store;
mod types;

pub use store::SessionStore;
pub use types::{AuthError, RegError, Session, SessionStatus, TradingMode};
