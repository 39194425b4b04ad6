//! Session types and authentication errors

use thiserror::Error;

/// Lifecycle status of the client session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No identity established (initial state, also after logout)
    Anonymous,
    /// Login request in flight
    Authenticating,
    /// Identity established, trading and tick delivery enabled
    Authenticated,
    /// Server rejected the session's credential mid-session
    LoggedOut,
}

/// Client session: identity plus opaque credential
#[derive(Debug, Clone)]
pub struct Session {
    /// Username, present once authenticated
    pub identity: Option<String>,
    /// Opaque credential returned by the server (bearer transport);
    /// absent when the server uses cookie transport only
    pub credential: Option<String>,
    pub status: SessionStatus,
}

impl Session {
    /// Fresh anonymous session
    pub fn new() -> Self {
        Self {
            identity: None,
            credential: None,
            status: SessionStatus::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Trading mode selected at login
///
/// Explicit enumeration: the mode is passed through configuration or CLI,
/// never inferred from ambient environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradingMode {
    /// Server-side simulated prices
    Simulation,
    /// Prices proxied from an external quote API
    RealTime { api_key: String, api_url: String },
}

impl TradingMode {
    /// Wire name of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            TradingMode::Simulation => "simulation",
            TradingMode::RealTime { .. } => "real-time",
        }
    }
}

/// Authentication errors (login/logout)
#[derive(Debug, Error)]
pub enum AuthError {
    /// Server rejected the credentials
    #[error("login rejected: {0}")]
    Rejected(String),
    /// Real-time mode selected without a required parameter
    #[error("missing {0} for real-time mode")]
    MissingModeParam(&'static str),
    /// Transport-level failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Registration errors
#[derive(Debug, Error)]
pub enum RegError {
    #[error("username must not be empty")]
    EmptyIdentity,
    #[error("password must not be empty")]
    EmptyCredential,
    /// Server rejected the registration (e.g., duplicate username)
    #[error("registration rejected: {0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
