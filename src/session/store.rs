//! Session store
//!
//! Owns the current session and drives its transitions through the REST
//! API. Registration is a separate identity-space operation and never
//! touches session state.

use super::types::{AuthError, RegError, Session, SessionStatus, TradingMode};
use crate::api::{ApiClient, LoginRequest, PortfolioSnapshot, RegisterRequest};
use std::sync::Arc;

/// Holds the current session and performs auth operations
pub struct SessionStore {
    api: Arc<ApiClient>,
    session: Session,
}

impl SessionStore {
    /// Create a store with a fresh anonymous session
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            session: Session::new(),
        }
    }

    /// Current session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Authenticate and return the initial portfolio snapshot
    ///
    /// Real-time mode parameters are validated before any network call.
    /// On rejection the session resets to anonymous.
    pub async fn login(
        &mut self,
        identity: &str,
        credential: &str,
        mode: &TradingMode,
    ) -> Result<PortfolioSnapshot, AuthError> {
        let (api_key, api_url) = match mode {
            TradingMode::Simulation => (None, None),
            TradingMode::RealTime { api_key, api_url } => {
                if api_key.is_empty() {
                    return Err(AuthError::MissingModeParam("API key"));
                }
                if api_url.is_empty() {
                    return Err(AuthError::MissingModeParam("API URL"));
                }
                (Some(api_key.clone()), Some(api_url.clone()))
            }
        };

        self.session.status = SessionStatus::Authenticating;

        let request = LoginRequest {
            username: identity.to_string(),
            password: credential.to_string(),
            mode: mode.as_str().to_string(),
            api_key,
            api_url,
        };

        match self.api.login(&request).await {
            Ok(snapshot) => {
                self.session.identity = Some(identity.to_string());
                self.session.credential = snapshot.token.clone();
                self.session.status = SessionStatus::Authenticated;
                self.api.set_credential(snapshot.token.clone());
                tracing::info!(identity, "Logged in");
                Ok(snapshot)
            }
            Err(e) => {
                self.session = Session::new();
                tracing::warn!(identity, error = %e, "Login failed");
                Err(e)
            }
        }
    }

    /// Register a new identity
    ///
    /// Empty fields are rejected client-side; a duplicate identity is a
    /// server rejection. Has no effect on the current session.
    pub async fn register(&self, identity: &str, credential: &str) -> Result<(), RegError> {
        if identity.is_empty() {
            return Err(RegError::EmptyIdentity);
        }
        if credential.is_empty() {
            return Err(RegError::EmptyCredential);
        }

        let request = RegisterRequest {
            username: identity.to_string(),
            password: credential.to_string(),
        };
        self.api.register(&request).await?;
        tracing::info!(identity, "Registered");
        Ok(())
    }

    /// End the session
    ///
    /// The local session resets to anonymous and the stored credential is
    /// cleared whatever the server answers; a previous user's identity must
    /// never leak into the next session's view.
    pub async fn logout(&mut self) -> Result<(), AuthError> {
        let result = self.api.logout().await;
        self.session = Session::new();
        self.api.set_credential(None);
        if let Err(ref e) = result {
            tracing::warn!(error = %e, "Server logout failed; local session cleared anyway");
        } else {
            tracing::info!("Logged out");
        }
        result
    }

    /// Demote an authenticated session whose credential the server rejected
    pub fn mark_logged_out(&mut self) {
        self.session.status = SessionStatus::LoggedOut;
        self.session.credential = None;
        self.api.set_credential(None);
    }
}
