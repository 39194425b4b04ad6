//! HTTP client for the trading service REST API

use super::types::{ErrorBody, LoginRequest, PortfolioSnapshot, PriceQuote, RegisterRequest};
use crate::portfolio::{TradeAction, TradeError};
use crate::session::{AuthError, RegError};
use reqwest::{Client, RequestBuilder, StatusCode};
use std::sync::RwLock;
use std::time::Duration;

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL of the trading service
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl ApiClientConfig {
    /// Create a config with the default 10s timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl From<&crate::config::ApiConfig> for ApiClientConfig {
    fn from(config: &crate::config::ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

/// Client for the trading service's REST endpoints
///
/// Credential transport is a cookie jar plus an optional opaque bearer
/// token; the session store installs the token after login and clears it
/// on logout.
pub struct ApiClient {
    config: ApiClientConfig,
    client: Client,
    credential: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: ApiClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            client,
            credential: RwLock::new(None),
        }
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Install or clear the opaque session credential
    pub fn set_credential(&self, credential: Option<String>) {
        let mut guard = self.credential.write().unwrap_or_else(|e| e.into_inner());
        *guard = credential;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Attach the bearer credential when one is installed
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let credential = {
            let guard = self.credential.read().unwrap_or_else(|e| e.into_inner());
            guard.clone()
        };
        match credential {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Extract the server's rejection message, falling back to the status
    async fn rejection_message(response: reqwest::Response) -> String {
        let fallback = format!("HTTP {}", response.status());
        match response.json::<ErrorBody>().await {
            Ok(body) if !body.message.is_empty() => body.message,
            _ => fallback,
        }
    }

    /// Register a new identity
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), RegError> {
        let response = self
            .client
            .post(self.url("/api/register"))
            .json(request)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(RegError::Rejected(Self::rejection_message(response).await))
        }
    }

    /// Authenticate and return the initial portfolio snapshot
    pub async fn login(&self, request: &LoginRequest) -> Result<PortfolioSnapshot, AuthError> {
        tracing::debug!(username = %request.username, mode = %request.mode, "Logging in");

        let response = self
            .client
            .post(self.url("/api/login"))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::Rejected(Self::rejection_message(response).await));
        }

        let snapshot: PortfolioSnapshot = response.json().await?;
        Ok(snapshot)
    }

    /// End the server-side session
    pub async fn logout(&self) -> Result<(), AuthError> {
        let response = self
            .authorize(self.client.post(self.url("/api/logout")))
            .json(&serde_json::json!({}))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AuthError::Rejected(Self::rejection_message(response).await))
        }
    }

    /// Submit a buy or sell and return the resulting snapshot
    pub async fn trade(
        &self,
        action: TradeAction,
        quantity: u32,
    ) -> Result<PortfolioSnapshot, TradeError> {
        let response = self
            .authorize(self.client.post(self.url(action.endpoint())))
            .json(&serde_json::json!({ "quantity": quantity }))
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let snapshot: PortfolioSnapshot = response.json().await?;
                Ok(snapshot)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(TradeError::AuthExpired),
            _ => Err(TradeError::Rejected(Self::rejection_message(response).await)),
        }
    }

    /// Fetch the current quote
    pub async fn stock_info(&self) -> anyhow::Result<PriceQuote> {
        let response = self.client.get(self.url("/api/stock/info")).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Quote request failed: HTTP {}", response.status());
        }

        let quote: PriceQuote = response.json().await?;
        Ok(quote)
    }
}
