//! Register command implementation

use crate::api::{ApiClient, ApiClientConfig};
use crate::config::Config;
use crate::session::SessionStore;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Username for the new account
    #[arg(short, long)]
    pub username: String,

    /// Password for the new account
    #[arg(short, long)]
    pub password: String,
}

impl RegisterArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let api = Arc::new(ApiClient::new(ApiClientConfig::from(&config.api)));
        let store = SessionStore::new(api);

        store.register(&self.username, &self.password).await?;
        println!("User registered successfully. Please log in.");
        Ok(())
    }
}
