//! Run command implementation
//!
//! Logs in, subscribes to the price feed, and drives a select loop over
//! feed events and stdin trade commands.

use crate::api::{ApiClient, ApiClientConfig};
use crate::app::App;
use crate::config::Config;
use crate::feed::{FeedEvent, PriceFeed, TickerFeed};
use crate::portfolio::TradeAction;
use crate::session::TradingMode;
use crate::view::RenderModel;
use clap::Args;
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Username to log in with
    #[arg(short, long)]
    pub username: String,

    /// Password to log in with
    #[arg(short, long)]
    pub password: String,

    /// Trading mode: "simulation" or "real-time"
    #[arg(long, default_value = "simulation")]
    pub mode: String,

    /// API key (real-time mode only)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Quote API URL (real-time mode only)
    #[arg(long)]
    pub api_url: Option<String>,
}

impl RunArgs {
    fn trading_mode(&self) -> anyhow::Result<TradingMode> {
        match self.mode.as_str() {
            "simulation" => Ok(TradingMode::Simulation),
            "real-time" => Ok(TradingMode::RealTime {
                api_key: self.api_key.clone().unwrap_or_default(),
                api_url: self.api_url.clone().unwrap_or_default(),
            }),
            other => anyhow::bail!("Unknown trading mode: {other}"),
        }
    }

    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let api = Arc::new(ApiClient::new(ApiClientConfig::from(&config.api)));
        let mut app = App::new(
            api,
            config.feed.symbol.clone(),
            config.feed.history_capacity,
        );

        let mode = self.trading_mode()?;
        app.login(&self.username, &self.password, &mode).await?;

        if let Err(e) = app.seed_quote().await {
            tracing::warn!(error = %e, "Could not fetch initial quote");
        }

        let feed = TickerFeed::new(&config.feed);
        let mut subscription = feed.subscribe().await?;

        println!("Commands: buy, sell, show, quit");
        print_model(&app.render());

        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        loop {
            tokio::select! {
                event = subscription.next_event() => {
                    match event {
                        Some(event) => {
                            let disconnected = matches!(event, FeedEvent::Disconnected);
                            app.on_feed_event(event);
                            if disconnected {
                                print_model(&app.render());
                            }
                        }
                        None => {
                            tracing::warn!("Feed channel closed");
                            break;
                        }
                    }
                }
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    match line.trim() {
                        "buy" => report_trade(&mut app, TradeAction::Buy).await,
                        "sell" => report_trade(&mut app, TradeAction::Sell).await,
                        "show" => print_model(&app.render()),
                        "quit" => break,
                        "" => {}
                        other => println!("Unknown command: {other}"),
                    }
                }
            }
        }

        subscription.release();
        if let Err(e) = app.logout().await {
            tracing::warn!(error = %e, "Logout failed");
        }
        Ok(())
    }
}

async fn report_trade(app: &mut App, action: TradeAction) {
    match app.trade(action, 1).await {
        Ok(()) => print_model(&app.render()),
        Err(e) => println!("{e}"),
    }
}

fn print_model(model: &RenderModel) {
    if let Some(greeting) = &model.greeting {
        println!("{greeting}");
    }
    if let Some(price) = &model.price_line {
        println!("{price}");
    }
    if let Some(balance) = &model.balance_line {
        println!("{balance}");
    }
    if let Some(holdings) = &model.holdings_line {
        println!("{holdings}");
    }
    if let Some(notice) = &model.feed_notice {
        println!("! {notice}");
    }
}
