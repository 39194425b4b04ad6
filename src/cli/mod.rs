//! CLI interface for tickersim
//!
//! Provides subcommands for:
//! - `run`: log in and trade interactively against the live feed
//! - `register`: create a new account
//! - `config`: show the loaded configuration

mod register;
mod run;

pub use register::RegisterArgs;
pub use run::RunArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tickersim")]
#[command(about = "Client for a simulated single-symbol stock trading service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and trade interactively
    Run(RunArgs),
    /// Register a new account
    Register(RegisterArgs),
    /// Show the loaded configuration
    Config,
}
