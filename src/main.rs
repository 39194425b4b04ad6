use clap::Parser;
use tickersim::cli::{Cli, Commands};
use tickersim::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    tickersim::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Run(args) => {
            tracing::info!("Starting trading client");
            args.execute(&config).await?;
        }
        Commands::Register(args) => {
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  API: {}", config.api.base_url);
            println!("  Feed: {} ({})", config.feed.ws_url, config.feed.symbol);
            println!("  History capacity: {}", config.feed.history_capacity);
            println!("  Log level: {}", config.telemetry.log_level);
        }
    }

    Ok(())
}
