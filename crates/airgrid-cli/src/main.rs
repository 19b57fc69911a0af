mod analyze;
mod fetch;

use airgrid_core::{AppConfig, ConfigError};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::analyze::AnalyzeArgs;
use crate::fetch::FetchArgs;

#[derive(Debug, Parser)]
#[command(name = "airgrid", version)]
#[command(about = "Fetch flight offers across a date range and rank them by price and duration")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch offers for every date in a range and save them to CSV
    #[command(visible_alias = "flight_fetch")]
    Fetch(FetchArgs),
    /// Rank saved offers by weighted price and duration
    #[command(visible_alias = "flight_analysis")]
    Analyze(AnalyzeArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(airgrid_core::log_level_from_env()))
        .unwrap_or_else(|_| EnvFilter::new(airgrid_core::config::DEFAULT_LOG_LEVEL));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli, airgrid_core::load_app_config).await
}

/// Dispatches a parsed command. Network settings are loaded only for `fetch`;
/// `analyze` works offline on a saved table.
async fn run<F>(cli: Cli, load_config: F) -> anyhow::Result<()>
where
    F: FnOnce() -> Result<AppConfig, ConfigError>,
{
    match cli.command {
        Commands::Fetch(args) => {
            let config = load_config()?;
            tracing::debug!(?config, "loaded configuration");
            fetch::run_fetch(&config, args).await
        }
        Commands::Analyze(args) => analyze::run_analyze(&args),
    }
}
