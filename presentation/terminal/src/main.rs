use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod config;
mod setup;

use cli::Cli;
use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, session::Session};

/// Food details terminal entry point
///
/// Loads configuration, wires the REST adapters into the screen controller
/// and runs the interactive session.
///
/// - config/: Application configuration (backend API, currency)
/// - setup/: Dependency injection, navigation host and the command loop
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Parse arguments and load configuration
    let cli = Cli::parse();
    let config = AppConfig::from_env().with_api_url(cli.api_url.clone());

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 5. Run the screen
    Session::run(container, cli.route()).await?;

    Ok(())
}
