use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Decoded transaction events for block explorer pages
#[derive(Parser)]
#[command(name = "decodify")]
#[command(about = "Decoded transaction events for block explorer pages")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Render the decoded events panel for an explorer transaction page
    Render(commands::render::RenderCommand),
    /// Check that the decoding service is reachable
    Ping(commands::ping::PingCommand),
    /// Show or change the decoding service settings
    Settings(commands::settings::SettingsCommand),
}

pub async fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render(command) => command.run().await,
        Commands::Ping(command) => command.run().await,
        Commands::Settings(command) => command.run(),
    }
}
