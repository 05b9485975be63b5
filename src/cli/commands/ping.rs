use crate::client::DecodingClient;
use crate::errors::{AppError, AppResult};
use crate::settings::SettingsProvider;
use clap::Args;
use std::path::PathBuf;
use tracing::{error, info};

/// Check decoding service connectivity
#[derive(Args)]
pub struct PingCommand {
    /// Decoding service base URL (overrides the settings store)
    #[arg(long)]
    pub server_url: Option<String>,

    /// Settings file (overrides decodify.toml)
    #[arg(long)]
    pub settings_path: Option<PathBuf>,
}

impl PingCommand {
    pub async fn run(&self) -> AppResult<()> {
        info!("=== Testing Decoding Service Connection ===");

        let settings =
            super::settings_provider(self.server_url.clone(), self.settings_path.clone());
        let base_url = settings.current()?.base_server_url;
        let client = DecodingClient::new(settings);

        match client.ping().await {
            Ok(message) => {
                println!("Decoding service at {} is reachable", base_url);
                println!("Service says: {}", message);
                Ok(())
            }
            Err(e) => {
                error!("Decoding service ping failed: {}", e);
                println!("Decoding service connection test FAILED");
                println!("Error: {}", e);
                println!("\nTroubleshooting tips:");
                println!("1. Check that the service is running");
                println!("2. Verify the base URL ends in /transactions");
                Err(AppError::Client(e))
            }
        }
    }
}
