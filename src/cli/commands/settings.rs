use crate::errors::AppResult;
use crate::settings::{ServiceConfig, SettingsProvider};
use clap::{ArgAction, Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Clone)]
pub enum SettingsAction {
    /// Print the current settings
    Show,
    /// Write default settings, keeping existing values
    Init,
    /// Set the custom decoding service URL (must end in /transactions)
    SetUrl { url: String },
    /// Enable or disable the custom decoding service
    UseCustom {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
}

#[derive(Args)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub action: SettingsAction,

    /// Settings file (overrides decodify.toml)
    #[arg(long, global = true)]
    pub settings_path: Option<PathBuf>,
}

impl SettingsCommand {
    pub fn run(&self) -> AppResult<()> {
        let store = super::file_store(self.settings_path.clone());

        let config = match &self.action {
            SettingsAction::Show => store.current()?,
            SettingsAction::Init => store.initialize()?,
            SettingsAction::SetUrl { url } => store.set_base_server_url(url)?,
            SettingsAction::UseCustom { enabled } => store.set_use_custom_server(*enabled)?,
        };

        print_settings(&store.path().display().to_string(), &config);
        Ok(())
    }
}

fn print_settings(path: &str, config: &ServiceConfig) {
    println!("Settings file:      {}", path);
    println!("Use custom server:  {}", config.use_custom_server);
    println!("Base server URL:    {}", config.base_server_url);
}
