use crate::settings::DEFAULT_BASE_SERVER_URL;
use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from decodify.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub settings: SettingsConfig,
    pub service: ServiceDefaults,
}

/// Location of the persisted service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    pub store_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDefaults {
    pub default_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings: SettingsConfig {
                store_path: PathBuf::from("./decodify-settings.toml"),
            },
            service: ServiceDefaults {
                default_base_url: DEFAULT_BASE_SERVER_URL.to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from decodify.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();
        let config = Config::builder()
            .set_default(
                "settings.store_path",
                defaults.settings.store_path.to_string_lossy().to_string(),
            )?
            .set_default("service.default_base_url", defaults.service.default_base_url)?
            // Load from decodify.toml if it exists
            .add_source(File::with_name("decodify").required(false))
            // DECODIFY_SERVICE__DEFAULT_BASE_URL etc.
            .add_source(
                config::Environment::with_prefix("DECODIFY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        if let Ok(path) = env::var("DECODIFY_SETTINGS_PATH") {
            app_config.settings.store_path = PathBuf::from(path);
        }

        if app_config.service.default_base_url.is_empty() {
            return Err(ConfigError::Message(
                "service.default_base_url must not be empty".to_string(),
            ));
        }

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Self {
        Self::load().unwrap_or_default()
    }
}
