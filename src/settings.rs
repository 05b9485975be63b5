//! Service settings store
//!
//! Holds the decoding service base URL and whether a custom server is in use.
//! The decoding client reads the current values through [`SettingsProvider`]
//! immediately before every remote call, so a change made mid-flow is picked up
//! by the next call.

use crate::errors::{SettingsError, SettingsResult};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, info};

/// Hosted decoding service used unless a custom server is configured
pub const DEFAULT_BASE_SERVER_URL: &str = "https://decodify.hop.sh/transactions";

/// Path every custom server URL must end with
const REQUIRED_SERVER_PATH: &str = "/transactions";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub use_custom_server: bool,
    pub base_server_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            use_custom_server: false,
            base_server_url: DEFAULT_BASE_SERVER_URL.to_string(),
        }
    }
}

/// Partially-populated settings as stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    use_custom_server: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_server_url: Option<String>,
}

impl StoredSettings {
    fn merged_over_defaults(self, default_base_url: &str) -> ServiceConfig {
        ServiceConfig {
            use_custom_server: self.use_custom_server.unwrap_or(false),
            base_server_url: self
                .base_server_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| default_base_url.to_string()),
        }
    }
}

/// Read-through access to the current service settings
pub trait SettingsProvider: Send + Sync {
    fn current(&self) -> SettingsResult<ServiceConfig>;
}

/// Accept only absolute http(s) URLs whose path is exactly `/transactions`
pub fn validate_server_url(candidate: &str) -> SettingsResult<()> {
    let invalid = || SettingsError::InvalidServerUrl {
        url: candidate.to_string(),
    };
    let url = Url::parse(candidate).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.path() != REQUIRED_SERVER_PATH {
        return Err(invalid());
    }
    Ok(())
}

/// TOML-file backed settings, re-read from disk on every access
pub struct FileSettingsStore {
    path: PathBuf,
    default_base_url: String,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            default_base_url: DEFAULT_BASE_SERVER_URL.to_string(),
        }
    }

    /// Use a different hosted service as the fallback URL
    pub fn with_default_base_url(mut self, url: impl Into<String>) -> Self {
        self.default_base_url = url.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_stored(&self) -> SettingsResult<StoredSettings> {
        if !self.path.exists() {
            debug!("No settings file at {}, using defaults", self.path.display());
            return Ok(StoredSettings::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&raw)?)
    }

    fn write(&self, config: &ServiceConfig) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, toml::to_string(config)?)?;
        Ok(())
    }

    /// Seed defaults, keeping any values already present in the file
    pub fn initialize(&self) -> SettingsResult<ServiceConfig> {
        let config = self
            .read_stored()?
            .merged_over_defaults(&self.default_base_url);
        self.write(&config)?;
        info!("Default values for settings set at {}", self.path.display());
        Ok(config)
    }

    pub fn set_base_server_url(&self, url: &str) -> SettingsResult<ServiceConfig> {
        validate_server_url(url)?;
        let mut config = self.current()?;
        config.base_server_url = url.to_string();
        self.write(&config)?;
        info!("Updated base server URL to {}", url);
        Ok(config)
    }

    /// Toggle the custom server. Turning it off restores the hosted service URL.
    pub fn set_use_custom_server(&self, enabled: bool) -> SettingsResult<ServiceConfig> {
        let mut config = self.current()?;
        config.use_custom_server = enabled;
        if !enabled {
            config.base_server_url = self.default_base_url.clone();
        }
        self.write(&config)?;
        info!("Updated use_custom_server to {}", enabled);
        Ok(config)
    }
}

impl SettingsProvider for FileSettingsStore {
    fn current(&self) -> SettingsResult<ServiceConfig> {
        Ok(self
            .read_stored()?
            .merged_over_defaults(&self.default_base_url))
    }
}

/// In-memory settings that can be swapped at any time
#[derive(Debug, Default)]
pub struct StaticSettings {
    config: RwLock<ServiceConfig>,
}

impl StaticSettings {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// Custom server pointing at `base_server_url`
    pub fn with_base_url(base_server_url: impl Into<String>) -> Self {
        Self::new(ServiceConfig {
            use_custom_server: true,
            base_server_url: base_server_url.into(),
        })
    }

    pub fn set_base_server_url(&self, url: impl Into<String>) -> SettingsResult<()> {
        let mut config = self.config.write().map_err(|_| SettingsError::Poisoned)?;
        config.base_server_url = url.into();
        Ok(())
    }
}

impl SettingsProvider for StaticSettings {
    fn current(&self) -> SettingsResult<ServiceConfig> {
        self.config
            .read()
            .map(|config| config.clone())
            .map_err(|_| SettingsError::Poisoned)
    }
}
