pub mod ping;
pub mod render;
pub mod settings;

use crate::config::AppConfig;
use crate::settings::{FileSettingsStore, SettingsProvider, StaticSettings};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Settings store at `settings_path`, or the configured default location
pub(crate) fn file_store(settings_path: Option<PathBuf>) -> FileSettingsStore {
    let app_config = AppConfig::get_defaults();
    let path = settings_path.unwrap_or(app_config.settings.store_path);
    FileSettingsStore::new(path).with_default_base_url(app_config.service.default_base_url)
}

/// A `--server-url` flag bypasses the settings store entirely
pub(crate) fn settings_provider(
    server_url: Option<String>,
    settings_path: Option<PathBuf>,
) -> Arc<dyn SettingsProvider> {
    match server_url {
        Some(url) => {
            info!("Using decoding service at {} (command line)", url);
            Arc::new(StaticSettings::with_base_url(url))
        }
        None => {
            let store = file_store(settings_path);
            info!("Using settings from {}", store.path().display());
            Arc::new(store)
        }
    }
}
