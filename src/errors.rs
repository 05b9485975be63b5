use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Settings store operations
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Decoding service operations
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// Host page mutations
    #[error("Page error: {0}")]
    Page(#[from] PageError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Decoding service error types
#[derive(Error, Debug)]
pub enum ClientError {
    /// The settings store could not provide a base URL for the call
    #[error("Settings unavailable: {0}")]
    Settings(#[from] SettingsError),

    /// Request never produced an HTTP response (DNS, refused connection, TLS, etc.)
    #[error("Transport failure for {url}: {message}")]
    Transport { url: String, message: String },

    /// Service answered with a non-2xx status
    #[error("HTTP {status} from {url}: {}", .errors.join("; "))]
    Status {
        url: String,
        status: u16,
        errors: Vec<String>,
    },

    /// Response body did not match the expected envelope
    #[error("Deserialisation failed for {url}: {message}")]
    Deserialisation { url: String, message: String },

    /// Address lookup succeeded but returned no addresses
    #[error("No related addresses returned for transaction {tx_hash}")]
    EmptyAddressSet { tx_hash: String },
}

/// Settings store error types
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialise settings: {0}")]
    Serialise(#[from] toml::ser::Error),

    /// Custom server URLs must be absolute http(s) URLs ending in `/transactions`
    #[error("Invalid server URL: {url}")]
    InvalidServerUrl { url: String },

    #[error("Settings lock poisoned")]
    Poisoned,
}

/// Host page error types
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PageError {
    #[error("Container not found on page: {selector}")]
    ContainerMissing { selector: String },

    #[error("Unknown panel handle in {selector}")]
    UnknownPanel { selector: String },

    #[error("Invalid panel transition: {from} -> {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for decoding service calls
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type for settings store operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Result type for host page mutations
pub type PageResult<T> = Result<T, PageError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
