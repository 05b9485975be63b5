//! Page context resolution
//!
//! Derives the transaction being viewed from the hosting page's location.
//! Unsupported hosts resolve to `None` and the whole pipeline becomes a no-op.

use crate::errors::{AppError, AppResult};
use crate::types::{Chain, TransactionContext};
use reqwest::Url;

/// Hostname and path of the page the panel would be injected into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub hostname: String,
    pub path: String,
}

impl PageLocation {
    pub fn new(hostname: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            path: path.into(),
        }
    }

    /// Split a full page URL into hostname and path
    pub fn parse(page_url: &str) -> AppResult<Self> {
        let url = Url::parse(page_url)
            .map_err(|e| AppError::InvalidData(format!("Invalid page URL {}: {}", page_url, e)))?;
        let hostname = url
            .host_str()
            .ok_or_else(|| AppError::InvalidData(format!("Page URL has no host: {}", page_url)))?;
        Ok(Self::new(hostname, url.path()))
    }

    pub fn resolve(&self) -> Option<TransactionContext> {
        resolve(&self.hostname, &self.path)
    }
}

/// Resolve `(transaction hash, chain)` from a hostname and path.
///
/// The hash is the second `/`-delimited segment of the path (`/tx/<hash>`),
/// taken verbatim. No format validation happens here; a missing segment
/// yields an empty hash.
pub fn resolve(hostname: &str, path: &str) -> Option<TransactionContext> {
    let chain = Chain::from_host(hostname)?;
    let transaction_hash = path.split('/').nth(2).unwrap_or_default();
    Some(TransactionContext::new(transaction_hash, chain))
}
