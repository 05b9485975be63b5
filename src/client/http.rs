use crate::client::DecodingService;
use crate::errors::{ClientError, ClientResult};
use crate::settings::SettingsProvider;
use crate::types::{
    AddressSet, DecodedEvent, EventEntry, PingResponse, ServiceEnvelope, ServiceErrorBody,
    TransactionContext,
};
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, info};

/// `{base}/{tx}/{chain}/addresses`
pub fn addresses_url(base_server_url: &str, context: &TransactionContext) -> String {
    format!(
        "{}/{}/{}/addresses",
        base_server_url,
        context.transaction_hash,
        context.chain.as_path_segment()
    )
}

/// `{base}/{tx}/{chain}/decode?related_addresses=a,b`
pub fn decode_url(
    base_server_url: &str,
    context: &TransactionContext,
    addresses: &AddressSet,
) -> String {
    format!(
        "{}/{}/{}/decode?related_addresses={}",
        base_server_url,
        context.transaction_hash,
        context.chain.as_path_segment(),
        addresses.to_query_value()
    )
}

/// HTTP client for the decoding service
pub struct DecodingClient {
    http: reqwest::Client,
    settings: Arc<dyn SettingsProvider>,
}

impl DecodingClient {
    pub fn new(settings: Arc<dyn SettingsProvider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
        }
    }

    /// Base URL as configured right now
    fn base_server_url(&self) -> ClientResult<String> {
        Ok(self.settings.current()?.base_server_url)
    }

    pub async fn try_fetch_addresses(
        &self,
        context: &TransactionContext,
    ) -> ClientResult<AddressSet> {
        let url = addresses_url(&self.base_server_url()?, context);
        let envelope: ServiceEnvelope<Vec<String>> = self.get_json(&url).await?;

        AddressSet::new(envelope.data).ok_or_else(|| ClientError::EmptyAddressSet {
            tx_hash: context.transaction_hash.clone(),
        })
    }

    pub async fn try_fetch_decoded_events(
        &self,
        context: &TransactionContext,
        addresses: &AddressSet,
    ) -> ClientResult<Vec<DecodedEvent>> {
        let url = decode_url(&self.base_server_url()?, context, addresses);
        let envelope: ServiceEnvelope<Vec<EventEntry>> = self.get_json(&url).await?;

        Ok(envelope.data.into_iter().map(|e| e.entry).collect())
    }

    /// Hit the service root and return its welcome message
    pub async fn ping(&self) -> ClientResult<String> {
        let base = self.base_server_url()?;
        let root = Url::parse(&base)
            .and_then(|url| url.join("/"))
            .map_err(|e| ClientError::Transport {
                url: base.clone(),
                message: format!("Invalid base URL: {}", e),
            })?;

        let response: PingResponse = self.get_json(root.as_str()).await?;
        Ok(response.message)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            // Error bodies are best-effort; the status alone is enough to fail
            let body = response.text().await.unwrap_or_default();
            let errors = serde_json::from_str::<ServiceErrorBody>(&body)
                .map(|b| b.errors)
                .unwrap_or_default();
            return Err(ClientError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                errors,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Deserialisation {
                url: url.to_string(),
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl DecodingService for DecodingClient {
    async fn fetch_addresses(&self, context: &TransactionContext) -> Option<AddressSet> {
        match self.try_fetch_addresses(context).await {
            Ok(addresses) => {
                info!(
                    "Fetched {} related addresses for {} on {}",
                    addresses.len(),
                    context.transaction_hash,
                    context.chain
                );
                Some(addresses)
            }
            Err(e) => {
                error!(
                    "An error occurred while fetching the info of transaction {}: {}",
                    context.transaction_hash, e
                );
                None
            }
        }
    }

    async fn fetch_decoded_events(
        &self,
        context: &TransactionContext,
        addresses: &AddressSet,
    ) -> Option<Vec<DecodedEvent>> {
        match self.try_fetch_decoded_events(context, addresses).await {
            Ok(events) => {
                info!(
                    "Fetched {} decoded events for {}",
                    events.len(),
                    context.transaction_hash
                );
                Some(events)
            }
            Err(e) => {
                error!(
                    "An error occurred while fetching decoded events of transaction {}: {}",
                    context.transaction_hash, e
                );
                None
            }
        }
    }
}
