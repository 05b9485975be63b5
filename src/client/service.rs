use crate::types::{AddressSet, DecodedEvent, TransactionContext};
use async_trait::async_trait;

/// Remote lookups needed to populate the panel.
///
/// Implementations log their own failures; `None` is the only failure signal
/// callers ever see.
#[async_trait]
pub trait DecodingService: Send + Sync {
    /// Addresses related to the transaction (`GET .../{tx}/{chain}/addresses`)
    async fn fetch_addresses(&self, context: &TransactionContext) -> Option<AddressSet>;

    /// Decoded events in service order (`GET .../{tx}/{chain}/decode`).
    ///
    /// `Some(vec![])` is a successful but empty answer.
    async fn fetch_decoded_events(
        &self,
        context: &TransactionContext,
        addresses: &AddressSet,
    ) -> Option<Vec<DecodedEvent>>;
}
