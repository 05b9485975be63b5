//! Decoded events and the decoding service's JSON envelopes

use serde::{Deserialize, Deserializer, Serialize};

/// One semantically interpreted entry from a transaction's receipt logs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedEvent {
    pub event_type: String,
    #[serde(default)]
    pub event_subtype: Option<String>,
    /// Free text; may embed `0x`-prefixed 40-hex addresses
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,
}

impl DecodedEvent {
    pub fn new(event_type: &str, event_subtype: Option<&str>, notes: &str) -> Self {
        Self {
            event_type: event_type.to_string(),
            event_subtype: event_subtype.map(str::to_string),
            notes: notes.to_string(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Addresses related to a transaction, in the order the service returned them.
///
/// Never empty: the only constructor rejects an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressSet(Vec<String>);

impl AddressSet {
    pub fn new(addresses: Vec<String>) -> Option<Self> {
        if addresses.is_empty() {
            None
        } else {
            Some(Self(addresses))
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Comma-joined form used for the `related_addresses` query parameter
    pub fn to_query_value(&self) -> String {
        self.0.join(",")
    }
}

/// `{"data": ...}` success body
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceEnvelope<T> {
    pub data: T,
}

/// One element of the decode response's `data` array
#[derive(Debug, Clone, Deserialize)]
pub struct EventEntry {
    pub entry: DecodedEvent,
}

/// `{"errors": [...]}` body returned with non-2xx statuses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub errors: Vec<String>,
}

/// `{"message": ...}` body of the service root
#[derive(Debug, Clone, Deserialize)]
pub struct PingResponse {
    pub message: String,
}
