//! Chains recognised on explorer pages
//!
//! Only three explorer hosts are supported. Each maps to exactly one chain, and
//! each chain belongs to one of two presentation families.

use serde::{Deserialize, Serialize};

/// Chain identity as used in the decoding service path (`/{tx}/{chain}/...`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chain {
    Ethereum,
    Optimism,
    PolygonPos,
}

/// Grouping of chains that share the same host-page conventions and icon style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainFamily {
    Ethereum,
    OptimismOrPolygon,
}

impl Chain {
    pub const ALL: [Chain; 3] = [Chain::Ethereum, Chain::Optimism, Chain::PolygonPos];

    /// Map an explorer hostname to its chain. Matching is exact.
    pub fn from_host(hostname: &str) -> Option<Self> {
        match hostname {
            "etherscan.io" => Some(Chain::Ethereum),
            "optimistic.etherscan.io" => Some(Chain::Optimism),
            "polygonscan.com" => Some(Chain::PolygonPos),
            _ => None,
        }
    }

    /// Hostname of the explorer this chain is served from
    pub fn explorer_host(&self) -> &'static str {
        match self {
            Chain::Ethereum => "etherscan.io",
            Chain::Optimism => "optimistic.etherscan.io",
            Chain::PolygonPos => "polygonscan.com",
        }
    }

    /// Path segment sent to the decoding service
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            Chain::Ethereum => "ethereum",
            Chain::Optimism => "optimism",
            Chain::PolygonPos => "polygon_pos",
        }
    }

    pub fn family(&self) -> ChainFamily {
        match self {
            Chain::Ethereum => ChainFamily::Ethereum,
            Chain::Optimism | Chain::PolygonPos => ChainFamily::OptimismOrPolygon,
        }
    }

    /// Base URL of the explorer's address pages (no trailing slash)
    pub fn address_base_url(&self) -> String {
        format!("https://{}/address", self.explorer_host())
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_path_segment())
    }
}

impl std::str::FromStr for Chain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ethereum" => Ok(Chain::Ethereum),
            "optimism" => Ok(Chain::Optimism),
            "polygon_pos" => Ok(Chain::PolygonPos),
            _ => Err(format!("Unsupported chain: {}", s)),
        }
    }
}

/// Transaction being viewed on the current page. Built once per page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionContext {
    pub transaction_hash: String,
    pub chain: Chain,
}

impl TransactionContext {
    pub fn new(transaction_hash: impl Into<String>, chain: Chain) -> Self {
        Self {
            transaction_hash: transaction_hash.into(),
            chain,
        }
    }
}
