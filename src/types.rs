//! Decoded-events panel - Type System
//!
//! - `chain`: Supported chains, chain families and the per-page `TransactionContext`
//! - `events`: Decoded events, related-address sets and the service response envelopes

mod chain;
mod events;

pub use chain::*;
pub use events::*;
