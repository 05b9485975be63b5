//! Decoded transaction events for EVM block explorer pages
//!

pub mod cli;
pub mod client;
pub mod config;
pub mod context;
pub mod errors;
pub mod page;
pub mod panel;
pub mod presentation;
pub mod settings;
pub mod types;
