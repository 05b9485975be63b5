//! Decoding service integration module
//!
//! - **Service** - `DecodingService`, the seam the panel pipeline awaits on
//! - **Http** - `DecodingClient`, the reqwest-backed implementation
//!
//! Both remote calls are single-attempt and fail fast: no retry, no backoff, no
//! timeout. Failures are logged here and surface to callers only as `None`.

pub mod http;
pub mod service;

// Re-export main types
pub use http::{addresses_url, decode_url, DecodingClient};
pub use service::DecodingService;
