//! Host APIs for `OnDrop` lookups.
//!
//! - [`http`] - HTTP transport with tracing and domain allowlist

pub mod http;

// Re-export key types
pub use http::{HttpClient, Transport};
