//! Fetch error types.

use thiserror::Error;

// ============================================================================
// Main Fetch Error
// ============================================================================

/// Error type for transport operations.
///
/// Inside the lookup pipeline these never propagate: the request step stores
/// their description on the working record instead.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed (connection, timeout, reading the body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP status {status} for {url}")]
    Status {
        /// Status code returned by the server.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Header name or value could not be sent.
    #[error("Invalid header {name}: {reason}")]
    InvalidHeader {
        /// Header name.
        name: String,
        /// Why the header was rejected.
        reason: String,
    },

    /// Domain not allowed.
    #[error("Domain not allowed: {0}")]
    DomainNotAllowed(String),

    /// The request step ran before a URL was prepared.
    #[error("No request prepared")]
    MissingRequest,
}
