//! Core error types for `OnDrop`.

use thiserror::Error;

/// Core error type for `OnDrop` operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Store identifier did not match any known retailer.
    #[error("Unknown store: {0}")]
    UnknownStore(String),

    /// Store is known but turned off in the configuration.
    #[error("Store disabled: {0}")]
    StoreDisabled(String),
}
