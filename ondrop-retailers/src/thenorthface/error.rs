//! The North Face-specific errors.

use thiserror::Error;

/// The North Face-specific errors.
#[derive(Debug, Error)]
pub enum TheNorthFaceError {
    /// The inventory body is not a JSON object.
    #[error("Invalid response: expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// The inventory object has an unexpected shape.
    #[error("Invalid inventory payload: {0}")]
    InvalidPayload(String),
}
