//! Error types for profile persistence.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors raised while persisting profiles.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid store URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Request to profile store failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Profile store rejected the request ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
