//! Error types for the analytics pipeline.
//!
//! Every failure is fatal to the run: a failed page fetch aborts the scan, and
//! a single failed lookup or upsert aborts the whole aggregation batch.
//! Classification itself cannot fail.

use profile_store::StoreError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that abort an analytics run.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Failed to fetch issues page {page}: {source}")]
    IssueFetch {
        page: u32,
        source: github_client::Error,
    },

    #[error("Failed to resolve profile for '{login}': {source}")]
    ProfileLookup {
        login: String,
        source: github_client::Error,
    },

    #[error("Failed to persist profile '{login}': {source}")]
    ProfilePersist { login: String, source: StoreError },
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
