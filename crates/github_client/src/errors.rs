//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when listing issues and
//! resolving user profiles through the GitHub REST API.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::Error;
///
/// match client.list_issues(IssueStateFilter::All, 30, 1).await {
///     Ok(issues) => println!("Fetched {} issues", issues.len()),
///     Err(Error::RateLimitExceeded) => eprintln!("Rate limit exceeded, retry later"),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// GitHub answered with a non-success status that has no dedicated variant.
    #[error("API request failed with status {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Authentication or GitHub client initialization failure.
    ///
    /// The contained string provides specific details about the failure.
    #[error("Authentication failed: {0}")]
    AuthError(String),

    /// Error deserializing the response from GitHub.
    #[error("Failed to deserialize GitHub response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The request never produced a usable response (transport failure,
    /// malformed body, invalid URI).
    #[error("Invalid response format")]
    InvalidResponse,

    /// The requested resource was not found.
    ///
    /// Returned when a GitHub API request answers with a 404 status code.
    #[error("Resource not found")]
    NotFound,

    /// GitHub API rate limit has been exceeded.
    ///
    /// Retrying is the caller's decision; this crate never retries.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}
