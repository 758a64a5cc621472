use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the bounty analytics CLI.
///
/// Each variant wraps the error of the crate that raised it, so the message
/// printed on exit names the failing stage.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file or a required environment variable was unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] config_manager::ConfigurationError),

    /// The GitHub client could not be created.
    #[error("GitHub client error: {0}")]
    GitHub(#[from] github_client::Error),

    /// The profile store could not be created.
    #[error("Profile store error: {0}")]
    Store(#[from] profile_store::StoreError),

    /// The analytics run failed.
    #[error("Analytics failed: {0}")]
    Analytics(#[from] analytics_core::AnalyticsError),

    /// Command output could not be serialized.
    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}
