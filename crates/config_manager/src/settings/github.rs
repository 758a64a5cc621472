//! Target repository settings.

use serde::{Deserialize, Serialize};

/// The `[github]` table of the bot configuration.
///
/// Identifies the repository whose issues are scanned. The access token is not
/// part of the file; it is read from `GITHUB_TOKEN`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubSettings {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Alternate API base URL, e.g. for GitHub Enterprise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}
