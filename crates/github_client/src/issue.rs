//! Issue domain types.
//!
//! The issues listing endpoint returns open and closed issues (and pull
//! requests, which GitHub models as issues) in one array. Every entry is
//! deserialized into the single [`Issue`] record below, so callers never need
//! to reinterpret the response.

use serde::{Deserialize, Serialize};

use crate::{Label, User};

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;

/// State of a single issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

/// State filter accepted by the issues listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStateFilter {
    Open,
    Closed,
    #[default]
    All,
}

impl IssueStateFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStateFilter::Open => "open",
            IssueStateFilter::Closed => "closed",
            IssueStateFilter::All => "all",
        }
    }
}

impl std::fmt::Display for IssueStateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker present on entries that are actually pull requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestLink {
    #[serde(default)]
    pub url: Option<String>,
}

/// An issue snapshot as returned by the issues listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub number: u64,
    #[serde(default)]
    pub title: String,
    pub state: IssueState,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub assignee: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequestLink>,
}

impl Issue {
    /// Returns true if this entry is a pull request rather than an issue.
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// Query string for `GET /repos/{owner}/{repo}/issues`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ListIssuesParams {
    pub state: IssueStateFilter,
    pub per_page: u8,
    pub page: u32,
}
