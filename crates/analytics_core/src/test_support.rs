//! Mock collaborators shared by the pipeline tests.

use async_trait::async_trait;
use config_manager::{LabelCatalogEntry, PriceConfig};
use github_client::{
    Error as GitHubError, Issue, IssueClient, IssueState, IssueStateFilter, Label, User,
    UserProfile,
};
use profile_store::{ProfileStore, StoreError, StoreResult};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Shared, ordered record of collaborator calls.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn price_config() -> PriceConfig {
    PriceConfig {
        time_labels: vec![
            LabelCatalogEntry::new("Time: <1 Hour"),
            LabelCatalogEntry::new("Time: 1 Day"),
        ],
        priority_labels: vec![
            LabelCatalogEntry::new("Priority: 1 (Normal)"),
            LabelCatalogEntry::new("Priority: High"),
        ],
    }
}

pub fn issue(number: u64, labels: &[&str], assignee: Option<&str>) -> Issue {
    Issue {
        id: 10_000 + number,
        number,
        title: format!("Issue {number}"),
        state: if number % 2 == 0 {
            IssueState::Closed
        } else {
            IssueState::Open
        },
        labels: labels.iter().map(|n| Label::new(*n)).collect(),
        assignee: assignee.map(|login| User {
            id: number,
            login: login.to_string(),
        }),
        pull_request: None,
    }
}

pub fn bounty(number: u64, assignee: Option<&str>) -> Issue {
    issue(number, &["Time: 1 Day", "Priority: High"], assignee)
}

pub fn plain(number: u64, assignee: Option<&str>) -> Issue {
    issue(number, &["bug"], assignee)
}

/// Issue client serving pre-built pages and profiles.
#[derive(Default)]
pub struct MockIssueClient {
    pub pages: Vec<Vec<Issue>>,
    pub fail_on_page: Option<u32>,
    pub missing_logins: HashSet<String>,
    pub failing_logins: HashSet<String>,
    pub calls: CallLog,
}

impl MockIssueClient {
    pub fn with_pages(pages: Vec<Vec<Issue>>) -> Self {
        Self {
            pages,
            ..Default::default()
        }
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.calls_with_prefix("list:")
            .iter()
            .filter_map(|c| c.parse().ok())
            .collect()
    }

    pub fn resolved_logins(&self) -> Vec<String> {
        self.calls_with_prefix("resolve:")
    }

    fn calls_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|c| c.strip_prefix(prefix).map(str::to_string))
            .collect()
    }
}

#[async_trait]
impl IssueClient for MockIssueClient {
    async fn list_issues(
        &self,
        state: IssueStateFilter,
        _per_page: u8,
        page: u32,
    ) -> Result<Vec<Issue>, GitHubError> {
        assert_eq!(state, IssueStateFilter::All, "Scans must include closed issues");
        self.calls.lock().unwrap().push(format!("list:{page}"));

        if self.fail_on_page == Some(page) {
            return Err(GitHubError::ApiError {
                status: 502,
                message: "Bad Gateway".to_string(),
            });
        }

        Ok(self
            .pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_user_profile(&self, login: &str) -> Result<UserProfile, GitHubError> {
        // Yield so concurrently issued lookups interleave.
        tokio::task::yield_now().await;
        self.calls.lock().unwrap().push(format!("resolve:{login}"));

        if self.failing_logins.contains(login) {
            return Err(GitHubError::RateLimitExceeded);
        }
        if self.missing_logins.contains(login) {
            return Ok(UserProfile::default());
        }

        Ok(UserProfile {
            login: login.to_string(),
            name: Some(format!("{login} name")),
            ..Default::default()
        })
    }
}

/// Profile store recording every upsert.
#[derive(Default)]
pub struct MockProfileStore {
    pub failing_logins: HashSet<String>,
    pub calls: CallLog,
}

impl MockProfileStore {
    pub fn sharing(calls: CallLog) -> Self {
        Self {
            calls,
            ..Default::default()
        }
    }

    pub fn persisted_logins(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|c| c.strip_prefix("persist:").map(str::to_string))
            .collect()
    }
}

#[async_trait]
impl ProfileStore for MockProfileStore {
    async fn upsert_profile(&self, profile: &UserProfile) -> StoreResult<()> {
        tokio::task::yield_now().await;
        self.calls
            .lock()
            .unwrap()
            .push(format!("persist:{}", profile.login));

        if self.failing_logins.contains(&profile.login) {
            return Err(StoreError::Api {
                status: 500,
                message: "insert failed".to_string(),
            });
        }
        Ok(())
    }
}
