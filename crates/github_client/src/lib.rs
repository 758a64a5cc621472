//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides the issue-tracker collaborator of the analytics
//! pipeline: listing a repository's issues page by page and resolving user
//! profiles. Responses are deserialized into the crate's own typed records
//! ([`Issue`], [`Label`], [`User`], [`UserProfile`]) at this boundary.

use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::{debug, error, info, instrument};

pub mod errors;
pub use errors::Error;

pub mod issue;
pub mod label;
pub mod user;

pub use issue::{Issue, IssueState, IssueStateFilter, PullRequestLink};
pub use label::Label;
pub use user::{User, UserProfile};

use issue::ListIssuesParams;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Issue tracker operations used by the analytics pipeline.
///
/// Implementations are bound to one repository.
#[async_trait]
pub trait IssueClient: Send + Sync {
    /// Fetches one page (1-indexed) of issues in the given state.
    ///
    /// The returned page is exactly what the API returned, pull requests
    /// included, so its length can be compared with `per_page` to detect the
    /// last page.
    async fn list_issues(
        &self,
        state: IssueStateFilter,
        per_page: u8,
        page: u32,
    ) -> Result<Vec<Issue>, Error>;

    /// Resolves the full profile of a user.
    ///
    /// An unknown login yields a profile with an empty `login` rather than an
    /// error.
    async fn get_user_profile(&self, login: &str) -> Result<UserProfile, Error>;
}

/// A client for the issues and users endpoints of one repository.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
    owner: String,
    repo: String,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` bound to `owner/repo`.
    ///
    /// # Arguments
    ///
    /// * `client` - An authenticated `Octocrab` instance (see [`create_token_client`]).
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    pub fn new(client: Octocrab, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }
}

#[async_trait]
impl IssueClient for GitHubClient {
    /// Lists issues via `GET /repos/{owner}/{repo}/issues`.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if the repository does not exist,
    /// `Error::RateLimitExceeded` on HTTP 429, and `Error::ApiError` or
    /// `Error::InvalidResponse` for other failures.
    #[instrument(skip(self), fields(owner = %self.owner, repo = %self.repo))]
    async fn list_issues(
        &self,
        state: IssueStateFilter,
        per_page: u8,
        page: u32,
    ) -> Result<Vec<Issue>, Error> {
        let path = format!("/repos/{}/{}/issues", self.owner, self.repo);
        let params = ListIssuesParams {
            state,
            per_page,
            page,
        };

        debug!("Making API call to: {}", path);
        let issues: Vec<Issue> = self
            .client
            .get(path, Some(&params))
            .await
            .map_err(|e| map_octocrab_error("Failed to list issues", e))?;

        debug!(
            page = page,
            count = issues.len(),
            "Received page of issues"
        );

        Ok(issues)
    }

    /// Resolves a profile via `GET /users/{login}`.
    ///
    /// # Errors
    /// A 404 is not an error: it produces `UserProfile::default()`. Any other
    /// failure is returned as in [`GitHubClient::list_issues`].
    #[instrument(skip(self))]
    async fn get_user_profile(&self, login: &str) -> Result<UserProfile, Error> {
        let path = format!("/users/{}", login);

        let result: octocrab::Result<UserProfile> = self.client.get(path, None::<&()>).await;
        match result {
            Ok(profile) => Ok(profile),
            Err(e) => match map_octocrab_error("Failed to get user profile", e) {
                Error::NotFound => {
                    info!(login = login, "User not found, returning empty profile");
                    Ok(UserProfile::default())
                }
                err => Err(err),
            },
        }
    }
}

/// Creates an `Octocrab` client authenticated with a personal or installation token.
///
/// # Arguments
///
/// * `token` - The access token.
/// * `base_uri` - Optional API base URL (GitHub Enterprise, or a mock server in tests).
///
/// # Errors
/// Returns `Error::AuthError` if the client cannot be built.
#[instrument(skip(token))]
pub fn create_token_client(token: &str, base_uri: Option<&str>) -> Result<Octocrab, Error> {
    let mut builder = Octocrab::builder().personal_token(token.to_string());
    if let Some(uri) = base_uri {
        builder = builder.base_uri(uri).map_err(|e| {
            error!(base_uri = uri, error = %e, "Invalid GitHub API base URI");
            Error::AuthError(format!("Invalid GitHub API base URI '{}': {}", uri, e))
        })?;
    }

    builder.build().map_err(|e| {
        error!(error = ?e, "Failed to build Octocrab client");
        Error::AuthError("Failed to build the GitHub client.".to_string())
    })
}

/// Logs an octocrab failure with its detail and maps it to a crate [`Error`].
fn map_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let status = source.status_code.as_u16();
            error!(
                status = status,
                error_message = source.message,
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            );
            match status {
                401 => Error::AuthError(source.message),
                404 => Error::NotFound,
                429 => Error::RateLimitExceeded,
                _ => Error::ApiError {
                    status,
                    message: source.message,
                },
            }
        }
        octocrab::Error::Json { source, backtrace } => {
            error!(
                error_message = source.to_string(),
                backtrace = backtrace.to_string(),
                "{}. Failed to deserialize the response.",
                message
            );
            Error::InvalidResponse
        }
        _ => {
            error!(error_message = e.to_string(), "{}", message);
            Error::InvalidResponse
        }
    }
}
