//! Paginated issue scanning.
//!
//! The scanner walks the repository's issues (open and closed) one page at a
//! time and keeps the bounties. The first page shorter than the page size,
//! including an empty one, is the end of the data; no further page is
//! requested even if more might exist.

use config_manager::{PriceConfig, DEFAULT_PAGE_SIZE};
use github_client::{Issue, IssueClient, IssueStateFilter};
use tracing::{debug, info, instrument};

use crate::bounty::bounty_info;
use crate::errors::{AnalyticsError, AnalyticsResult};

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;

/// Collects every bounty issue of a repository.
pub struct IssueScanner<'a> {
    client: &'a dyn IssueClient,
    price: &'a PriceConfig,
    per_page: u8,
}

impl<'a> IssueScanner<'a> {
    /// Creates a scanner using the default page size of 30.
    pub fn new(client: &'a dyn IssueClient, price: &'a PriceConfig) -> Self {
        Self {
            client,
            price,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }

    /// Overrides the page size.
    pub fn with_page_size(mut self, per_page: u8) -> Self {
        self.per_page = per_page;
        self
    }

    /// Scans all pages and returns the bounty issues in scan order.
    ///
    /// Pages are requested strictly one after another, since whether page
    /// N+1 exists is only known from the size of page N.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::IssueFetch` for the first page that fails to
    /// load. Bounties from earlier pages are discarded.
    #[instrument(skip(self), fields(per_page = self.per_page))]
    pub async fn scan(&self) -> AnalyticsResult<Vec<Issue>> {
        let mut bounties = Vec::new();
        let mut issues_seen = 0usize;
        let mut page: u32 = 1;

        loop {
            let issues = self
                .client
                .list_issues(IssueStateFilter::All, self.per_page, page)
                .await
                .map_err(|source| AnalyticsError::IssueFetch { page, source })?;

            let page_len = issues.len();
            issues_seen += page_len;

            let before = bounties.len();
            bounties.extend(
                issues
                    .into_iter()
                    .filter(|issue| bounty_info(issue, self.price).is_bounty),
            );

            debug!(
                page = page,
                issues = page_len,
                bounties = bounties.len() - before,
                "Scanned page"
            );

            if page_len == 0 || page_len < self.per_page as usize {
                break;
            }
            page += 1;
        }

        info!(
            pages = page,
            issues = issues_seen,
            bounties = bounties.len(),
            "Issue scan complete"
        );

        Ok(bounties)
    }
}
