//! # Analytics Core
//!
//! This crate scans a repository's issues, picks out the bounties, and
//! records the contributors who were assigned to them.
//!
//! ## Overview
//!
//! One analytics run goes through four stages:
//! 1. [`IssueScanner`] pages through every open and closed issue and keeps
//!    the ones [`classify`] marks as bounties
//! 2. [`unique_assignees`] reduces the bounties to distinct assignees
//! 3. [`ProfileAggregator`] resolves each assignee's full profile
//! 4. ...and upserts every resolved profile into the [`ProfileStore`]
//!
//! [`collect_analytics`] drives the whole run.
//!
//! ## Architecture
//!
//! The pipeline depends on its collaborators through traits, and receives its
//! configuration as a parameter:
//! - [`IssueClient`] for issue listing and profile lookups
//! - [`ProfileStore`] for persistence
//! - [`BotConfig`] for label catalogs, page size and run mode
//!
//! ## Error Handling
//!
//! Any collaborator failure aborts the run with an [`AnalyticsError`]. There
//! are no retries and no partial results.

use config_manager::BotConfig;
use github_client::IssueClient;
use profile_store::ProfileStore;
use tracing::{info, instrument};

pub mod aggregator;
pub mod assignees;
pub mod bounty;
pub mod errors;
pub mod scanner;
pub mod weight;

pub use aggregator::{AggregationSummary, ProfileAggregator};
pub use assignees::unique_assignees;
pub use bounty::{bounty_info, classify, BountyInfo, PRICE_LABEL_MARKER};
pub use errors::{AnalyticsError, AnalyticsResult};
pub use scanner::IssueScanner;
pub use weight::{derive_weight, label_weight};

#[cfg(test)]
mod test_support;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// What an analytics run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionOutcome {
    /// Analytics are disabled in configuration; no collaborator was called.
    Skipped,

    /// The run went through every stage.
    Completed(AnalyticsReport),
}

/// Counters for a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsReport {
    /// Bounty issues found across all pages.
    pub bounties: usize,

    /// Distinct assignees on those bounties.
    pub assignees: usize,

    /// Resolution and persistence counts.
    pub profiles: AggregationSummary,
}

/// Collects analytics for the configured repository.
///
/// Scans every issue, keeps the bounties, dedupes their assignees, then
/// resolves and upserts the assignees' profiles. Does nothing beyond logging
/// when `mode.disable_analytics` is set.
///
/// # Errors
///
/// Returns the first [`AnalyticsError`] raised by any stage. The completion
/// message is not logged in that case.
#[instrument(skip_all, fields(owner = %config.github.owner, repo = %config.github.repo))]
pub async fn collect_analytics(
    config: &BotConfig,
    issues: &dyn IssueClient,
    store: &dyn ProfileStore,
) -> AnalyticsResult<CollectionOutcome> {
    let disable_analytics = config.mode.disable_analytics;
    if disable_analytics {
        info!(
            "Skipping to collect analytics, reason: mode={}",
            disable_analytics
        );
        return Ok(CollectionOutcome::Skipped);
    }

    info!("Collecting analytics information...");

    let bounties = IssueScanner::new(issues, &config.price)
        .with_page_size(config.pagination.per_page)
        .scan()
        .await?;

    let assignees = unique_assignees(&bounties);

    let profiles = ProfileAggregator::new(issues, store)
        .aggregate(&assignees)
        .await?;

    info!(
        bounties = bounties.len(),
        assignees = assignees.len(),
        persisted = profiles.persisted,
        "Collecting analytics finished..."
    );

    Ok(CollectionOutcome::Completed(AnalyticsReport {
        bounties: bounties.len(),
        assignees: assignees.len(),
        profiles,
    }))
}
