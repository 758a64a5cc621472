//! Profile resolution and persistence.
//!
//! Aggregation runs in two concurrent batches. Every identity is resolved to a
//! profile at once, and only when all lookups have finished are the profiles
//! upserted, again all at once. Both batches are all-or-nothing: the first
//! failure aborts the batch and the remaining operations are dropped.

use futures::future::try_join_all;
use github_client::{IssueClient, User, UserProfile};
use profile_store::ProfileStore;
use tracing::{info, instrument};

use crate::errors::{AnalyticsError, AnalyticsResult};

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;

/// Outcome of a successful aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationSummary {
    /// Profiles returned by the lookup collaborator.
    pub resolved: usize,

    /// Profiles resolved with a usable login.
    pub with_login: usize,

    /// Upserts that completed.
    pub persisted: usize,
}

/// Resolves identities to profiles and persists them.
pub struct ProfileAggregator<'a> {
    client: &'a dyn IssueClient,
    store: &'a dyn ProfileStore,
}

impl<'a> ProfileAggregator<'a> {
    pub fn new(client: &'a dyn IssueClient, store: &'a dyn ProfileStore) -> Self {
        Self { client, store }
    }

    /// Resolves and persists one profile per identity.
    ///
    /// Profiles without a login are left out of the log line but are still
    /// handed to the store.
    ///
    /// # Errors
    ///
    /// - `AnalyticsError::ProfileLookup` if any lookup fails; nothing is persisted.
    /// - `AnalyticsError::ProfilePersist` if any upsert fails.
    #[instrument(skip_all, fields(identities = identities.len()))]
    pub async fn aggregate(&self, identities: &[User]) -> AnalyticsResult<AggregationSummary> {
        let profiles = self.resolve_all(identities).await?;

        let logins: Vec<&str> = profiles
            .iter()
            .filter(|p| p.has_login())
            .map(|p| p.login.as_str())
            .collect();
        info!(count = logins.len(), "Upserting users: {}", logins.join(","));

        self.persist_all(&profiles).await?;

        Ok(AggregationSummary {
            resolved: profiles.len(),
            with_login: logins.len(),
            persisted: profiles.len(),
        })
    }

    async fn resolve_all(&self, identities: &[User]) -> AnalyticsResult<Vec<UserProfile>> {
        try_join_all(identities.iter().map(|user| async move {
            self.client
                .get_user_profile(&user.login)
                .await
                .map_err(|source| AnalyticsError::ProfileLookup {
                    login: user.login.clone(),
                    source,
                })
        }))
        .await
    }

    async fn persist_all(&self, profiles: &[UserProfile]) -> AnalyticsResult<()> {
        try_join_all(profiles.iter().map(|profile| async move {
            self.store
                .upsert_profile(profile)
                .await
                .map_err(|source| AnalyticsError::ProfilePersist {
                    login: profile.login.clone(),
                    source,
                })
        }))
        .await?;
        Ok(())
    }
}
