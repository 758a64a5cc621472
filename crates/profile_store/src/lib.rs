//! Persistence of resolved contributor profiles.
//!
//! The analytics pipeline only needs one operation from its persistence
//! layer: an idempotent upsert keyed by login. [`ProfileStore`] is that seam;
//! [`SupabaseProfileStore`] implements it against a Supabase (PostgREST)
//! table.

use async_trait::async_trait;
use github_client::UserProfile;
use tracing::{debug, error, instrument};

pub mod errors;
pub use errors::{StoreError, StoreResult};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Idempotent profile persistence keyed by `login`.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Inserts the profile, or merges it into the existing row with the same login.
    async fn upsert_profile(&self, profile: &UserProfile) -> StoreResult<()>;
}

/// Upserts profiles into a Supabase table through its REST interface.
///
/// Requests go to `POST {url}/rest/v1/{table}?on_conflict=login` with
/// `Prefer: resolution=merge-duplicates`, which PostgREST turns into
/// `INSERT ... ON CONFLICT (login) DO UPDATE`.
#[derive(Debug, Clone)]
pub struct SupabaseProfileStore {
    http: reqwest::Client,
    endpoint: url::Url,
    api_key: String,
}

impl SupabaseProfileStore {
    /// Creates a store for `table` in the Supabase project at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidUrl` if `base_url` is not an absolute URL.
    pub fn new(base_url: &str, table: &str, api_key: impl Into<String>) -> StoreResult<Self> {
        let invalid = |reason: String| StoreError::InvalidUrl {
            url: base_url.to_string(),
            reason,
        };

        let base = url::Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .map_err(|e| invalid(e.to_string()))?;
        let mut endpoint = base
            .join(&format!("rest/v1/{}", table))
            .map_err(|e| invalid(e.to_string()))?;
        endpoint.query_pairs_mut().append_pair("on_conflict", "login");

        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
            api_key: api_key.into(),
        })
    }

    /// The full upsert URL, including the conflict target.
    pub fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }
}

#[async_trait]
impl ProfileStore for SupabaseProfileStore {
    #[instrument(skip(self, profile), fields(login = %profile.login))]
    async fn upsert_profile(&self, profile: &UserProfile) -> StoreResult<()> {
        debug!(endpoint = %self.endpoint, "Upserting profile");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(profile)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or(body);

        error!(
            status = status.as_u16(),
            error_message = %message,
            "Profile store rejected upsert"
        );

        Err(StoreError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
