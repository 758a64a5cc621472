//! Analytics collection command.
//!
//! Loads the bot configuration, reads the GitHub token and Supabase key from
//! the environment, and runs one analytics pass over the configured
//! repository.
//!
//! ```bash
//! GITHUB_TOKEN=... SUPABASE_KEY=... bounty-analytics collect --config bounty-analytics.toml
//! ```

use analytics_core::{collect_analytics, CollectionOutcome};
use clap::Args;
use config_manager::{required_env, BotConfig};
use github_client::{create_token_client, GitHubClient};
use profile_store::SupabaseProfileStore;
use tracing::{info, instrument};

use crate::config::{load_config, GITHUB_TOKEN_ENV, SUPABASE_KEY_ENV};
use crate::errors::Error;

#[cfg(test)]
#[path = "collect_cmd_tests.rs"]
mod tests;

/// Arguments for the `collect` command.
#[derive(Args, Debug, Clone, Default)]
pub struct CollectArgs {
    /// Path to the bot configuration file.
    #[arg(short, long)]
    pub config: Option<String>,
}

/// Secrets needed to talk to GitHub and Supabase.
#[derive(Clone)]
pub struct Credentials {
    pub github_token: String,
    pub supabase_key: String,
}

impl Credentials {
    /// Reads both secrets from the environment.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            github_token: required_env(GITHUB_TOKEN_ENV)?,
            supabase_key: required_env(SUPABASE_KEY_ENV)?,
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").finish_non_exhaustive()
    }
}

/// Execute the collect command
#[instrument]
pub async fn execute(args: &CollectArgs) -> Result<CollectionOutcome, Error> {
    let config = load_config(args.config.as_deref())?;
    let credentials = Credentials::from_env()?;
    run_collection(&config, &credentials).await
}

/// Builds the GitHub and Supabase collaborators and runs the pipeline.
#[instrument(skip_all, fields(owner = %config.github.owner, repo = %config.github.repo))]
pub async fn run_collection(
    config: &BotConfig,
    credentials: &Credentials,
) -> Result<CollectionOutcome, Error> {
    let octocrab = create_token_client(&credentials.github_token, config.github.api_url.as_deref())?;
    let issues = GitHubClient::new(octocrab, &config.github.owner, &config.github.repo);
    let store = SupabaseProfileStore::new(
        &config.supabase.url,
        &config.supabase.table,
        credentials.supabase_key.clone(),
    )?;

    let outcome = collect_analytics(config, &issues, &store).await?;
    if let CollectionOutcome::Completed(report) = &outcome {
        info!(
            bounties = report.bounties,
            assignees = report.assignees,
            persisted = report.profiles.persisted,
            "Analytics run complete"
        );
    }

    Ok(outcome)
}
