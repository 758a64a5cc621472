//! The bot configuration file.
//!
//! [`BotConfig`] is read once per run and handed to the analytics pipeline
//! explicitly; nothing in the workspace reads configuration from global state.
//!
//! # Example TOML Configuration
//!
//! ```toml
//! [github]
//! owner = "ubiquity"
//! repo = "bounty-bot"
//!
//! [price]
//! time_labels = [{ name = "Time: <1 Hour" }, { name = "Time: <1 Day" }]
//! priority_labels = [{ name = "Priority: 1 (Normal)" }]
//!
//! [mode]
//! disable_analytics = false
//!
//! [supabase]
//! url = "https://example.supabase.co"
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ConfigurationError, ConfigurationResult};
use crate::settings::{
    GitHubSettings, LabelCatalogEntry, ModeConfig, PaginationConfig, PriceConfig,
    SupabaseSettings,
};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "bounty-analytics.toml";

/// GitHub caps `per_page` at this value.
const MAX_PAGE_SIZE: u8 = 100;

#[cfg(test)]
#[path = "bot_config_tests.rs"]
mod tests;

/// Complete configuration for one analytics run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Repository whose issues are scanned.
    pub github: GitHubSettings,

    /// Label catalogs used for bounty classification.
    #[serde(default)]
    pub price: PriceConfig,

    /// Run mode switches.
    #[serde(default)]
    pub mode: ModeConfig,

    /// Profile persistence target.
    pub supabase: SupabaseSettings,

    /// Issue listing page size.
    #[serde(default)]
    pub pagination: PaginationConfig,
}

impl BotConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// - `FileNotFound` if the path does not exist
    /// - `FileAccessError` if the file cannot be read
    /// - `ParseError` if the TOML is malformed or does not match the schema
    /// - `InvalidConfiguration` if [`BotConfig::validate`] rejects the values
    pub fn load(path: &Path) -> ConfigurationResult<Self> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(ConfigurationError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigurationError::FileAccessError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::from_toml_str(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigurationResult<Self> {
        let config: BotConfig =
            toml::from_str(content).map_err(|e| ConfigurationError::ParseError {
                reason: e.to_string(),
            })?;

        config.validate()?;

        debug!(
            owner = %config.github.owner,
            repo = %config.github.repo,
            time_labels = config.price.time_labels.len(),
            priority_labels = config.price.priority_labels.len(),
            disable_analytics = config.mode.disable_analytics,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Checks values that parse correctly but cannot drive a run.
    pub fn validate(&self) -> ConfigurationResult<()> {
        if self.github.owner.trim().is_empty() {
            return Err(ConfigurationError::invalid("github.owner", "must not be empty"));
        }
        if self.github.repo.trim().is_empty() {
            return Err(ConfigurationError::invalid("github.repo", "must not be empty"));
        }
        if self.supabase.url.trim().is_empty() {
            return Err(ConfigurationError::invalid("supabase.url", "must not be empty"));
        }
        if self.pagination.per_page == 0 || self.pagination.per_page > MAX_PAGE_SIZE {
            return Err(ConfigurationError::invalid(
                "pagination.per_page",
                format!("must be between 1 and {}", MAX_PAGE_SIZE),
            ));
        }

        validate_catalog("price.time_labels", &self.price.time_labels)?;
        validate_catalog("price.priority_labels", &self.price.priority_labels)?;

        Ok(())
    }
}

fn validate_catalog(field: &str, catalog: &[LabelCatalogEntry]) -> ConfigurationResult<()> {
    for (index, entry) in catalog.iter().enumerate() {
        if entry.name.is_empty() {
            return Err(ConfigurationError::invalid(
                format!("{}[{}].name", field, index),
                "must not be empty",
            ));
        }
        if let Some(weight) = entry.weight {
            if !weight.is_finite() {
                return Err(ConfigurationError::invalid(
                    format!("{}[{}].weight", field, index),
                    "must be a finite number",
                ));
            }
        }
    }
    Ok(())
}

/// Reads a required secret from the environment.
///
/// # Errors
///
/// Returns `RequiredConfigMissing` if the variable is unset or empty.
pub fn required_env(key: &str) -> ConfigurationResult<String> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigurationError::RequiredConfigMissing {
            key: key.to_string(),
        }),
    }
}
