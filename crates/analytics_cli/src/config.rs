//! Configuration file lookup for the CLI.
//!
//! Commands take an optional `--config` path; without one the bot
//! configuration is read from the current directory.

use std::path::PathBuf;

use config_manager::{BotConfig, DEFAULT_CONFIG_FILENAME};
use tracing::info;

use crate::errors::Error;

/// Environment variable holding the GitHub access token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable holding the Supabase API key.
pub const SUPABASE_KEY_ENV: &str = "SUPABASE_KEY";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Resolves the configuration file path.
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        // Look for config in current directory
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}

/// Loads the bot configuration from `config_path`, or the default location.
pub fn load_config(config_path: Option<&str>) -> Result<BotConfig, Error> {
    let path = get_config_path(config_path);
    let config = BotConfig::load(&path)?;
    info!(path = ?path, "Loaded configuration");
    Ok(config)
}
