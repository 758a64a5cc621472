//! Configuration management for the bounty analytics bot.
//!
//! The bot configuration is a single TOML file describing the target
//! repository, the label catalogs that define a bounty, run mode switches and
//! the profile persistence target. Secrets are kept out of the file and read
//! from the environment with [`required_env`].

pub mod bot_config;
pub mod errors;
pub mod settings;

// Re-export for convenient access
pub use bot_config::{required_env, BotConfig, DEFAULT_CONFIG_FILENAME};
pub use errors::{ConfigurationError, ConfigurationResult};
pub use settings::{
    GitHubSettings, LabelCatalogEntry, ModeConfig, PaginationConfig, PriceConfig,
    SupabaseSettings, DEFAULT_PAGE_SIZE,
};
