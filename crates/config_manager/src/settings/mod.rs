//! Setting types that make up the bot configuration file.
//!
//! Each submodule maps one TOML table of the configuration file.

pub mod github;
pub mod label;
pub mod mode;
pub mod pagination;
pub mod price;
pub mod supabase;

// Re-export all types for convenient access
pub use github::GitHubSettings;
pub use label::LabelCatalogEntry;
pub use mode::ModeConfig;
pub use pagination::{PaginationConfig, DEFAULT_PAGE_SIZE};
pub use price::PriceConfig;
pub use supabase::SupabaseSettings;
