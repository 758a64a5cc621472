//! Issue listing page size.

use serde::{Deserialize, Serialize};

/// Number of issues requested per page when scanning.
pub const DEFAULT_PAGE_SIZE: u8 = 30;

fn default_per_page() -> u8 {
    DEFAULT_PAGE_SIZE
}

/// The `[pagination]` table of the bot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size for issue listing. GitHub caps this at 100.
    #[serde(default = "default_per_page")]
    pub per_page: u8,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}
