//! Run mode switches.

use serde::{Deserialize, Serialize};

/// The `[mode]` table of the bot configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeConfig {
    /// When set, analytics collection is skipped entirely.
    #[serde(default)]
    pub disable_analytics: bool,
}
