//! Profile persistence settings.

use serde::{Deserialize, Serialize};

/// Default table that holds contributor profiles.
pub const DEFAULT_PROFILE_TABLE: &str = "users";

fn default_table() -> String {
    DEFAULT_PROFILE_TABLE.to_string()
}

/// The `[supabase]` table of the bot configuration.
///
/// The service key is not part of the file; it is read from `SUPABASE_KEY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupabaseSettings {
    /// Project URL, e.g. `https://xyz.supabase.co`.
    pub url: String,

    /// Table profiles are upserted into.
    #[serde(default = "default_table")]
    pub table: String,
}
