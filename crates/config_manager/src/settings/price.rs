//! Price configuration: the label catalogs used to recognize bounties.

use serde::{Deserialize, Serialize};

use super::label::LabelCatalogEntry;

/// The `[price]` table of the bot configuration.
///
/// An issue is a bounty when it carries at least one label from each catalog.
/// Catalog order matters: when two matching entries weigh the same, the one
/// listed first wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceConfig {
    /// Recognized time estimate labels.
    #[serde(default)]
    pub time_labels: Vec<LabelCatalogEntry>,

    /// Recognized priority labels.
    #[serde(default)]
    pub priority_labels: Vec<LabelCatalogEntry>,
}

#[cfg(test)]
#[path = "price_tests.rs"]
mod tests;
