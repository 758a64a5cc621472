//! Label catalog entries.

use serde::{Deserialize, Serialize};

/// A recognized label text from the `time_labels` or `priority_labels` catalog.
///
/// The optional `weight` overrides the weight that would otherwise be derived
/// from the numeric token in the label name.
///
/// # Examples
///
/// ```
/// use config_manager::settings::LabelCatalogEntry;
///
/// let entry = LabelCatalogEntry::new("Time: <1 Day");
/// assert_eq!(entry.name, "Time: <1 Day");
/// assert!(entry.weight.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelCatalogEntry {
    /// Exact label name as it appears on issues (case-sensitive).
    pub name: String,

    /// Explicit ordering weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl LabelCatalogEntry {
    /// Creates an entry whose weight is derived from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight: None,
        }
    }

    /// Creates an entry with an explicit weight.
    pub fn with_weight(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight: Some(weight),
        }
    }
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;
