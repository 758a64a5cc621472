//! Bounty classification.
//!
//! An issue is a bounty when it carries at least one label from the time
//! catalog and at least one from the priority catalog. Matching is by exact,
//! case-sensitive label name.

use std::collections::HashSet;

use config_manager::{LabelCatalogEntry, PriceConfig};
use github_client::{Issue, Label};
use serde::Serialize;

use crate::weight::label_weight;

#[cfg(test)]
#[path = "bounty_tests.rs"]
mod tests;

/// Substring that marks a price label.
pub const PRICE_LABEL_MARKER: &str = "Price";

/// Classification of one issue. Derived on demand, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BountyInfo {
    pub is_bounty: bool,
    /// Lightest matching time label.
    pub time_label: Option<String>,
    /// Lightest matching priority label.
    pub priority_label: Option<String>,
    /// First label containing [`PRICE_LABEL_MARKER`], bounty or not.
    pub price_label: Option<String>,
}

/// Classifies a label set against the configured catalogs.
///
/// Pure and infallible: empty catalogs or an empty label set simply produce a
/// non-bounty.
pub fn classify(labels: &[Label], price: &PriceConfig) -> BountyInfo {
    let present: HashSet<&str> = labels.iter().map(|l| l.name.as_str()).collect();

    let matched_time = matching_entries(&price.time_labels, &present);
    let matched_priority = matching_entries(&price.priority_labels, &present);

    let is_bounty = !matched_time.is_empty() && !matched_priority.is_empty();

    let time_label = lightest(&matched_time).map(|e| e.name.clone());
    let priority_label = lightest(&matched_priority).map(|e| e.name.clone());

    let price_label = labels
        .iter()
        .find(|l| l.name.contains(PRICE_LABEL_MARKER))
        .map(|l| l.name.clone());

    BountyInfo {
        is_bounty,
        time_label,
        priority_label,
        price_label,
    }
}

/// Classifies an issue by its labels.
pub fn bounty_info(issue: &Issue, price: &PriceConfig) -> BountyInfo {
    classify(&issue.labels, price)
}

/// Catalog entries whose name is on the issue, in catalog order.
fn matching_entries<'a>(
    catalog: &'a [LabelCatalogEntry],
    present: &HashSet<&str>,
) -> Vec<&'a LabelCatalogEntry> {
    catalog
        .iter()
        .filter(|entry| present.contains(entry.name.as_str()))
        .collect()
}

/// Minimum-weight entry; on a tie the earlier entry is kept.
fn lightest<'a>(entries: &[&'a LabelCatalogEntry]) -> Option<&'a LabelCatalogEntry> {
    entries.iter().copied().reduce(|min, entry| {
        if label_weight(entry) < label_weight(min) {
            entry
        } else {
            min
        }
    })
}
