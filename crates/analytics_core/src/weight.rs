//! Ordering weights for label catalog entries.
//!
//! When an issue carries several labels from the same catalog, the one with
//! the smallest weight is the canonical one. A weight set explicitly in
//! configuration always wins; otherwise it is derived from the label text,
//! e.g. `"Time: <2 Hours"` or `"Priority: 3 (High)"`.

use std::sync::LazyLock;

use config_manager::LabelCatalogEntry;
use regex::Regex;

#[cfg(test)]
#[path = "weight_tests.rs"]
mod tests;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("static pattern is valid"));

/// Returns the ordering weight of a catalog entry.
///
/// Pure: the same entry always yields the same weight.
pub fn label_weight(entry: &LabelCatalogEntry) -> f64 {
    entry.weight.unwrap_or_else(|| derive_weight(&entry.name))
}

/// Derives a weight from label text.
///
/// The first integer in the name is scaled according to the first unit
/// keyword found, checked in this order: `priority`, `minute`, `hour`, `day`,
/// `week`, `month`. Durations map onto a common scale where one day is 1.
/// Text without a known keyword weighs 0.
pub fn derive_weight(name: &str) -> f64 {
    let n = NUMBER
        .find(name)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0);
    let lower = name.to_lowercase();

    if lower.contains("priority") {
        n
    } else if lower.contains("minute") {
        n * 0.002
    } else if lower.contains("hour") {
        n * 0.125
    } else if lower.contains("day") {
        1.0 + (n - 1.0) * 0.25
    } else if lower.contains("week") {
        n + 1.0
    } else if lower.contains("month") {
        5.0 + (n - 1.0) * 8.0
    } else {
        0.0
    }
}
