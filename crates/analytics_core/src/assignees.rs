//! Assignee deduplication across bounty issues.

use std::collections::HashSet;

use github_client::{Issue, User};

#[cfg(test)]
#[path = "assignees_tests.rs"]
mod tests;

/// Returns the distinct assignees of `issues`, by login, in first-seen order.
///
/// Unassigned issues are skipped. When the same login appears more than once
/// the first occurrence is kept.
pub fn unique_assignees(issues: &[Issue]) -> Vec<User> {
    let mut seen = HashSet::new();
    issues
        .iter()
        .filter_map(|issue| issue.assignee.as_ref())
        .filter(|user| seen.insert(user.login.as_str()))
        .cloned()
        .collect()
}
