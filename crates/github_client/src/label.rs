//! Label domain types.
//!
//! This module contains types representing GitHub issue labels.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;

/// Represents a label on an issue.
///
/// The issues API documents labels as either a bare string or an object with
/// an optional `name`. Both shapes are accepted and normalized here, so code
/// downstream only ever sees a name. A label object without a name becomes a
/// label with an empty name, which never matches any catalog entry.
///
/// # Examples
///
/// ```
/// use github_client::Label;
///
/// let label = Label::new("Priority: 1 (Normal)");
/// assert_eq!(label.name, "Priority: 1 (Normal)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawLabel")]
pub struct Label {
    /// The name of the label
    pub name: String,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Name(String),
    Object {
        #[serde(default)]
        name: Option<String>,
    },
}

impl From<RawLabel> for Label {
    fn from(raw: RawLabel) -> Self {
        match raw {
            RawLabel::Name(name) => Label { name },
            RawLabel::Object { name } => Label {
                name: name.unwrap_or_default(),
            },
        }
    }
}
