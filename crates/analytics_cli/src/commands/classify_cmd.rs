//! Offline label classification.
//!
//! Applies the configured label catalogs to a set of label names and prints
//! the resulting [`BountyInfo`] as JSON. Useful for checking a catalog change
//! before a collection run.
//!
//! ```bash
//! bounty-analytics classify --label "Time: <1 Day" --label "Priority: 1 (Normal)"
//! ```

use analytics_core::{classify, BountyInfo};
use clap::Args;
use config_manager::PriceConfig;
use github_client::Label;
use tracing::{debug, instrument};

use crate::config::load_config;
use crate::errors::Error;

#[cfg(test)]
#[path = "classify_cmd_tests.rs"]
mod tests;

/// Arguments for the `classify` command.
#[derive(Args, Debug, Clone, Default)]
pub struct ClassifyArgs {
    /// Path to the bot configuration file.
    #[arg(short, long)]
    pub config: Option<String>,

    /// Label name on the issue. Repeat for each label.
    #[arg(short, long = "label")]
    pub labels: Vec<String>,
}

/// Execute the classify command, returning the JSON document to print.
#[instrument]
pub fn execute(args: &ClassifyArgs) -> Result<String, Error> {
    let config = load_config(args.config.as_deref())?;
    let info = classify_labels(&config.price, &args.labels);
    Ok(serde_json::to_string_pretty(&info)?)
}

/// Classifies label names against the price catalogs.
pub fn classify_labels(price: &PriceConfig, names: &[String]) -> BountyInfo {
    let labels: Vec<Label> = names.iter().map(|n| Label::new(n.as_str())).collect();
    let info = classify(&labels, price);
    debug!(labels = labels.len(), is_bounty = info.is_bounty, "Classified labels");
    info
}
