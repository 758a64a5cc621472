//! Command modules for the bounty analytics CLI.
//!
//! - `collect_cmd`: runs the analytics pipeline against GitHub and Supabase
//! - `classify_cmd`: classifies a set of labels offline

pub mod classify_cmd;
pub mod collect_cmd;
