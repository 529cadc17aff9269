//! Selectable formats for log lines and reports.
//!
//! Both parse case-insensitively from flags and environment variables and
//! serialise in `snake_case` inside configuration files.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How the binary renders `tracing` events on standard error.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Single-line text for terminals.
    Compact,
}

/// Serialisation formats for the handler report list.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    /// YAML sequence of reports.
    #[default]
    Yaml,
    /// Pretty-printed JSON array of reports.
    Json,
}
