//! Shared configuration for the faultmap toolchain.
//!
//! [`Config`] is layered by `ortho_config`: built-in defaults, then a TOML
//! file named by `--config-path` or `FAULTMAP_CONFIG_PATH`, then
//! `FAULTMAP_*` environment variables, then command-line flags.

mod defaults;
mod formats;

use camino::{Utf8Path, Utf8PathBuf};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use defaults::{
    DEFAULT_LOG_FILTER, STDOUT_PATH, default_catalog_path, default_edges_path,
    default_handlers_path, default_log_filter_string, default_log_format, default_output_format,
    default_output_path,
};
pub use formats::{LogFormat, OutputFormat};

/// Settings for one faultmap run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "FAULTMAP")]
pub struct Config {
    /// YAML error catalog.
    #[ortho_config(default = default_catalog_path())]
    catalog_path: Utf8PathBuf,
    /// YAML list of handler descriptors.
    #[ortho_config(default = default_handlers_path())]
    handlers_path: Utf8PathBuf,
    /// Tab-separated call graph edge list.
    #[ortho_config(default = default_edges_path())]
    edges_path: Utf8PathBuf,
    /// Report destination; `-` writes to standard output.
    #[ortho_config(default = default_output_path())]
    output_path: Utf8PathBuf,
    /// Package path hosting the error constructors.
    #[ortho_config(default = String::new())]
    error_code_dir: String,
    /// Report serialisation format.
    #[ortho_config(default = default_output_format())]
    output_format: OutputFormat,
    /// Runs the per-handler queries in parallel.
    #[ortho_config(default = false)]
    parallel: bool,
    /// `tracing` filter directive.
    #[ortho_config(default = default_log_filter_string())]
    log_filter: String,
    /// Log line format.
    #[ortho_config(default = default_log_format())]
    log_format: LogFormat,
}

/// Semantic configuration problems not caught while layering.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No error constructor package was configured.
    #[error("error_code_dir must name the package hosting the error constructors")]
    MissingErrorCodeDir,
    /// The log filter is blank.
    #[error("log_filter must not be empty")]
    EmptyLogFilter,
}

impl Config {
    /// Checks settings the layering cannot validate on its own.
    ///
    /// # Errors
    /// Returns [`ConfigError`] naming the first invalid setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.error_code_dir.trim().is_empty() {
            return Err(ConfigError::MissingErrorCodeDir);
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::EmptyLogFilter);
        }
        Ok(())
    }

    /// Path of the YAML error catalog.
    #[must_use]
    pub fn catalog_path(&self) -> &Utf8Path {
        &self.catalog_path
    }

    /// Path of the handler descriptor list.
    #[must_use]
    pub fn handlers_path(&self) -> &Utf8Path {
        &self.handlers_path
    }

    /// Path of the call graph edge list.
    #[must_use]
    pub fn edges_path(&self) -> &Utf8Path {
        &self.edges_path
    }

    /// File receiving the report, or `None` for standard output.
    #[must_use]
    pub fn output_path(&self) -> Option<&Utf8Path> {
        (self.output_path.as_str() != STDOUT_PATH).then_some(self.output_path.as_path())
    }

    /// Package path hosting the error constructors.
    #[must_use]
    pub fn error_code_dir(&self) -> &str {
        &self.error_code_dir
    }

    /// Report serialisation format.
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    /// Whether handler queries run in parallel.
    #[must_use]
    pub const fn parallel(&self) -> bool {
        self.parallel
    }

    /// `tracing` filter directive.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Log line format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            handlers_path: default_handlers_path(),
            edges_path: default_edges_path(),
            output_path: default_output_path(),
            error_code_dir: String::new(),
            output_format: default_output_format(),
            parallel: false,
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}
