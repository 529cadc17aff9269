//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use camino::Utf8PathBuf;
use faultmap_catalog::CatalogError;
use faultmap_config::ConfigError;
use faultmap_report::AnalysisError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

/// Failures that end a faultmap run with a non-zero exit code.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration layering failed.
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    /// The layered configuration is semantically invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    /// Telemetry could not be installed.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    /// The error catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// An input file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    ReadInput {
        /// The input file.
        path: Utf8PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// The handler list is not a valid YAML sequence of descriptors.
    #[error("failed to parse handler list {path}: {message}")]
    ParseHandlers {
        /// The handler list file.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        message: String,
    },
    /// The analysis itself failed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    /// The reports could not be serialised.
    #[error("failed to serialise reports: {0}")]
    Serialise(String),
    /// The reports could not be written.
    #[error("failed to write reports to {destination}: {source}")]
    WriteOutput {
        /// File path, or `-` for standard output.
        destination: String,
        /// Underlying error.
        source: io::Error,
    },
}
