use camino::Utf8PathBuf;

use crate::formats::{LogFormat, OutputFormat};

/// Default log filter expression used by the binary.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Output path selecting standard output.
pub const STDOUT_PATH: &str = "-";

/// Owned copy of [`DEFAULT_LOG_FILTER`] for the configuration default.
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binary.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Default report serialisation format.
#[must_use]
pub const fn default_output_format() -> OutputFormat {
    OutputFormat::Yaml
}

/// Default location of the error catalog.
#[must_use]
pub fn default_catalog_path() -> Utf8PathBuf {
    Utf8PathBuf::from("app-codes.yaml")
}

/// Default location of the handler descriptor list.
#[must_use]
pub fn default_handlers_path() -> Utf8PathBuf {
    Utf8PathBuf::from("handlers.yaml")
}

/// Default location of the call graph edge list.
#[must_use]
pub fn default_edges_path() -> Utf8PathBuf {
    Utf8PathBuf::from("callgraph.txt")
}

/// Default report destination: standard output.
#[must_use]
pub fn default_output_path() -> Utf8PathBuf {
    Utf8PathBuf::from(STDOUT_PATH)
}
