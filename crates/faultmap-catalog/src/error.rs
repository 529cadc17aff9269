//! Error types for catalog loading.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors returned while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("unable to read catalog '{path}': {source}")]
    Read {
        /// Path of the catalog file.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The catalog document is not valid YAML or does not match the schema.
    #[error("unable to parse catalog {origin}: {message}")]
    Parse {
        /// Where the document came from: a path or `<inline>`.
        origin: String,
        /// Parser diagnostic.
        message: String,
    },
}

impl CatalogError {
    /// Creates a new `Parse` error.
    #[must_use]
    pub fn parse(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            origin: origin.into(),
            message: message.into(),
        }
    }
}
