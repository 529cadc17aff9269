//! Readers for the analysis inputs named by the configuration.

use std::fs::{self, File};
use std::io::BufReader;

use camino::Utf8Path;
use faultmap_graph::{EdgeReader, HandlerDescriptor};
use tracing::debug;

use crate::AppError;

/// Reads the YAML sequence of handler descriptors at `path`.
pub(crate) fn load_handlers(path: &Utf8Path) -> Result<Vec<HandlerDescriptor>, AppError> {
    let document = fs::read_to_string(path).map_err(|source| AppError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let handlers: Vec<HandlerDescriptor> =
        serde_saphyr::from_str(&document).map_err(|error| AppError::ParseHandlers {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
    debug!(path = %path, handlers = handlers.len(), "handler list loaded");
    Ok(handlers)
}

/// Opens the edge list at `path` for streaming ingestion.
pub(crate) fn open_edges(path: &Utf8Path) -> Result<EdgeReader<BufReader<File>>, AppError> {
    let file = File::open(path).map_err(|source| AppError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(EdgeReader::new(BufReader::new(file)))
}
