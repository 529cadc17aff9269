//! YAML loading for catalogs.

use std::fs;

use camino::Utf8Path;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::CatalogError;

const INLINE_ORIGIN: &str = "<inline>";

impl Catalog {
    /// Parses a catalog from a YAML document.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] when the document is invalid.
    pub fn from_yaml_str(document: &str) -> Result<Self, CatalogError> {
        parse(document, INLINE_ORIGIN)
    }

    /// Reads and parses the catalog stored at `path`.
    ///
    /// Duplicate codes that are not explicitly allowed are logged as
    /// warnings; they do not fail the load.
    ///
    /// # Errors
    /// Returns [`CatalogError::Read`] when the file cannot be read and
    /// [`CatalogError::Parse`] when its contents are invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, CatalogError> {
        let document = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = parse(&document, path.as_str())?;
        debug!(path = %path, messages = catalog.len(), "catalog loaded");
        for duplicate in catalog.duplicate_codes() {
            warn!(
                code = duplicate.code,
                names = ?duplicate.names,
                "error code declared by several names"
            );
        }
        Ok(catalog)
    }
}

fn parse(document: &str, origin: &str) -> Result<Catalog, CatalogError> {
    serde_saphyr::from_str(document).map_err(|error| CatalogError::parse(origin, error.to_string()))
}
