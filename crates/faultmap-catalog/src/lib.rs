//! Application error code catalog for the faultmap toolchain.
//!
//! Services declare their application errors in a YAML document mapping each
//! symbolic error name to a numeric code and a display text. The catalog also
//! carries service, section and type tables that downstream tooling uses; the
//! reachability analysis only reads the messages table.
//!
//! ```yaml
//! services:
//!   20: lobby
//! messages:
//!   ErrPartyNotFound:
//!     code: 20404
//!     text: party not found
//! defaultType: error
//! ```
//!
//! # Example
//!
//! ```
//! use faultmap_catalog::Catalog;
//!
//! let catalog = Catalog::from_yaml_str(
//!     "messages:\n  ErrNotFound:\n    code: 404001\n    text: not found\n",
//! )?;
//! assert_eq!(catalog.lookup("ErrNotFound").map(|entry| entry.code), Some(404_001));
//! # Ok::<(), faultmap_catalog::CatalogError>(())
//! ```

mod catalog;
mod error;
mod load;

pub use catalog::{Catalog, CatalogEntry, DuplicateCode};
pub use error::CatalogError;
