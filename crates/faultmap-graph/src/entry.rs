//! HTTP entry points supplied by the route locator.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::node::NodeId;
use crate::symbol::normalise_symbol;

/// An HTTP route and the function that serves it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandlerDescriptor {
    /// HTTP method, for example `GET`.
    pub method: String,
    /// Route path template.
    pub path: String,
    /// Qualified name of the handler function.
    pub name: String,
    /// Source file declaring the handler.
    pub file: Utf8PathBuf,
    /// Line of the handler declaration.
    pub line: u32,
}

impl HandlerDescriptor {
    /// Creates a new handler descriptor.
    #[must_use]
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        name: impl Into<String>,
        file: impl Into<Utf8PathBuf>,
        line: u32,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            name: name.into(),
            file: file.into(),
            line,
        }
    }

    /// Returns the call graph node this handler corresponds to.
    ///
    /// # Errors
    /// Returns [`GraphError::AmbiguousSymbol`] when the name cannot be
    /// normalised.
    pub fn node_id(&self) -> Result<NodeId, GraphError> {
        normalise_symbol(&self.name)
    }
}
