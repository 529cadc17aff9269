//! Call graph node representation.

use std::borrow::Borrow;

use indexmap::IndexSet;

use crate::entry::HandlerDescriptor;

/// Unique identifier for a node in the call graph.
///
/// Node IDs hold the canonical qualified name returned by
/// [`normalise_symbol`](crate::normalise_symbol), so every context-sensitive
/// copy of a function shares one ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub(crate) fn from_canonical(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the string representation of this node ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A function in the call graph registry.
///
/// Callees and local errors keep their first-seen order; re-delivering an
/// edge leaves the node unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallNode {
    /// Unique identifier for this node.
    id: NodeId,
    /// Nodes called from this one, in first-seen order.
    called: IndexSet<NodeId>,
    /// Whether an HTTP handler descriptor matched this node.
    is_handler: bool,
    /// Descriptors of every route served by this node.
    handlers: Vec<HandlerDescriptor>,
    /// Error names constructed directly by this node.
    local_errors: IndexSet<String>,
}

impl CallNode {
    /// Creates an empty node.
    #[must_use]
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            called: IndexSet::new(),
            is_handler: false,
            handlers: Vec::new(),
            local_errors: IndexSet::new(),
        }
    }

    /// Returns the unique identifier for this node.
    #[must_use]
    pub const fn id(&self) -> &NodeId {
        &self.id
    }

    /// Returns the IDs of the nodes called from this one.
    pub fn called(&self) -> impl DoubleEndedIterator<Item = &NodeId> {
        self.called.iter()
    }

    /// Returns whether this node backs at least one HTTP handler.
    #[must_use]
    pub const fn is_handler(&self) -> bool {
        self.is_handler
    }

    /// Returns the handler descriptors attached to this node.
    #[must_use]
    pub fn handlers(&self) -> &[HandlerDescriptor] {
        &self.handlers
    }

    /// Returns the error names raised directly by this node.
    pub fn local_errors(&self) -> impl Iterator<Item = &str> {
        self.local_errors.iter().map(String::as_str)
    }

    pub(crate) fn add_callee(&mut self, callee: NodeId) {
        self.called.insert(callee);
    }

    pub(crate) fn record_error(&mut self, name: &str) {
        if !self.local_errors.contains(name) {
            self.local_errors.insert(name.to_owned());
        }
    }

    /// Marks the node as a handler and attaches any new descriptors.
    ///
    /// Returns `true` the first time the node becomes a handler.
    pub(crate) fn mark_handler(&mut self, descriptors: &[HandlerDescriptor]) -> bool {
        let newly_marked = !self.is_handler;
        self.is_handler = true;
        for descriptor in descriptors {
            if !self.handlers.contains(descriptor) {
                self.handlers.push(descriptor.clone());
            }
        }
        newly_marked
    }
}
