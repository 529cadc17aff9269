//! Provider abstractions for call graph edges.
//!
//! The call graph itself is computed by an external whole-program analysis.
//! This module defines the [`EdgeProvider`] trait through which the builder
//! receives that analysis' edges, plus an in-memory and a line-oriented
//! implementation.

use std::io::BufRead;

use crate::edge::RawEdge;
use crate::error::GraphError;

/// Trait for call graph edge sources.
///
/// Implementations must deliver every edge at least once. Re-delivery is
/// harmless because ingestion is idempotent.
pub trait EdgeProvider {
    /// Invokes `visitor` with the raw caller and callee of every edge.
    ///
    /// # Errors
    /// Returns an error when the source cannot be read or is malformed. Such
    /// failures are fatal to the analysis run.
    fn visit_edges(&mut self, visitor: &mut dyn FnMut(&str, &str)) -> Result<(), GraphError>;
}

/// Edges held in memory as owned raw symbol pairs.
#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    edges: Vec<(String, String)>,
}

impl EdgeList {
    /// Creates an empty edge list.
    #[must_use]
    pub const fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Appends an edge.
    pub fn push(&mut self, caller: impl Into<String>, callee: impl Into<String>) {
        self.edges.push((caller.into(), callee.into()));
    }

    /// Returns the number of edges held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether the list holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<C, D> FromIterator<(C, D)> for EdgeList
where
    C: Into<String>,
    D: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (C, D)>>(iter: I) -> Self {
        Self {
            edges: iter
                .into_iter()
                .map(|(caller, callee)| (caller.into(), callee.into()))
                .collect(),
        }
    }
}

impl EdgeProvider for EdgeList {
    fn visit_edges(&mut self, visitor: &mut dyn FnMut(&str, &str)) -> Result<(), GraphError> {
        for (caller, callee) in &self.edges {
            visitor(caller, callee);
        }
        Ok(())
    }
}

/// Reads edges from a line-oriented text source.
///
/// Each non-empty line not starting with `#` must parse as a [`RawEdge`].
#[derive(Debug)]
pub struct EdgeReader<R> {
    reader: R,
}

impl<R> EdgeReader<R> {
    /// Creates a new reader over `reader`.
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> EdgeProvider for EdgeReader<R> {
    fn visit_edges(&mut self, visitor: &mut dyn FnMut(&str, &str)) -> Result<(), GraphError> {
        for (index, line) in (&mut self.reader).lines().enumerate() {
            let text = line.map_err(|source| GraphError::io("failed to read edge list", source))?;
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let edge = RawEdge::parse(trimmed)
                .ok_or_else(|| GraphError::malformed_edge(index + 1, trimmed))?;
            visitor(edge.caller(), edge.callee());
        }
        Ok(())
    }
}
