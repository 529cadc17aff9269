//! Single-pass construction of the call graph registry.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::classify::ErrorSiteClassifier;
use crate::entry::HandlerDescriptor;
use crate::error::GraphError;
use crate::graph::CallGraph;
use crate::node::{CallNode, NodeId};
use crate::provider::EdgeProvider;

/// Counters describing one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Edges accepted into the registry, re-deliveries included.
    pub ingested_edges: usize,
    /// Edges rejected because a symbol could not be normalised.
    pub rejected_edges: usize,
    /// Error construction sites recognised by the classifier.
    pub error_sites: usize,
}

/// Builds a [`CallGraph`] from a stream of raw edges.
///
/// Nodes are created lazily the first time a symbol appears on either end of
/// an edge. Errors are attributed to the caller of a constructor, handlers to
/// the callee matching a descriptor.
#[derive(Debug)]
pub struct GraphBuilder<C> {
    classifier: C,
    handler_index: HashMap<NodeId, Vec<HandlerDescriptor>>,
    nodes: HashMap<NodeId, CallNode>,
    handler_order: Vec<NodeId>,
    stats: BuildStats,
}

impl<C: ErrorSiteClassifier> GraphBuilder<C> {
    /// Creates a builder matching callees against `handlers`.
    ///
    /// Descriptors whose names cannot be normalised are skipped with a
    /// warning and will never be matched.
    #[must_use]
    pub fn new(classifier: C, handlers: &[HandlerDescriptor]) -> Self {
        let mut handler_index: HashMap<NodeId, Vec<HandlerDescriptor>> = HashMap::new();
        for descriptor in handlers {
            match descriptor.node_id() {
                Ok(id) => handler_index
                    .entry(id)
                    .or_default()
                    .push(descriptor.clone()),
                Err(error) => warn!(
                    handler = %descriptor.name,
                    path = %descriptor.path,
                    %error,
                    "handler name cannot be matched against the call graph"
                ),
            }
        }
        Self {
            classifier,
            handler_index,
            nodes: HashMap::new(),
            handler_order: Vec::new(),
            stats: BuildStats::default(),
        }
    }

    /// Ingests one caller→callee edge.
    ///
    /// # Errors
    /// Returns [`GraphError::AmbiguousSymbol`] when either symbol cannot be
    /// normalised. The registry is left untouched in that case.
    pub fn ingest_edge(&mut self, caller_raw: &str, callee_raw: &str) -> Result<(), GraphError> {
        let caller_id = crate::normalise_symbol(caller_raw)?;
        let callee_id = crate::normalise_symbol(callee_raw)?;
        self.stats.ingested_edges += 1;

        let callee = node_entry(&mut self.nodes, &callee_id);
        if let Some(descriptors) = self.handler_index.get(&callee_id)
            && callee.mark_handler(descriptors)
        {
            debug!(handler = %callee_id, routes = descriptors.len(), "handler found");
            self.handler_order.push(callee_id.clone());
        }

        let caller = node_entry(&mut self.nodes, &caller_id);
        if let Some(name) = self.classifier.classify(callee_raw) {
            debug!(caller = %caller_id, error = name, "error site found");
            caller.record_error(name);
            self.stats.error_sites += 1;
        }
        caller.add_callee(callee_id);
        Ok(())
    }

    /// Ingests every edge produced by `provider`.
    ///
    /// Edges with ambiguous symbols are rejected with a warning and counted
    /// in [`BuildStats::rejected_edges`]; ingestion continues.
    ///
    /// # Errors
    /// Propagates provider failures, which are fatal.
    pub fn ingest_from<P: EdgeProvider + ?Sized>(
        &mut self,
        provider: &mut P,
    ) -> Result<(), GraphError> {
        provider.visit_edges(&mut |caller, callee| {
            if let Err(error) = self.ingest_edge(caller, callee) {
                warn!(caller, callee, %error, "rejected call graph edge");
                self.stats.rejected_edges += 1;
            }
        })
    }

    /// Returns the counters accumulated so far.
    #[must_use]
    pub const fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Freezes the registry into an immutable [`CallGraph`].
    #[must_use]
    pub fn finish(self) -> CallGraph {
        let graph = CallGraph::from_parts(self.nodes, self.handler_order);
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            handlers = graph.handler_count(),
            rejected_edges = self.stats.rejected_edges,
            error_sites = self.stats.error_sites,
            "call graph built"
        );
        graph
    }
}

fn node_entry<'n>(nodes: &'n mut HashMap<NodeId, CallNode>, id: &NodeId) -> &'n mut CallNode {
    nodes
        .entry(id.clone())
        .or_insert_with(|| CallNode::new(id.clone()))
}
