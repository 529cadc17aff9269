//! Frozen call graph registry.

use std::collections::HashMap;

use crate::node::{CallNode, NodeId};

/// An immutable call graph keyed by canonical node ID.
///
/// Produced by [`GraphBuilder::finish`](crate::GraphBuilder::finish). The
/// graph is never mutated afterwards, so it can be shared freely between
/// threads running independent reachability queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallGraph {
    /// All nodes in the graph, keyed by node ID.
    nodes: HashMap<NodeId, CallNode>,
    /// Handler nodes in the order they were discovered.
    handler_order: Vec<NodeId>,
}

impl CallGraph {
    pub(crate) const fn from_parts(
        nodes: HashMap<NodeId, CallNode>,
        handler_order: Vec<NodeId>,
    ) -> Self {
        Self {
            nodes,
            handler_order,
        }
    }

    /// Returns the node with the given ID.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&CallNode> {
        self.nodes.get(id)
    }

    /// Returns whether the graph contains a node with the given ID.
    #[must_use]
    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of distinct edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.called().count()).sum()
    }

    /// Returns whether the graph is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the handler nodes in discovery order.
    pub fn handler_nodes(&self) -> impl Iterator<Item = &CallNode> {
        self.handler_order
            .iter()
            .filter_map(|id| self.nodes.get(id))
    }

    /// Returns the number of handler nodes.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handler_order.len()
    }

    /// Returns the nodes that are called by the given node.
    ///
    /// Callees are yielded in first-seen order.
    pub fn callees_of(&self, id: &str) -> impl Iterator<Item = &CallNode> {
        self.nodes
            .get(id)
            .into_iter()
            .flat_map(CallNode::called)
            .filter_map(|callee| self.nodes.get(callee))
    }

    /// Returns the nodes that call the given node.
    pub fn callers_of<'g>(&'g self, id: &'g str) -> impl Iterator<Item = &'g CallNode> {
        self.nodes
            .values()
            .filter(move |node| node.called().any(|callee| callee.as_str() == id))
    }
}
