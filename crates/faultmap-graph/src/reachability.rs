//! Cycle-safe collection of reachable error names.

use std::collections::HashSet;

use indexmap::IndexSet;
use tracing::debug;

use crate::graph::CallGraph;
use crate::node::NodeId;

/// Answers reachability queries against a frozen [`CallGraph`].
///
/// Every query owns its visited set, so queries are independent and may run
/// concurrently against the same graph.
#[derive(Debug, Clone, Copy)]
pub struct ReachabilityEngine<'g> {
    graph: &'g CallGraph,
}

impl<'g> ReachabilityEngine<'g> {
    /// Creates an engine over `graph`.
    #[must_use]
    pub const fn new(graph: &'g CallGraph) -> Self {
        Self { graph }
    }

    /// Collects the error names reachable from `start`.
    ///
    /// The traversal is a depth-first pre-order walk of the callee lists.
    /// Each node is expanded at most once, which guarantees termination on
    /// recursive and mutually recursive call chains. Names are returned in
    /// the order they were first reached. A start node or callee missing
    /// from the graph contributes nothing.
    #[must_use]
    pub fn collect_reachable_errors(&self, start: &NodeId) -> IndexSet<String> {
        let mut errors = IndexSet::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut pending: Vec<&str> = vec![start.as_str()];

        while let Some(id) = pending.pop() {
            if !visited.insert(id) {
                continue;
            }
            let Some(node) = self.graph.node(id) else {
                debug!(node = id, "call graph node not found");
                continue;
            };
            for name in node.local_errors() {
                if !errors.contains(name) {
                    errors.insert(name.to_owned());
                }
            }
            // Reverse so the first callee is expanded first.
            pending.extend(node.called().rev().map(NodeId::as_str));
        }

        errors
    }
}
