//! Call graph registry and error reachability for the faultmap toolchain.
//!
//! This crate turns the caller→callee edge stream emitted by an external
//! whole-program analysis into a registry of addressable nodes, tags the
//! nodes that back HTTP handlers and the call sites that construct
//! application errors, and answers "which error names can this handler
//! reach?" with a cycle-safe depth-first closure.
//!
//! The work happens in two phases:
//!
//! 1. A [`GraphBuilder`] consumes edges (directly through
//!    [`GraphBuilder::ingest_edge`] or from any [`EdgeProvider`]) and is then
//!    frozen into an immutable [`CallGraph`].
//! 2. A [`ReachabilityEngine`] borrows the frozen graph and runs one
//!    independent traversal per handler.
//!
//! # Core Types
//!
//! - [`NodeId`] - Canonical symbol name produced by [`normalise_symbol`]
//! - [`CallNode`] - A function in the registry with its callees and errors
//! - [`CallGraph`] - The frozen registry
//! - [`HandlerDescriptor`] - An HTTP entry point supplied by the caller
//!
//! # Classification
//!
//! Error sites are recognised by an [`ErrorSiteClassifier`]. The default
//! [`ConstructorPattern`] matches calls to `<error_code_dir>.New<Name>`
//! constructors whose `<Name>` is a known catalog entry.
//!
//! # Example
//!
//! ```ignore
//! use faultmap_graph::{ConstructorPattern, GraphBuilder, ReachabilityEngine};
//!
//! let classifier = ConstructorPattern::new("example.com/svc/errs", ["ErrNotFound"]);
//! let mut builder = GraphBuilder::new(classifier, &handlers);
//! builder.ingest_edge("n1:example.com/svc/api.Get", "n2:example.com/svc/errs.NewErrNotFound")?;
//! let graph = builder.finish();
//!
//! let engine = ReachabilityEngine::new(&graph);
//! for node in graph.handler_nodes() {
//!     let errors = engine.collect_reachable_errors(node.id());
//! }
//! ```

mod builder;
mod classify;
mod edge;
mod entry;
mod error;
mod graph;
mod node;
mod provider;
mod reachability;
mod symbol;

pub use builder::{BuildStats, GraphBuilder};
pub use classify::{ConstructorPattern, ErrorSiteClassifier};
pub use edge::RawEdge;
pub use entry::HandlerDescriptor;
pub use error::GraphError;
pub use graph::CallGraph;
pub use node::{CallNode, NodeId};
pub use provider::{EdgeList, EdgeProvider, EdgeReader};
pub use reachability::ReachabilityEngine;
pub use symbol::normalise_symbol;

#[cfg(test)]
mod tests;
