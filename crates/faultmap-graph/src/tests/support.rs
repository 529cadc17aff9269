//! Shared fixtures for call graph tests.

use crate::{CallGraph, ConstructorPattern, GraphBuilder, HandlerDescriptor};

pub(super) const ERRORS_DIR: &str = "example.com/svc/pkg/errs";

pub(super) fn classifier() -> ConstructorPattern {
    ConstructorPattern::new(ERRORS_DIR, ["ErrNotFound", "ErrConflict", "ErrForbidden"])
}

/// Raw callee string for the constructor of `name`, as the analysis prints it.
pub(super) fn constructor(node: u32, name: &str) -> String {
    format!("n{node}:{ERRORS_DIR}.New{name}")
}

pub(super) fn handler(name: &str, path: &str) -> HandlerDescriptor {
    HandlerDescriptor::new("GET", path, name, "/src/api/handlers.go", 12)
}

pub(super) fn build(edges: &[(&str, &str)], handlers: &[HandlerDescriptor]) -> CallGraph {
    let mut builder = GraphBuilder::new(classifier(), handlers);
    for (caller, callee) in edges {
        builder
            .ingest_edge(caller, callee)
            .expect("test edges normalise");
    }
    builder.finish()
}
