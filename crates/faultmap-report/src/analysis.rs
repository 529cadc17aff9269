//! End-to-end analysis pipeline.

use faultmap_catalog::Catalog;
use faultmap_graph::{
    CallGraph, CallNode, ConstructorPattern, EdgeProvider, GraphBuilder, HandlerDescriptor,
    ReachabilityEngine,
};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::correlate::correlate;
use crate::error::AnalysisError;
use crate::report::{ErrorFinding, HandlerReport};

/// Settings for one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    error_code_dir: String,
    parallel: bool,
}

impl AnalysisOptions {
    /// Creates options recognising constructors declared in `error_code_dir`.
    #[must_use]
    pub fn new(error_code_dir: impl Into<String>) -> Self {
        Self {
            error_code_dir: error_code_dir.into(),
            parallel: false,
        }
    }

    /// Runs the per-handler queries on the rayon thread pool.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Package path hosting the error constructors.
    #[must_use]
    pub fn error_code_dir(&self) -> &str {
        &self.error_code_dir
    }

    /// Whether handler queries run in parallel.
    #[must_use]
    pub const fn parallel(&self) -> bool {
        self.parallel
    }
}

/// Builds the call graph from `provider` and reports every handler.
///
/// Error sites are recognised with a [`ConstructorPattern`] over the
/// catalog's names. See [`report_handlers`] for the report layout.
///
/// # Errors
/// Returns [`AnalysisError::Graph`] when the provider fails.
pub fn analyse<P>(
    provider: &mut P,
    handlers: &[HandlerDescriptor],
    catalog: &Catalog,
    options: &AnalysisOptions,
) -> Result<Vec<HandlerReport>, AnalysisError>
where
    P: EdgeProvider + ?Sized,
{
    let classifier = ConstructorPattern::new(options.error_code_dir(), catalog.names());
    let mut builder = GraphBuilder::new(classifier, handlers);
    builder.ingest_from(provider)?;
    let graph = builder.finish();
    Ok(report_handlers(&graph, handlers, catalog, options.parallel()))
}

/// Produces one report per handler descriptor.
///
/// Handler nodes are reported in discovery order, one report per attached
/// descriptor, all sharing the node's findings. Descriptors never attached to
/// a called node follow in input order: when their function is in the graph
/// (only ever seen as a caller) its reachable errors are still reported,
/// otherwise the report has no findings.
#[must_use]
pub fn report_handlers(
    graph: &CallGraph,
    handlers: &[HandlerDescriptor],
    catalog: &Catalog,
    parallel: bool,
) -> Vec<HandlerReport> {
    let engine = ReachabilityEngine::new(graph);
    let queries = plan_queries(graph, handlers);
    let findings_for = |query: &Query<'_>| -> Vec<ErrorFinding> {
        query.start.map_or_else(Vec::new, |node| {
            let reachable = engine.collect_reachable_errors(node.id());
            correlate(catalog, reachable.iter().map(String::as_str))
        })
    };
    let findings: Vec<Vec<ErrorFinding>> = if parallel {
        queries.par_iter().map(findings_for).collect()
    } else {
        queries.iter().map(findings_for).collect()
    };

    let mut reports = Vec::with_capacity(handlers.len());
    for (query, query_findings) in queries.iter().zip(findings) {
        for descriptor in &query.descriptors {
            reports.push(HandlerReport::new(descriptor, query_findings.clone()));
        }
    }

    info!(
        handlers = graph.handler_count(),
        reports = reports.len(),
        "handler reports built"
    );
    reports
}

/// One reachability query and the descriptors sharing its findings.
struct Query<'g> {
    start: Option<&'g CallNode>,
    descriptors: Vec<&'g HandlerDescriptor>,
}

fn plan_queries<'g>(graph: &'g CallGraph, handlers: &'g [HandlerDescriptor]) -> Vec<Query<'g>> {
    let mut queries: Vec<Query<'g>> = graph
        .handler_nodes()
        .map(|node| Query {
            start: Some(node),
            descriptors: node.handlers().iter().collect(),
        })
        .collect();

    for descriptor in handlers {
        let node = descriptor
            .node_id()
            .ok()
            .and_then(|id| graph.node(id.as_str()));
        if node.is_some_and(|found| found.handlers().contains(descriptor)) {
            continue;
        }
        if node.is_some() {
            warn!(
                handler = %descriptor.name,
                method = %descriptor.method,
                path = %descriptor.path,
                "handler is never called; reporting errors reachable from its own node"
            );
        } else {
            warn!(
                handler = %descriptor.name,
                method = %descriptor.method,
                path = %descriptor.path,
                "handler does not appear in the call graph"
            );
        }
        queries.push(Query {
            start: node,
            descriptors: vec![descriptor],
        });
    }
    queries
}
