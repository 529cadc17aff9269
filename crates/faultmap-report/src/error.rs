//! Error types for the analysis pipeline.

use faultmap_graph::GraphError;
use thiserror::Error;

/// Errors that abort an analysis run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The edge provider failed.
    #[error("unable to build call graph: {0}")]
    Graph(#[from] GraphError),
}
