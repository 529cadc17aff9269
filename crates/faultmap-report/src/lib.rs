//! Handler-to-error-code reports for the faultmap toolchain.
//!
//! This crate joins the call graph and the error catalog: it builds the graph
//! from an [`EdgeProvider`](faultmap_graph::EdgeProvider), runs one
//! reachability query per handler and correlates the reachable error names
//! with the catalog.
//!
//! - [`analyse`] - the whole pipeline, from edges to reports
//! - [`report_handlers`] - reports for an already built graph
//! - [`correlate`] - catalog correlation for one set of names
//!
//! Serialising the reports is left to the caller; [`HandlerReport`] and
//! [`ErrorFinding`] implement `serde::Serialize` with lowercase keys.

mod analysis;
mod correlate;
mod error;
mod report;

pub use analysis::{AnalysisOptions, analyse, report_handlers};
pub use correlate::correlate;
pub use error::AnalysisError;
pub use report::{ErrorFinding, HandlerReport};
