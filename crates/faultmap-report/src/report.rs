//! Report records.

use camino::Utf8PathBuf;
use faultmap_catalog::Catalog;
use faultmap_graph::HandlerDescriptor;
use serde::{Deserialize, Serialize};

/// One application error reachable from a handler.
///
/// A `code` of 0 marks a name that is absent from the catalog; its `text`
/// then repeats the name so the finding stays visible for triage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorFinding {
    /// Numeric application code, or 0 when unknown.
    pub code: i64,
    /// Display text from the catalog, or the name when unknown.
    pub text: String,
    /// Symbolic error name.
    pub name: String,
}

impl ErrorFinding {
    /// Resolves `name` against `catalog`, or `None` when it is not declared.
    #[must_use]
    pub fn resolve(catalog: &Catalog, name: &str) -> Option<Self> {
        catalog.lookup(name).map(|entry| Self {
            code: entry.code,
            text: entry.text.clone(),
            name: name.to_owned(),
        })
    }

    /// Creates the placeholder finding for a name missing from the catalog.
    #[must_use]
    pub fn unmatched(name: &str) -> Self {
        Self {
            code: 0,
            text: name.to_owned(),
            name: name.to_owned(),
        }
    }
}

/// The errors reachable from one HTTP route.
///
/// Keys serialise in lowercase (`appcodes`), the layout existing report
/// consumers read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub struct HandlerReport {
    /// HTTP method.
    pub method: String,
    /// Receiver type of the handler; always empty.
    pub receiver: String,
    /// Route path template.
    pub path: String,
    /// Qualified handler name as supplied by the route locator.
    pub name: String,
    /// Source file declaring the handler.
    pub file: Utf8PathBuf,
    /// Line of the handler declaration.
    pub line: u32,
    /// Findings ordered by ascending code.
    pub app_codes: Vec<ErrorFinding>,
}

impl HandlerReport {
    /// Creates a report for `descriptor`.
    #[must_use]
    pub fn new(descriptor: &HandlerDescriptor, app_codes: Vec<ErrorFinding>) -> Self {
        Self {
            method: descriptor.method.clone(),
            receiver: String::new(),
            path: descriptor.path.clone(),
            name: descriptor.name.clone(),
            file: descriptor.file.clone(),
            line: descriptor.line,
            app_codes,
        }
    }
}
