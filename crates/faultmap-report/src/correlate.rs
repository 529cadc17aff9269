//! Correlation of reachable error names with the catalog.

use std::collections::HashSet;

use faultmap_catalog::Catalog;
use tracing::debug;

use crate::report::ErrorFinding;

/// Resolves reachable error names against `catalog`.
///
/// Each name yields one finding however often it occurs. Findings are
/// sorted by ascending code; names sharing a code keep the order in which
/// they were supplied. Names missing from the catalog become placeholder
/// findings with code 0.
pub fn correlate<'a, I>(catalog: &Catalog, reachable: I) -> Vec<ErrorFinding>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut findings: Vec<ErrorFinding> = reachable
        .into_iter()
        .filter(|name| seen.insert(*name))
        .map(|name| {
            ErrorFinding::resolve(catalog, name).unwrap_or_else(|| {
                debug!(error = name, "error name missing from catalog");
                ErrorFinding::unmatched(name)
            })
        })
        .collect();
    findings.sort_by_key(|finding| finding.code);
    findings
}
