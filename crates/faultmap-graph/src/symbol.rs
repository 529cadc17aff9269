//! Canonical naming for call graph symbols.
//!
//! Pointer analyses print functions with decorations that vary between
//! contexts: pointer receivers are parenthesised (`(*pkg.T).M`) and each
//! context-sensitive copy of a function is prefixed with its node number
//! (`n123:`). Stripping both yields one stable key per function.

use crate::error::GraphError;
use crate::node::NodeId;

/// Normalises a raw symbol string into a canonical [`NodeId`].
///
/// All `*`, `(` and `)` characters are removed. When the remainder contains a
/// single `:`, only the text after it is kept. Symbols whose own name contains
/// a colon are not supported.
///
/// The function is idempotent: normalising an already canonical name returns
/// it unchanged.
///
/// # Errors
///
/// Returns [`GraphError::AmbiguousSymbol`] when more than one `:` remains
/// after stripping, since the context prefix can no longer be identified.
///
/// # Examples
///
/// ```
/// use faultmap_graph::normalise_symbol;
///
/// let id = normalise_symbol("n42:(*example.com/api.Handlers).Get")?;
/// assert_eq!(id.as_str(), "example.com/api.Handlers.Get");
/// # Ok::<(), faultmap_graph::GraphError>(())
/// ```
pub fn normalise_symbol(raw: &str) -> Result<NodeId, GraphError> {
    let stripped: String = raw
        .chars()
        .filter(|character| !matches!(character, '*' | '(' | ')'))
        .collect();

    let symbol = match stripped.split_once(':') {
        None => stripped.as_str(),
        Some((_, rest)) if !rest.contains(':') => rest,
        Some(_) => return Err(GraphError::ambiguous_symbol(raw)),
    };
    Ok(NodeId::from_canonical(symbol))
}
