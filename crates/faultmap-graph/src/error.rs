//! Error types for call graph operations.

use thiserror::Error;

/// Errors returned by call graph operations.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The raw symbol carries more than one `:` separator, so the context
    /// prefix cannot be told apart from the symbol itself.
    #[error("ambiguous symbol '{raw}': expected at most one ':' separator")]
    AmbiguousSymbol {
        /// Symbol text as received from the edge source.
        raw: String,
    },

    /// A line of an edge list could not be split into caller and callee.
    #[error("malformed edge on line {line}: '{content}'")]
    MalformedEdge {
        /// One-based line number within the edge list.
        line: usize,
        /// The offending line with surrounding whitespace removed.
        content: String,
    },

    /// An IO error occurred while reading edges.
    #[error("IO error: {message}")]
    Io {
        /// Description of the IO error.
        message: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl GraphError {
    /// Creates a new `AmbiguousSymbol` error.
    #[must_use]
    pub fn ambiguous_symbol(raw: impl Into<String>) -> Self {
        Self::AmbiguousSymbol { raw: raw.into() }
    }

    /// Creates a new `MalformedEdge` error.
    #[must_use]
    pub fn malformed_edge(line: usize, content: impl Into<String>) -> Self {
        Self::MalformedEdge {
            line,
            content: content.into(),
        }
    }

    /// Creates a new `Io` error.
    #[must_use]
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}
