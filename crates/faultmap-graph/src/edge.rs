//! Call graph edge representation.

/// A caller→callee pair exactly as the upstream analysis printed it.
///
/// Both ends are still undecorated raw symbols; the builder normalises them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEdge<'a> {
    /// Raw symbol of the calling function.
    caller: &'a str,
    /// Raw symbol of the called function.
    callee: &'a str,
}

impl<'a> RawEdge<'a> {
    /// Creates a new raw edge.
    #[must_use]
    pub const fn new(caller: &'a str, callee: &'a str) -> Self {
        Self { caller, callee }
    }

    /// Parses one tab-separated edge line.
    ///
    /// Two layouts are accepted: `caller<TAB>callee`, and the `callgraph`
    /// tool layout `caller<TAB>--kind-pos--><TAB>callee` where the middle
    /// column is ignored. Returns `None` for anything else.
    #[must_use]
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut fields = line
            .split('\t')
            .map(str::trim)
            .filter(|field| !field.is_empty());
        let caller = fields.next()?;
        let second = fields.next()?;
        let callee = if second.starts_with("--") && second.ends_with("-->") {
            fields.next()?
        } else {
            second
        };
        if fields.next().is_some() {
            return None;
        }
        Some(Self::new(caller, callee))
    }

    /// Returns the raw caller symbol.
    #[must_use]
    pub const fn caller(&self) -> &'a str {
        self.caller
    }

    /// Returns the raw callee symbol.
    #[must_use]
    pub const fn callee(&self) -> &'a str {
        self.callee
    }
}
