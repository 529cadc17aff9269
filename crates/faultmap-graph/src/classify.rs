//! Recognition of application error construction sites.
//!
//! Classification runs on the raw callee string of each edge, before
//! normalisation, so strategies see exactly what the analysis printed.

use std::collections::HashSet;

/// Strategy deciding whether a callee constructs a known application error.
pub trait ErrorSiteClassifier {
    /// Returns the symbolic error name constructed by `callee`, if any.
    fn classify<'a>(&self, callee: &'a str) -> Option<&'a str>;
}

/// Matches calls to `<error_code_dir>.New<Name>` constructors.
///
/// The pattern must start after the first byte of the callee string (a
/// string consisting of nothing but the constructor path is not an error
/// site) and the text following the pattern must equal one of the known
/// error names exactly.
#[derive(Debug, Clone)]
pub struct ConstructorPattern {
    pattern: String,
    known_names: HashSet<String>,
}

impl ConstructorPattern {
    /// Creates a classifier for constructors declared in `error_code_dir`.
    #[must_use]
    pub fn new<I, S>(error_code_dir: &str, known_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pattern: format!("{error_code_dir}.New"),
            known_names: known_names.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the constructor prefix searched for in callee strings.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl ErrorSiteClassifier for ConstructorPattern {
    fn classify<'a>(&self, callee: &'a str) -> Option<&'a str> {
        let position = callee.find(&self.pattern)?;
        if position == 0 {
            return None;
        }
        let name = callee.get(position + self.pattern.len()..)?;
        self.known_names.contains(name).then_some(name)
    }
}
