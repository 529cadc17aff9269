//! Catalog data model and lookups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Numeric code and display text declared for one symbolic error name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Numeric application code.
    pub code: i64,
    /// Human-readable message.
    pub text: String,
}

/// A numeric code declared by more than one symbolic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateCode {
    /// The shared code.
    pub code: i64,
    /// Names declaring the code, in name order.
    pub names: Vec<String>,
}

/// The configured mapping from symbolic error names to catalog entries.
///
/// Auxiliary tables are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    services: BTreeMap<i64, String>,
    #[serde(default)]
    sections: BTreeMap<i64, String>,
    #[serde(default)]
    messages: BTreeMap<String, CatalogEntry>,
    #[serde(default)]
    types: BTreeMap<String, String>,
    #[serde(default)]
    default_type: String,
    #[serde(default)]
    allowed_duplicates: Vec<i64>,
    #[serde(default)]
    package_name: String,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a message entry.
    #[must_use]
    pub fn with_message(
        mut self,
        name: impl Into<String>,
        code: i64,
        text: impl Into<String>,
    ) -> Self {
        self.messages.insert(
            name.into(),
            CatalogEntry {
                code,
                text: text.into(),
            },
        );
        self
    }

    /// Looks up the entry declared for `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&CatalogEntry> {
        self.messages.get(name)
    }

    /// Returns every declared symbolic name, in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// Returns the number of declared messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns whether no messages are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Service identifiers keyed by numeric prefix.
    #[must_use]
    pub const fn services(&self) -> &BTreeMap<i64, String> {
        &self.services
    }

    /// Section identifiers keyed by numeric prefix.
    #[must_use]
    pub const fn sections(&self) -> &BTreeMap<i64, String> {
        &self.sections
    }

    /// Named message types.
    #[must_use]
    pub const fn types(&self) -> &BTreeMap<String, String> {
        &self.types
    }

    /// Type assumed for messages that declare none.
    #[must_use]
    pub fn default_type(&self) -> &str {
        &self.default_type
    }

    /// Codes that may legitimately be shared by several names.
    #[must_use]
    pub fn allowed_duplicates(&self) -> &[i64] {
        &self.allowed_duplicates
    }

    /// Package that hosts the generated constructors.
    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Returns codes shared by several names and not listed as allowed.
    ///
    /// Results are ordered by code.
    #[must_use]
    pub fn duplicate_codes(&self) -> Vec<DuplicateCode> {
        let mut by_code: BTreeMap<i64, Vec<String>> = BTreeMap::new();
        for (name, entry) in &self.messages {
            by_code.entry(entry.code).or_default().push(name.clone());
        }
        by_code
            .into_iter()
            .filter(|(code, names)| names.len() > 1 && !self.allowed_duplicates.contains(code))
            .map(|(code, names)| DuplicateCode { code, names })
            .collect()
    }
}
