//! Scalar type name mapping shared by every dialect.

use std::collections::BTreeMap;

/// Maps a source scalar name to the schema's canonical primitive name.
///
/// `int` becomes `long`; every other name passes through unchanged.
#[must_use]
pub fn map_scalar_name(name: &str) -> &str {
    match name {
        "int" => "long",
        other => other,
    }
}

/// Scalar name mapping with caller-supplied additions.
///
/// The built-in `int` rule always applies first and cannot be overridden;
/// additional mappings are only consulted for names it passes through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScalarNames {
    extra: BTreeMap<String, String>,
}

impl ScalarNames {
    /// Creates a mapping with only the built-in rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mapping, builder style.
    #[must_use]
    pub fn with(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.insert(from, to);
        self
    }

    /// Adds a mapping.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.extra.insert(from.into(), to.into());
    }

    /// Maps a type name.
    #[must_use]
    pub fn map<'a>(&'a self, name: &'a str) -> &'a str {
        let mapped = map_scalar_name(name);
        if mapped != name {
            return mapped;
        }
        self.extra.get(name).map_or(name, String::as_str)
    }
}
