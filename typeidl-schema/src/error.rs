//! Error types for declaration parsing and type graph building.

use thiserror::Error;
use typeidl_core::UnsupportedKind;

/// Error type for type graph building.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A field or root type has a kind the schema cannot represent.
    #[error("unsupported kind '{kind}'{}", location(.type_name, .field.as_deref()))]
    UnsupportedKind {
        /// The offending kind.
        kind: UnsupportedKind,
        /// Type that declares the field, or the root type itself.
        type_name: String,
        /// Field name, absent for a root type.
        field: Option<String>,
    },

    /// A structural declaration is not well formed.
    #[error("malformed declaration of '{type_name}': {message}")]
    MalformedDeclaration {
        /// Type being declared.
        type_name: String,
        /// What is wrong with it.
        message: String,
    },

    /// A field references a type that is neither a scalar nor declared.
    #[error("unresolved type '{name}'{}", location(.type_name, .field.as_deref()))]
    UnresolvedType {
        /// Referenced type name.
        name: String,
        /// Type that declares the field.
        type_name: String,
        /// Field name.
        field: Option<String>,
    },
}

fn location(type_name: &str, field: Option<&str>) -> String {
    match field {
        Some(field) => format!(" in field '{type_name}.{field}'"),
        None if type_name.is_empty() => String::new(),
        None => format!(" for type '{type_name}'"),
    }
}

impl BuildError {
    /// Creates an unsupported kind error.
    pub fn unsupported(
        kind: UnsupportedKind,
        type_name: impl Into<String>,
        field: Option<&str>,
    ) -> Self {
        Self::UnsupportedKind {
            kind,
            type_name: type_name.into(),
            field: field.map(str::to_string),
        }
    }

    /// Creates a malformed declaration error.
    pub fn malformed(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedDeclaration {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Creates an unresolved type error without a location.
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self::UnresolvedType {
            name: name.into(),
            type_name: String::new(),
            field: None,
        }
    }

    /// Attaches the referencing field to an unresolved type error.
    ///
    /// Other variants, and errors that already carry a location, are
    /// returned unchanged.
    #[must_use]
    pub fn located(self, owner: &str, field_name: &str) -> Self {
        match self {
            Self::UnresolvedType {
                name,
                type_name,
                field: None,
            } if type_name.is_empty() => Self::UnresolvedType {
                name,
                type_name: owner.to_string(),
                field: Some(field_name.to_string()),
            },
            other => other,
        }
    }
}

/// Error type for reading source-text declarations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source text is not valid Rust.
    #[error("syntax error: {0}")]
    Syntax(#[from] syn::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No module name can be derived from the path.
    #[error("cannot derive a module name from '{path}'")]
    InvalidFileName {
        /// Offending path.
        path: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_display() {
        let err = BuildError::unsupported(UnsupportedKind::List, "Polygon", Some("points"));
        assert_eq!(
            err.to_string(),
            "unsupported kind 'list' in field 'Polygon.points'"
        );

        let err = BuildError::unsupported(UnsupportedKind::Bool, "bool", None);
        assert_eq!(err.to_string(), "unsupported kind 'bool' for type 'bool'");
    }

    #[test]
    fn test_located_fills_unresolved_only_once() {
        let err = BuildError::unresolved("Vertex").located("Edge", "from");
        assert_eq!(
            err.to_string(),
            "unresolved type 'Vertex' in field 'Edge.from'"
        );

        let err = err.located("Graph", "edge");
        assert!(matches!(
            err,
            BuildError::UnresolvedType { ref type_name, .. } if type_name == "Edge"
        ));
    }

    #[test]
    fn test_unlocated_unresolved_display() {
        let err = BuildError::unresolved("Ghost");
        assert_eq!(err.to_string(), "unresolved type 'Ghost'");
    }

    #[test]
    fn test_located_ignores_other_variants() {
        let err = BuildError::malformed("Point", "bad").located("Line", "a");
        assert!(matches!(err, BuildError::MalformedDeclaration { ref type_name, .. } if type_name == "Point"));
    }
}
