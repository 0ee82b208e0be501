//! Kind vocabulary shared by the reflection metadata and the type graph.
//!
//! Only two scalar categories are representable in a schema: integers and
//! strings. Every other Rust type category has an [`UnsupportedKind`] so that
//! it can be named precisely in diagnostics.

use std::fmt;

/// Scalar (fieldless) type category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Integer of any width or signedness.
    Int,
    /// UTF-8 string.
    String,
}

impl ScalarKind {
    /// Returns the lowercase kind name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::String => "string",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type category that cannot be rendered into a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnsupportedKind {
    /// `bool`.
    Bool,
    /// `f32` / `f64`.
    Float,
    /// `char`.
    Char,
    /// `()`.
    Unit,
    /// `Box`, `Rc`, `Arc` or a reference.
    Pointer,
    /// `Vec` and other growable sequences.
    List,
    /// Fixed-size array.
    Array,
    /// Slice.
    Slice,
    /// `Option`.
    Optional,
    /// `HashMap` / `BTreeMap`.
    Map,
    /// Tuple.
    Tuple,
    /// Trait object or `impl Trait`.
    Interface,
    /// Anything else, such as generic parameters or function pointers.
    Other,
}

impl UnsupportedKind {
    /// Returns the lowercase kind name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Float => "float",
            Self::Char => "char",
            Self::Unit => "unit",
            Self::Pointer => "pointer",
            Self::List => "list",
            Self::Array => "array",
            Self::Slice => "slice",
            Self::Optional => "optional",
            Self::Map => "map",
            Self::Tuple => "tuple",
            Self::Interface => "interface",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for UnsupportedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in scalars: (Rust name, kind, schema source name).
///
/// 64-bit and pointer-width signed integers share the source name `int`.
const SCALARS: &[(&str, ScalarKind, &str)] = &[
    ("int", ScalarKind::Int, "int"),
    ("i64", ScalarKind::Int, "int"),
    ("isize", ScalarKind::Int, "int"),
    ("i8", ScalarKind::Int, "int8"),
    ("i16", ScalarKind::Int, "int16"),
    ("i32", ScalarKind::Int, "int32"),
    ("u8", ScalarKind::Int, "uint8"),
    ("u16", ScalarKind::Int, "uint16"),
    ("u32", ScalarKind::Int, "uint32"),
    ("u64", ScalarKind::Int, "uint64"),
    ("usize", ScalarKind::Int, "uint64"),
    ("string", ScalarKind::String, "string"),
    ("String", ScalarKind::String, "string"),
    ("str", ScalarKind::String, "string"),
];

/// Looks up a scalar by its Rust spelling.
///
/// Returns the scalar kind and the name the type carries in the graph.
#[must_use]
pub fn scalar_by_rust_name(name: &str) -> Option<(ScalarKind, &'static str)> {
    SCALARS
        .iter()
        .find(|(rust, _, _)| *rust == name)
        .map(|&(_, kind, source)| (kind, source))
}

/// Classifies a Rust primitive that is not a supported scalar.
#[must_use]
pub fn unsupported_primitive(name: &str) -> Option<UnsupportedKind> {
    match name {
        "bool" => Some(UnsupportedKind::Bool),
        "f32" | "f64" => Some(UnsupportedKind::Float),
        "char" => Some(UnsupportedKind::Char),
        "i128" | "u128" => Some(UnsupportedKind::Other),
        _ => None,
    }
}
