//! Structural declaration sources.
//!
//! The graph builder does not know where type information comes from. A
//! [`DeclarationSource`] turns an opaque handle into a [`Declaration`]: a
//! name plus one of the kinds the builder understands. Two sources ship with
//! this crate:
//! - [`Reflection`](crate::reflect::Reflection), backed by static [`Shape`](typeidl_core::Shape)
//!   metadata;
//! - [`SourceFile`](crate::parser::SourceFile), backed by parsed Rust source text.

use crate::error::BuildError;
use typeidl_core::{ScalarKind, UnsupportedKind};

/// Capability that describes types to the graph builder.
pub trait DeclarationSource {
    /// Opaque reference to a type known to this source.
    type Handle: Clone;

    /// Returns the namespace a root type originates from.
    fn namespace(&self, root: &Self::Handle) -> String;

    /// Describes the type behind a handle.
    ///
    /// # Errors
    /// Returns `BuildError::UnresolvedType` if the handle names nothing this
    /// source knows about.
    fn declare(&self, handle: &Self::Handle) -> Result<Declaration<Self::Handle>, BuildError>;
}

/// A described type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<H> {
    /// Resolved type name.
    pub name: String,
    /// What the type is.
    pub body: DeclarationBody<H>,
}

/// Kind-specific part of a [`Declaration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationBody<H> {
    /// Fieldless scalar.
    Scalar(ScalarKind),
    /// Record with field slots in declaration order.
    Struct(Vec<FieldDeclaration<H>>),
    /// Indirection to another type.
    Indirect(H),
    /// A type the schema cannot represent.
    Unsupported(UnsupportedKind),
}

/// A field slot of a structural declaration.
///
/// Some languages let one slot declare several fields of a shared type
/// (`X, Y int`); the builder rejects such slots, so a well-formed slot has
/// exactly one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration<H> {
    /// Names declared in this slot.
    pub names: Vec<String>,
    /// Field type.
    pub ty: H,
}

impl<H> FieldDeclaration<H> {
    /// Creates a single-name field slot.
    pub fn new(name: impl Into<String>, ty: H) -> Self {
        Self {
            names: vec![name.into()],
            ty,
        }
    }
}
