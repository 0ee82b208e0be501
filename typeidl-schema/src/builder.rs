//! Type graph builder.
//!
//! Walks a root type through a [`DeclarationSource`], registering every
//! reachable named type exactly once.
//!
//! Structural types are registered as placeholders before their fields are
//! resolved, so a type that refers to itself (directly or through other
//! types) resolves to the pending placeholder instead of recursing forever.
//! A structural type is appended to the package registry only once all of its
//! fields are resolved, which places dependencies ahead of their dependents.

use crate::error::BuildError;
use crate::model::{Field, File, Package, Type, TypeId};
use crate::parser::{SourceFile, TypeRef};
use crate::reflect::Reflection;
use crate::source::{Declaration, DeclarationBody, DeclarationSource, FieldDeclaration};
use std::collections::HashSet;
use typeidl_core::{Describe, UnsupportedKind};

/// Builds a [`Package`] from declarations supplied by a source.
pub struct GraphBuilder<'s, S: DeclarationSource> {
    source: &'s S,
}

impl<'s, S: DeclarationSource> GraphBuilder<'s, S> {
    /// Creates a builder over a declaration source.
    #[must_use]
    pub fn new(source: &'s S) -> Self {
        Self { source }
    }

    /// Builds the package reachable from a single root.
    ///
    /// Indirections on the root are stripped. The package is named after the
    /// root's namespace.
    ///
    /// # Errors
    /// Returns `BuildError` if any reachable type is unsupported, malformed or
    /// unresolved. No package is produced in that case.
    pub fn build_package(&self, root: S::Handle) -> Result<Package, BuildError> {
        let mut handle = root;
        let mut decl = self.source.declare(&handle)?;
        while let DeclarationBody::Indirect(inner) = decl.body {
            decl = self.source.declare(&inner)?;
            handle = inner;
        }

        let mut walk = Walk::new(self.source, Package::new(self.source.namespace(&handle)));
        let root_id = walk.define(decl)?;
        walk.package.set_root(root_id);

        tracing::debug!(
            "Built package {} with {} structural types",
            walk.package.name(),
            walk.package.len()
        );
        Ok(walk.package)
    }

    /// Builds one package covering several roots, sharing deduplication
    /// across all of them.
    ///
    /// # Errors
    /// Returns `BuildError` on the first root that fails.
    pub fn build_all<I>(&self, name: impl Into<String>, roots: I) -> Result<Package, BuildError>
    where
        I: IntoIterator<Item = S::Handle>,
    {
        let mut walk = Walk::new(self.source, Package::new(name));
        for root in roots {
            let decl = self.source.declare(&root)?;
            walk.define(decl)?;
        }

        tracing::debug!(
            "Built package {} with {} structural types",
            walk.package.name(),
            walk.package.len()
        );
        Ok(walk.package)
    }
}

/// State of one traversal.
struct Walk<'s, S: DeclarationSource> {
    source: &'s S,
    package: Package,
}

impl<'s, S: DeclarationSource> Walk<'s, S> {
    fn new(source: &'s S, package: Package) -> Self {
        Self { source, package }
    }

    /// Resolves the type of `owner.field`.
    fn resolve(&mut self, handle: &S::Handle, owner: &str, field: &str) -> Result<TypeId, BuildError> {
        let decl = self
            .source
            .declare(handle)
            .map_err(|e| e.located(owner, field))?;

        match decl.body {
            DeclarationBody::Indirect(_) => Err(BuildError::unsupported(
                UnsupportedKind::Pointer,
                owner,
                Some(field),
            )),
            DeclarationBody::Unsupported(kind) => {
                Err(BuildError::unsupported(kind, owner, Some(field)))
            }
            _ => self.define(decl),
        }
    }

    /// Registers a declaration, or returns the type already registered under
    /// its name.
    fn define(&mut self, decl: Declaration<S::Handle>) -> Result<TypeId, BuildError> {
        if let Some(id) = self.package.find(&decl.name) {
            tracing::trace!("Reusing type {}", decl.name);
            return Ok(id);
        }

        match decl.body {
            DeclarationBody::Scalar(kind) => {
                tracing::trace!("Resolved scalar {} ({})", decl.name, kind);
                Ok(self.package.insert(Type::scalar(decl.name, kind)))
            }
            DeclarationBody::Struct(slots) => {
                let slots = validate_slots(&decl.name, slots)?;
                let id = self.package.insert(Type::placeholder(decl.name.as_str()));

                let mut fields = Vec::with_capacity(slots.len());
                for (name, handle) in slots {
                    let ty = self.resolve(&handle, &decl.name, &name)?;
                    fields.push(Field::new(name, ty));
                }

                tracing::debug!("Registered type {} with {} fields", decl.name, fields.len());
                self.package.complete(id, fields);
                Ok(id)
            }
            DeclarationBody::Indirect(_) => Err(BuildError::unsupported(
                UnsupportedKind::Pointer,
                decl.name,
                None,
            )),
            DeclarationBody::Unsupported(kind) => {
                Err(BuildError::unsupported(kind, decl.name, None))
            }
        }
    }
}

/// Checks that every slot declares exactly one name and that names are
/// unique within the type, returning each field's name and type handle.
fn validate_slots<H>(
    type_name: &str,
    slots: Vec<FieldDeclaration<H>>,
) -> Result<Vec<(String, H)>, BuildError> {
    let mut seen = HashSet::with_capacity(slots.len());
    let mut fields = Vec::with_capacity(slots.len());

    for (position, slot) in slots.into_iter().enumerate() {
        let name = match <[String; 1]>::try_from(slot.names) {
            Ok([name]) => name,
            Err(names) if names.is_empty() => {
                return Err(BuildError::malformed(
                    type_name,
                    format!("field {position} has no name"),
                ));
            }
            Err(names) => {
                return Err(BuildError::malformed(
                    type_name,
                    format!(
                        "field {position} declares {} names ({}); only one name per field is supported",
                        names.len(),
                        names.join(", ")
                    ),
                ));
            }
        };
        if !seen.insert(name.clone()) {
            return Err(BuildError::malformed(
                type_name,
                format!("duplicate field '{name}'"),
            ));
        }
        fields.push((name, slot.ty));
    }

    Ok(fields)
}

/// Builds the package of a reflected Rust type.
///
/// # Errors
/// Returns `BuildError` if the type graph contains unsupported kinds.
pub fn build_package<T: Describe + ?Sized>() -> Result<Package, BuildError> {
    GraphBuilder::new(&Reflection).build_package(T::shape())
}

/// Builds the package of the type of `value`, looking through any number of
/// pointer layers.
///
/// # Errors
/// Returns `BuildError` if the type graph contains unsupported kinds.
pub fn build_package_of<T: Describe + ?Sized>(_value: &T) -> Result<Package, BuildError> {
    build_package::<T>()
}

/// Builds a file covering every struct declared in a source file, in
/// declaration order.
///
/// # Errors
/// Returns `BuildError` if any declaration is malformed, uses an unsupported
/// kind, or references an undeclared type.
pub fn build_file(source: &SourceFile) -> Result<File, BuildError> {
    let roots = source
        .declarations()
        .iter()
        .map(|decl| TypeRef::named(decl.name.as_str()));
    let package = GraphBuilder::new(source).build_all(source.name(), roots)?;
    Ok(File::from_package(package))
}
