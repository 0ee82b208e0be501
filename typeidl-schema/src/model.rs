//! Type descriptor model.
//!
//! A [`Package`] owns every [`Type`] discovered during one build. Fields refer
//! to their type through a [`TypeId`] handle into the owning package, so a
//! type referenced from many fields is stored exactly once.
//!
//! The package keeps two views of its types:
//! - the *registry* of structural types, in the order their construction
//!   completed, which is what [`Package::types`] yields and what emitters
//!   render;
//! - the full descriptor table, which additionally holds the scalar types
//!   that fields point at.
//!
//! Nothing here is mutable from outside the crate; packages are built once by
//! the [`GraphBuilder`](crate::builder::GraphBuilder) and only read afterwards.

use std::collections::HashMap;
use std::iter::FusedIterator;
use typeidl_core::ScalarKind;

/// Handle of a [`Type`] within its owning [`Package`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(usize);

impl TypeId {
    /// Returns the descriptor table index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Kind of a [`Type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Fieldless scalar.
    Scalar(ScalarKind),
    /// Record with named fields.
    Struct,
}

impl Kind {
    /// Returns true for structural kinds.
    #[must_use]
    pub const fn is_struct(&self) -> bool {
        matches!(self, Self::Struct)
    }
}

/// A named type descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    name: String,
    kind: Kind,
    fields: Vec<Field>,
}

impl Type {
    pub(crate) fn scalar(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self {
            name: name.into(),
            kind: Kind::Scalar(kind),
            fields: Vec::new(),
        }
    }

    /// Structural type whose fields are attached once they are resolved.
    pub(crate) fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: Kind::Struct,
            fields: Vec::new(),
        }
    }

    /// Type name, unique within its package.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type kind.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Fields in declaration order. Empty for scalar types.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns true for structural types.
    #[must_use]
    pub const fn is_struct(&self) -> bool {
        self.kind.is_struct()
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A named slot inside a structural [`Type`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    ty: TypeId,
}

impl Field {
    pub(crate) fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Field name, unique within its type.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handle of the field's type in the owning package.
    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.ty
    }
}

/// Root container of a built type graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    name: String,
    descriptors: Vec<Type>,
    registry: Vec<TypeId>,
    index: HashMap<String, TypeId>,
    root: Option<TypeId>,
}

impl Package {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descriptors: Vec::new(),
            registry: Vec::new(),
            index: HashMap::new(),
            root: None,
        }
    }

    /// Adds a descriptor to the lookup table without registering it.
    pub(crate) fn insert(&mut self, ty: Type) -> TypeId {
        let id = TypeId(self.descriptors.len());
        self.index.insert(ty.name.clone(), id);
        self.descriptors.push(ty);
        id
    }

    /// Attaches resolved fields to a placeholder and appends it to the registry.
    pub(crate) fn complete(&mut self, id: TypeId, fields: Vec<Field>) {
        self.descriptors[id.0].fields = fields;
        self.registry.push(id);
    }

    pub(crate) fn find(&self, name: &str) -> Option<TypeId> {
        self.index.get(name).copied()
    }

    pub(crate) fn set_root(&mut self, id: TypeId) {
        self.root = Some(id);
    }

    /// Package name, derived from the root type's namespace.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Structural types in registry order.
    #[must_use]
    pub fn types(&self) -> Types<'_> {
        Types {
            descriptors: &self.descriptors,
            ids: self.registry.iter(),
        }
    }

    /// Handles of the structural types in registry order.
    #[must_use]
    pub fn type_ids(&self) -> &[TypeId] {
        &self.registry
    }

    /// Number of registered structural types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns true if no structural type was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// The root type, when the package was built from a single root.
    #[must_use]
    pub fn root(&self) -> Option<&Type> {
        self.root.map(|id| &self.descriptors[id.0])
    }

    /// Gets a type by handle.
    #[must_use]
    pub fn get(&self, id: TypeId) -> Option<&Type> {
        self.descriptors.get(id.0)
    }

    /// Looks up any known type, scalar or structural, by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Type> {
        self.find(name).map(|id| &self.descriptors[id.0])
    }

    /// Returns the type a field refers to.
    ///
    /// # Panics
    /// Panics if `field` belongs to a different package.
    #[must_use]
    pub fn field_type(&self, field: &Field) -> &Type {
        &self.descriptors[field.ty.0]
    }
}

/// Iterator over the registered types of a [`Package`].
#[derive(Debug, Clone)]
pub struct Types<'a> {
    descriptors: &'a [Type],
    ids: std::slice::Iter<'a, TypeId>,
}

impl<'a> Iterator for Types<'a> {
    type Item = &'a Type;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|id| &self.descriptors[id.0])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl ExactSizeIterator for Types<'_> {}

impl FusedIterator for Types<'_> {}

/// Type graph built from a source-text declaration set.
///
/// Identical to a [`Package`] except in how schema preambles treat it: a
/// file names its package explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    package: Package,
}

impl File {
    pub(crate) fn from_package(package: Package) -> Self {
        Self { package }
    }

    /// File name (the module the declarations came from).
    #[must_use]
    pub fn name(&self) -> &str {
        self.package.name()
    }

    /// Structural types in registry order.
    #[must_use]
    pub fn types(&self) -> Types<'_> {
        self.package.types()
    }

    /// Returns the type a field refers to.
    ///
    /// # Panics
    /// Panics if `field` belongs to a different file.
    #[must_use]
    pub fn field_type(&self, field: &Field) -> &Type {
        self.package.field_type(field)
    }

    /// Looks up any known type by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Type> {
        self.package.lookup(name)
    }

    /// Borrows the underlying package.
    #[must_use]
    pub fn as_package(&self) -> &Package {
        &self.package
    }

    /// Consumes the file, returning the underlying package.
    #[must_use]
    pub fn into_package(self) -> Package {
        self.package
    }
}

/// Read-only view shared by [`Package`] and [`File`], consumed by emitters.
pub trait TypeGraph {
    /// Namespace or package name.
    fn name(&self) -> &str;

    /// Structural types in registry order.
    fn types(&self) -> Types<'_>;

    /// Returns the type a field refers to.
    fn field_type(&self, field: &Field) -> &Type;

    /// Whether the graph came from a source file that names its package.
    fn declares_package(&self) -> bool {
        false
    }
}

impl TypeGraph for Package {
    fn name(&self) -> &str {
        Package::name(self)
    }

    fn types(&self) -> Types<'_> {
        Package::types(self)
    }

    fn field_type(&self, field: &Field) -> &Type {
        Package::field_type(self, field)
    }
}

impl TypeGraph for File {
    fn name(&self) -> &str {
        File::name(self)
    }

    fn types(&self) -> Types<'_> {
        File::types(self)
    }

    fn field_type(&self, field: &Field) -> &Type {
        File::field_type(self, field)
    }

    fn declares_package(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point_package() -> Package {
        let mut pkg = Package::new("p");
        let point = pkg.insert(Type::placeholder("Point"));
        let int = pkg.insert(Type::scalar("int", ScalarKind::Int));
        pkg.complete(point, vec![Field::new("X", int), Field::new("Y", int)]);
        pkg.set_root(point);
        pkg
    }

    #[test]
    fn test_registry_holds_structural_types_only() {
        let pkg = point_package();
        let names: Vec<_> = pkg.types().map(Type::name).collect();
        assert_eq!(names, ["Point"]);
        assert_eq!(pkg.len(), 1);
        assert!(pkg.lookup("int").is_some());
        assert!(!pkg.lookup("int").expect("int").is_struct());
    }

    #[test]
    fn test_field_type_resolves_through_package() {
        let pkg = point_package();
        let point = pkg.root().expect("root");
        assert_eq!(point.name(), "Point");
        let x = point.field("X").expect("field X");
        assert_eq!(pkg.field_type(x).name(), "int");
        assert_eq!(pkg.get(x.type_id()).map(Type::name), Some("int"));
    }

    #[test]
    fn test_types_iterator_is_exact_size() {
        let pkg = point_package();
        assert_eq!(pkg.types().len(), 1);
        assert_eq!(pkg.type_ids().len(), 1);
    }

    #[test]
    fn test_file_declares_package() {
        let file = File::from_package(point_package());
        assert!(TypeGraph::declares_package(&file));
        assert!(!TypeGraph::declares_package(file.as_package()));
        assert_eq!(TypeGraph::name(&file), "p");
    }

    #[test]
    fn test_package_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Package>();
        assert_send_sync::<File>();
    }
}
