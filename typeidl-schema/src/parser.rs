//! Source-text declaration parser.
//!
//! This module reads `struct` items from Rust source with `syn` and exposes
//! them as a [`DeclarationSource`]. Only top-level structs are collected;
//! every other item is ignored. Field types are kept as [`TypeRef`]s and
//! resolved lazily by the graph builder, so a struct may reference another
//! struct declared later in the same file.

use crate::error::{BuildError, ParseError};
use crate::source::{Declaration, DeclarationBody, DeclarationSource, FieldDeclaration};
use quote::ToTokens;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use syn::ext::IdentExt;
use typeidl_core::{UnsupportedKind, scalar_by_rust_name, unsupported_primitive};

/// A field type as written in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A scalar or a struct referenced by name.
    Named(String),
    /// `Box<T>`, `Rc<T>`, `Arc<T>`, `&T` or a raw pointer.
    Indirect(Box<TypeRef>),
    /// A type category the schema cannot represent.
    Unsupported {
        /// Category of the type.
        kind: UnsupportedKind,
        /// Source spelling, for diagnostics.
        spelling: String,
    },
}

impl TypeRef {
    /// Creates a by-name reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Converts a `syn` type.
    #[must_use]
    pub fn from_syn(ty: &syn::Type) -> Self {
        match ty {
            syn::Type::Path(path) if path.qself.is_none() => Self::from_path(&path.path, ty),
            syn::Type::Reference(r) => Self::Indirect(Box::new(Self::from_syn(&r.elem))),
            syn::Type::Ptr(p) => Self::Indirect(Box::new(Self::from_syn(&p.elem))),
            syn::Type::Paren(p) => Self::from_syn(&p.elem),
            syn::Type::Group(g) => Self::from_syn(&g.elem),
            syn::Type::Array(_) => Self::unsupported(UnsupportedKind::Array, ty),
            syn::Type::Slice(_) => Self::unsupported(UnsupportedKind::Slice, ty),
            syn::Type::Tuple(t) if t.elems.is_empty() => Self::unsupported(UnsupportedKind::Unit, ty),
            syn::Type::Tuple(_) => Self::unsupported(UnsupportedKind::Tuple, ty),
            syn::Type::TraitObject(_) | syn::Type::ImplTrait(_) => {
                Self::unsupported(UnsupportedKind::Interface, ty)
            }
            _ => Self::unsupported(UnsupportedKind::Other, ty),
        }
    }

    fn from_path(path: &syn::Path, ty: &syn::Type) -> Self {
        let Some(segment) = path.segments.last() else {
            return Self::unsupported(UnsupportedKind::Other, ty);
        };
        let ident = segment.ident.unraw().to_string();

        match &segment.arguments {
            syn::PathArguments::None => match unsupported_primitive(&ident) {
                Some(kind) => Self::unsupported(kind, ty),
                None => Self::Named(ident),
            },
            syn::PathArguments::AngleBracketed(args) => match ident.as_str() {
                "Box" | "Rc" | "Arc" => {
                    let inner = args.args.iter().find_map(|arg| match arg {
                        syn::GenericArgument::Type(inner) => Some(inner),
                        _ => None,
                    });
                    match inner {
                        Some(inner) => Self::Indirect(Box::new(Self::from_syn(inner))),
                        None => Self::unsupported(UnsupportedKind::Other, ty),
                    }
                }
                "Vec" | "VecDeque" | "LinkedList" => Self::unsupported(UnsupportedKind::List, ty),
                "Option" => Self::unsupported(UnsupportedKind::Optional, ty),
                "HashMap" | "BTreeMap" => Self::unsupported(UnsupportedKind::Map, ty),
                _ => Self::unsupported(UnsupportedKind::Other, ty),
            },
            syn::PathArguments::Parenthesized(_) => Self::unsupported(UnsupportedKind::Other, ty),
        }
    }

    fn unsupported(kind: UnsupportedKind, ty: &syn::Type) -> Self {
        Self::Unsupported {
            kind,
            spelling: ty.to_token_stream().to_string(),
        }
    }
}

/// A structural type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDeclaration {
    /// Type name.
    pub name: String,
    /// Field slots in declaration order.
    pub fields: Vec<FieldDeclaration<TypeRef>>,
    /// Generic parameters as written. A generic declaration is reported as
    /// an unsupported kind.
    pub generics: Vec<String>,
}

impl StructDeclaration {
    /// Creates a declaration without fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            generics: Vec::new(),
        }
    }

    /// Adds a single-name field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.fields.push(FieldDeclaration::new(name, ty));
        self
    }

    /// Adds a field slot declaring several names of one type.
    #[must_use]
    pub fn field_group<I, S>(mut self, names: I, ty: TypeRef) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.push(FieldDeclaration {
            names: names.into_iter().map(Into::into).collect(),
            ty,
        });
        self
    }

    fn from_item(item: &syn::ItemStruct) -> Self {
        let fields = item
            .fields
            .iter()
            .map(|field| FieldDeclaration {
                names: field
                    .ident
                    .iter()
                    .map(|ident| ident.unraw().to_string())
                    .collect(),
                ty: TypeRef::from_syn(&field.ty),
            })
            .collect();
        let generics = item
            .generics
            .params
            .iter()
            .map(|param| param.to_token_stream().to_string())
            .collect();

        Self {
            name: item.ident.unraw().to_string(),
            fields,
            generics,
        }
    }
}

/// A set of structural declarations read from one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    declarations: Vec<StructDeclaration>,
    index: HashMap<String, usize>,
    duplicates: BTreeSet<String>,
}

impl SourceFile {
    /// Creates an empty declaration set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
            index: HashMap::new(),
            duplicates: BTreeSet::new(),
        }
    }

    /// Parses Rust source text.
    ///
    /// # Arguments
    /// * `name` - Module name of the source
    /// * `text` - Rust source code
    ///
    /// # Errors
    /// Returns `ParseError::Syntax` if the text is not valid Rust.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, ParseError> {
        let file = syn::parse_file(text)?;
        let mut source = Self::new(name);

        for item in &file.items {
            if let syn::Item::Struct(item) = item {
                source.push(StructDeclaration::from_item(item));
            }
        }

        tracing::debug!(
            "Parsed {} struct declarations from module {}",
            source.declarations.len(),
            source.name
        );

        Ok(source)
    }

    /// Reads and parses a Rust source file.
    ///
    /// The module name is the file stem, or the parent directory name for
    /// `mod.rs`, `lib.rs` and `main.rs`.
    ///
    /// # Errors
    /// Returns `ParseError` if the file cannot be read or parsed, or if no
    /// module name can be derived from the path.
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        let name = module_name(path).ok_or_else(|| ParseError::InvalidFileName {
            path: path.display().to_string(),
        })?;
        let text = std::fs::read_to_string(path)?;
        Self::parse(name, &text)
    }

    /// Adds a declaration.
    ///
    /// Both declarations of a repeated name are kept; declaring that name to
    /// a builder then fails with `BuildError::MalformedDeclaration`.
    pub fn push(&mut self, declaration: StructDeclaration) {
        match self.index.entry(declaration.name.clone()) {
            Entry::Occupied(_) => {
                self.duplicates.insert(declaration.name.clone());
            }
            Entry::Vacant(slot) => {
                slot.insert(self.declarations.len());
            }
        }
        self.declarations.push(declaration);
    }

    /// Adds a declaration, builder style.
    #[must_use]
    pub fn with(mut self, declaration: StructDeclaration) -> Self {
        self.push(declaration);
        self
    }

    /// Module name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declarations in source order.
    #[must_use]
    pub fn declarations(&self) -> &[StructDeclaration] {
        &self.declarations
    }

    /// Looks up a declaration by name. For a repeated name this is the first
    /// declaration.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StructDeclaration> {
        self.index.get(name).map(|&idx| &self.declarations[idx])
    }
}

impl DeclarationSource for SourceFile {
    type Handle = TypeRef;

    fn namespace(&self, _root: &TypeRef) -> String {
        self.name.clone()
    }

    fn declare(&self, handle: &TypeRef) -> Result<Declaration<TypeRef>, BuildError> {
        match handle {
            TypeRef::Named(name) => {
                if self.duplicates.contains(name) {
                    return Err(BuildError::malformed(name.as_str(), "duplicate declaration"));
                }
                let builtin =
                    scalar_by_rust_name(name).is_some() || unsupported_primitive(name).is_some();
                if builtin && self.index.contains_key(name) {
                    return Err(BuildError::malformed(
                        name.as_str(),
                        format!("declaration shadows the built-in type '{name}'"),
                    ));
                }
                if let Some((kind, source_name)) = scalar_by_rust_name(name) {
                    return Ok(Declaration {
                        name: source_name.to_string(),
                        body: DeclarationBody::Scalar(kind),
                    });
                }
                let decl = self
                    .get(name)
                    .ok_or_else(|| BuildError::unresolved(name.as_str()))?;
                if !decl.generics.is_empty() {
                    return Ok(Declaration {
                        name: decl.name.clone(),
                        body: DeclarationBody::Unsupported(UnsupportedKind::Other),
                    });
                }
                Ok(Declaration {
                    name: decl.name.clone(),
                    body: DeclarationBody::Struct(decl.fields.clone()),
                })
            }
            TypeRef::Indirect(inner) => Ok(Declaration {
                name: String::new(),
                body: DeclarationBody::Indirect((**inner).clone()),
            }),
            TypeRef::Unsupported { kind, spelling } => Ok(Declaration {
                name: spelling.clone(),
                body: DeclarationBody::Unsupported(*kind),
            }),
        }
    }
}

fn module_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    if matches!(stem, "mod" | "lib" | "main") {
        let parent = path.parent()?.file_name()?.to_str()?;
        return Some(parent.to_string());
    }
    Some(stem.to_string())
}
