//! # typeidl Schema
//!
//! Type descriptor model and type graph builder.
//!
//! This crate provides:
//! - The deduplicated type graph ([`Package`], [`File`], [`Type`], [`Field`])
//! - The [`DeclarationSource`] capability with reflection and source-text
//!   implementations
//! - The [`GraphBuilder`] that walks a root type into a package

pub mod builder;
pub mod error;
pub mod model;
pub mod parser;
pub mod reflect;
pub mod source;

pub use builder::{GraphBuilder, build_file, build_package, build_package_of};
pub use error::{BuildError, ParseError};
pub use model::{Field, File, Kind, Package, Type, TypeGraph, TypeId, Types};
pub use parser::{SourceFile, StructDeclaration, TypeRef};
pub use reflect::Reflection;
pub use source::{Declaration, DeclarationBody, DeclarationSource, FieldDeclaration};
