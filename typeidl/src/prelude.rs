//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use typeidl::prelude::*;
//! ```

pub use typeidl_derive::Describe;

// Reflection
pub use typeidl_core::{ScalarKind, Shape, UnsupportedKind};

// Type graph
pub use typeidl_schema::{
    BuildError, Field, File, GraphBuilder, Kind, Package, ParseError, SourceFile, Type,
    TypeGraph, TypeId, build_file, build_package, build_package_of,
};

// Emitters
pub use typeidl_codegen::{
    CodegenError, Dialect, EmitError, ScalarNames, SchemaRenderer, emit_flat_schema,
    emit_proto_schema, map_scalar_name, render_flat_schema, render_proto_schema,
};
