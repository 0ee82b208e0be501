//! # typeidl
//!
//! Interface definition schemas from Rust types.
//!
//! typeidl walks the graph of a structural type, registers every named type
//! it reaches exactly once, and renders the result as a FlatBuffers-like or
//! Protocol-Buffers-like schema.
//!
//! ## Features
//!
//! - **Static reflection** - `#[derive(Describe)]` records field order and types
//! - **Source-text input** - struct declarations parsed from Rust source
//! - **Deduplicated type graph** - shared and recursive types resolve to one entry
//! - **Deterministic output** - identical input renders identical schemas
//!
//! ## Quick Start
//!
//! ```ignore
//! use typeidl::prelude::*;
//!
//! #[derive(Describe)]
//! struct Point {
//!     #[idl(rename = "X")]
//!     x: i64,
//!     #[idl(rename = "Y")]
//!     y: i64,
//! }
//!
//! let package = build_package::<Point>()?;
//! emit_flat_schema(&package, &mut std::io::stdout())?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Kind vocabulary and reflection metadata
//! - [`schema`] - Type graph model and builder
//! - [`codegen`] - Schema emitters

pub mod prelude;

/// Kind vocabulary and reflection metadata.
pub mod core {
    pub use typeidl_core::*;
}

/// Type graph model and builder.
pub mod schema {
    pub use typeidl_schema::*;
}

/// Schema emitters.
pub mod codegen {
    pub use typeidl_codegen::*;
}

pub use typeidl_derive::Describe;

// Re-export commonly used items at the crate root
pub use typeidl_codegen::{
    CodegenError, EmitError, ScalarNames, SchemaRenderer, emit_flat_schema, emit_proto_schema,
};
pub use typeidl_schema::{
    BuildError, File, Package, SourceFile, build_file, build_package, build_package_of,
};
