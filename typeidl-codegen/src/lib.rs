//! # typeidl Codegen
//!
//! Schema text generation from type graphs.
//!
//! This crate provides:
//! - FlatBuffers-like and Protocol-Buffers-like emitters
//! - A renderer parameterised by [`Dialect`]
//! - The shared scalar name mapping
//! - One-call helpers from Rust source text, source files and reflected types

pub mod error;
pub mod idl;
pub mod mapping;

pub use error::{CodegenError, EmitError};
pub use idl::{
    Dialect, FLATBUFFERS, PROTOBUF, Preamble, SchemaRenderer, emit_flat_schema, emit_proto_schema,
    render_flat_schema, render_proto_schema,
};
pub use mapping::{ScalarNames, map_scalar_name};

use std::path::Path;
use typeidl_core::Describe;
use typeidl_schema::{SourceFile, build_file, build_package};

/// Generates a FlatBuffers-like schema from Rust source text.
///
/// # Arguments
/// * `name` - Module name, used as the schema namespace
/// * `text` - Rust source containing struct declarations
///
/// # Errors
/// Returns `CodegenError` if parsing or building fails.
pub fn generate_flat_from_source(name: &str, text: &str) -> Result<String, CodegenError> {
    let source = SourceFile::parse(name, text)?;
    let file = build_file(&source)?;
    Ok(render_flat_schema(&file)?)
}

/// Generates a Protocol-Buffers-like schema from Rust source text.
///
/// # Arguments
/// * `name` - Module name, used as the schema package
/// * `text` - Rust source containing struct declarations
///
/// # Errors
/// Returns `CodegenError` if parsing or building fails.
pub fn generate_proto_from_source(name: &str, text: &str) -> Result<String, CodegenError> {
    let source = SourceFile::parse(name, text)?;
    let file = build_file(&source)?;
    Ok(render_proto_schema(&file)?)
}

/// Generates a FlatBuffers-like schema from a Rust source file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or building fails.
pub fn generate_flat_from_file(path: &Path) -> Result<String, CodegenError> {
    let source = SourceFile::from_path(path)?;
    let file = build_file(&source)?;
    Ok(render_flat_schema(&file)?)
}

/// Generates a Protocol-Buffers-like schema from a Rust source file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or building fails.
pub fn generate_proto_from_file(path: &Path) -> Result<String, CodegenError> {
    let source = SourceFile::from_path(path)?;
    let file = build_file(&source)?;
    Ok(render_proto_schema(&file)?)
}

/// Generates a FlatBuffers-like schema for a reflected type.
///
/// # Errors
/// Returns `CodegenError::Build` if the type graph contains unsupported kinds.
pub fn generate_flat<T: Describe + ?Sized>() -> Result<String, CodegenError> {
    let package = build_package::<T>()?;
    Ok(render_flat_schema(&package)?)
}

/// Generates a Protocol-Buffers-like schema for a reflected type.
///
/// # Errors
/// Returns `CodegenError::Build` if the type graph contains unsupported kinds.
pub fn generate_proto<T: Describe + ?Sized>() -> Result<String, CodegenError> {
    let package = build_package::<T>()?;
    Ok(render_proto_schema(&package)?)
}
