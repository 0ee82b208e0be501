//! # typeidl Core
//!
//! Kind vocabulary and static reflection metadata.
//!
//! This crate provides:
//! - Scalar and unsupported kind enumerations
//! - [`Shape`] metadata describing a Rust type's name, module and fields
//! - The [`Describe`] trait with impls for standard library types

pub mod kind;
pub mod shape;

pub use kind::{ScalarKind, UnsupportedKind, scalar_by_rust_name, unsupported_primitive};
pub use shape::{Describe, FieldShape, Shape, ShapeKind, shape_of};
