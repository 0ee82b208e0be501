//! Schema dialect emitters.

pub mod flatbuffers;
pub mod protobuf;
pub mod renderer;

pub use flatbuffers::{FLATBUFFERS, emit_flat_schema, render_flat_schema};
pub use protobuf::{PROTOBUF, emit_proto_schema, render_proto_schema};
pub use renderer::{Dialect, Preamble, SchemaRenderer};
