//! Protocol-Buffers-like schema emission.
//!
//! Blocks use the `struct` keyword like every other dialect here, so the
//! output is not accepted by `protoc` as is.

use super::renderer::{Dialect, Preamble, SchemaRenderer};
use crate::error::EmitError;
use std::io::Write;
use typeidl_schema::TypeGraph;

/// Protocol-Buffers-like dialect: `syntax` preamble, optional `package` line,
/// no blank lines between blocks.
pub const PROTOBUF: Dialect = Dialect {
    name: "protobuf",
    block_keyword: "struct",
    preamble: Preamble::Syntax { version: "proto3" },
    blank_after_block: false,
};

/// Writes a Protocol-Buffers-like schema of `graph` to `sink`.
///
/// The `package` line is written only for graphs built from a source file.
///
/// # Errors
/// Returns `EmitError::Sink` if writing to the sink fails.
pub fn emit_proto_schema<G, W>(graph: &G, sink: &mut W) -> Result<(), EmitError>
where
    G: TypeGraph + ?Sized,
    W: Write + ?Sized,
{
    SchemaRenderer::new(PROTOBUF).render(graph, sink)
}

/// Renders a Protocol-Buffers-like schema of `graph` into a string.
///
/// # Errors
/// Returns `EmitError` only if rendering into memory fails.
pub fn render_proto_schema<G: TypeGraph + ?Sized>(graph: &G) -> Result<String, EmitError> {
    SchemaRenderer::new(PROTOBUF).render_to_string(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeidl_schema::{SourceFile, build_file};

    fn geom() -> SourceFile {
        SourceFile::parse(
            "geom",
            r#"
            pub struct Point {
                pub X: i64,
                pub Y: i64,
            }
            "#,
        )
        .expect("Failed to parse")
    }

    #[test]
    fn test_emit_file_variant() {
        let file = build_file(&geom()).expect("Failed to build");
        let mut out = Vec::new();
        emit_proto_schema(&file, &mut out).expect("Failed to emit");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "syntax = \"proto3\";\n\npackage geom;\nstruct Point {\nX:long;\nY:long;\n}\n"
        );
    }

    #[test]
    fn test_emit_package_variant_has_no_package_line() {
        let file = build_file(&geom()).expect("Failed to build");
        let output = render_proto_schema(file.as_package()).expect("render");
        assert_eq!(
            output,
            "syntax = \"proto3\";\n\nstruct Point {\nX:long;\nY:long;\n}\n"
        );
    }

    #[test]
    fn test_blocks_are_not_separated() {
        let source = SourceFile::parse(
            "geom",
            "struct Point { X: i64 } struct Line { A: Point, B: Point }",
        )
        .expect("Failed to parse");
        let file = build_file(&source).expect("Failed to build");
        assert_eq!(
            render_proto_schema(&file).expect("render"),
            "syntax = \"proto3\";\n\npackage geom;\nstruct Point {\nX:long;\n}\nstruct Line {\nA:Point;\nB:Point;\n}\n"
        );
    }

    #[test]
    fn test_empty_file_renders_preamble_only() {
        let source = SourceFile::parse("empty", "fn main() {}").expect("Failed to parse");
        let file = build_file(&source).expect("Failed to build");
        assert_eq!(
            render_proto_schema(&file).expect("render"),
            "syntax = \"proto3\";\n\npackage empty;\n"
        );
    }
}
