//! FlatBuffers-like schema emission.

use super::renderer::{Dialect, Preamble, SchemaRenderer};
use crate::error::EmitError;
use std::io::Write;
use typeidl_schema::TypeGraph;

/// FlatBuffers-like dialect: `namespace` preamble, blank line after each block.
pub const FLATBUFFERS: Dialect = Dialect {
    name: "flatbuffers",
    block_keyword: "struct",
    preamble: Preamble::Namespace,
    blank_after_block: true,
};

/// Writes a FlatBuffers-like schema of `graph` to `sink`.
///
/// # Errors
/// Returns `EmitError::Sink` if writing to the sink fails.
pub fn emit_flat_schema<G, W>(graph: &G, sink: &mut W) -> Result<(), EmitError>
where
    G: TypeGraph + ?Sized,
    W: Write + ?Sized,
{
    SchemaRenderer::new(FLATBUFFERS).render(graph, sink)
}

/// Renders a FlatBuffers-like schema of `graph` into a string.
///
/// # Errors
/// Returns `EmitError` only if rendering into memory fails.
pub fn render_flat_schema<G: TypeGraph + ?Sized>(graph: &G) -> Result<String, EmitError> {
    SchemaRenderer::new(FLATBUFFERS).render_to_string(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeidl_core::{Describe, FieldShape, Shape};
    use typeidl_schema::{SourceFile, build_file, build_package};

    struct Point;
    struct Line;

    impl Describe for Point {
        fn shape() -> Shape {
            const FIELDS: &[FieldShape] = &[
                FieldShape::new(&["X"], <i64 as Describe>::shape),
                FieldShape::new(&["Y"], <i64 as Describe>::shape),
            ];
            Shape::structure("Point", "demo::p", FIELDS)
        }
    }

    impl Describe for Line {
        fn shape() -> Shape {
            const FIELDS: &[FieldShape] = &[
                FieldShape::new(&["A"], <Point as Describe>::shape),
                FieldShape::new(&["B"], <Point as Describe>::shape),
            ];
            Shape::structure("Line", "demo::p", FIELDS)
        }
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_emit_point() {
        let pkg = build_package::<Point>().expect("Failed to build");
        let mut out = Vec::new();
        emit_flat_schema(&pkg, &mut out).expect("Failed to emit");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "namespace p;\n\nstruct Point {\nX:long;\nY:long;\n}\n\n"
        );
    }

    #[test]
    fn test_emit_line() {
        let pkg = build_package::<Line>().expect("Failed to build");
        let output = render_flat_schema(&pkg).expect("Failed to render");
        assert_eq!(
            output,
            "namespace p;\n\nstruct Point {\nX:long;\nY:long;\n}\n\nstruct Line {\nA:Point;\nB:Point;\n}\n\n"
        );
    }

    #[test]
    fn test_scalar_root_renders_preamble_only() {
        let pkg = build_package::<String>().expect("Failed to build");
        assert_eq!(render_flat_schema(&pkg).expect("render"), "namespace ;\n\n");
    }

    #[test]
    fn test_emit_file_uses_file_name() {
        let source = SourceFile::parse("geom", "struct Point { X: int, Y: int }")
            .expect("Failed to parse");
        let file = build_file(&source).expect("Failed to build");
        assert_eq!(
            render_flat_schema(&file).expect("render"),
            "namespace geom;\n\nstruct Point {\nX:long;\nY:long;\n}\n\n"
        );
    }

    #[test]
    fn test_sink_failure_is_propagated() {
        let pkg = build_package::<Point>().expect("Failed to build");
        let err = emit_flat_schema(&pkg, &mut FailingSink).expect_err("should fail");
        let EmitError::Sink(io) = err;
        assert_eq!(io.kind(), std::io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_emit_to_dyn_writer() {
        let pkg = build_package::<Point>().expect("Failed to build");
        let mut buf = Vec::new();
        let sink: &mut dyn Write = &mut buf;
        emit_flat_schema(&pkg, sink).expect("Failed to emit");
        assert!(!buf.is_empty());
    }
}
