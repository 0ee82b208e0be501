//! Dialect-parameterised schema renderer.
//!
//! Every dialect renders the same shape: a preamble, then one block per
//! structural type in registry order, each block listing its fields as
//! `Name:Type;`. Dialects differ only in the values held by [`Dialect`].

use crate::error::EmitError;
use crate::mapping::ScalarNames;
use std::io::Write;
use typeidl_schema::TypeGraph;

/// Preamble written before the first block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preamble {
    /// `namespace <Name>;` followed by a blank line.
    Namespace,
    /// `syntax = "<version>";` followed by a blank line, then
    /// `package <Name>;` when the graph declares its package.
    Syntax {
        /// Syntax version string.
        version: &'static str,
    },
}

/// Parameters of a schema dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    /// Dialect name, for diagnostics.
    pub name: &'static str,
    /// Keyword opening a structural block.
    pub block_keyword: &'static str,
    /// Preamble style.
    pub preamble: Preamble,
    /// Whether a blank line follows every block.
    pub blank_after_block: bool,
}

/// Renders type graphs in one dialect.
#[derive(Debug, Clone)]
pub struct SchemaRenderer {
    dialect: Dialect,
    scalar_names: ScalarNames,
}

impl SchemaRenderer {
    /// Creates a renderer with the built-in scalar mapping.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            scalar_names: ScalarNames::default(),
        }
    }

    /// Replaces the scalar name mapping.
    #[must_use]
    pub fn with_scalar_names(mut self, scalar_names: ScalarNames) -> Self {
        self.scalar_names = scalar_names;
        self
    }

    /// Returns the dialect.
    #[must_use]
    pub const fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Writes the schema of `graph` to `sink`.
    ///
    /// # Errors
    /// Returns `EmitError::Sink` if a write fails; the sink may then hold a
    /// partial schema.
    pub fn render<G, W>(&self, graph: &G, sink: &mut W) -> Result<(), EmitError>
    where
        G: TypeGraph + ?Sized,
        W: Write + ?Sized,
    {
        self.write_preamble(graph, sink)?;

        let mut blocks = 0usize;
        for ty in graph.types().filter(|ty| ty.is_struct()) {
            writeln!(sink, "{} {} {{", self.dialect.block_keyword, ty.name())?;
            for field in ty.fields() {
                let type_name = graph.field_type(field).name();
                writeln!(
                    sink,
                    "{}:{};",
                    field.name(),
                    self.scalar_names.map(type_name)
                )?;
            }
            writeln!(sink, "}}")?;
            if self.dialect.blank_after_block {
                writeln!(sink)?;
            }
            blocks += 1;
        }

        tracing::debug!(
            "Rendered {} schema for {} with {} blocks",
            self.dialect.name,
            graph.name(),
            blocks
        );
        Ok(())
    }

    /// Renders the schema of `graph` into a string.
    ///
    /// # Errors
    /// Returns `EmitError` only if rendering into memory fails.
    pub fn render_to_string<G>(&self, graph: &G) -> Result<String, EmitError>
    where
        G: TypeGraph + ?Sized,
    {
        let mut buf = Vec::new();
        self.render(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn write_preamble<G, W>(&self, graph: &G, sink: &mut W) -> Result<(), EmitError>
    where
        G: TypeGraph + ?Sized,
        W: Write + ?Sized,
    {
        match self.dialect.preamble {
            Preamble::Namespace => {
                writeln!(sink, "namespace {};", graph.name())?;
                writeln!(sink)?;
            }
            Preamble::Syntax { version } => {
                writeln!(sink, "syntax = \"{version}\";")?;
                writeln!(sink)?;
                if graph.declares_package() {
                    writeln!(sink, "package {};", graph.name())?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeidl_schema::{SourceFile, build_file};

    const COMPACT: Dialect = Dialect {
        name: "compact",
        block_keyword: "table",
        preamble: Preamble::Namespace,
        blank_after_block: false,
    };

    fn geom_file() -> typeidl_schema::File {
        let source = SourceFile::parse(
            "geom",
            "struct Point { X: i64, Label: String } struct Line { A: Point, B: Point }",
        )
        .expect("Failed to parse");
        build_file(&source).expect("Failed to build")
    }

    #[test]
    fn test_custom_dialect_keyword_and_spacing() {
        let output = SchemaRenderer::new(COMPACT)
            .render_to_string(&geom_file())
            .expect("render");
        assert_eq!(
            output,
            "namespace geom;\n\ntable Point {\nX:long;\nLabel:string;\n}\ntable Line {\nA:Point;\nB:Point;\n}\n"
        );
    }

    #[test]
    fn test_scalar_names_apply_to_field_types() {
        let renderer = SchemaRenderer::new(COMPACT)
            .with_scalar_names(ScalarNames::new().with("string", "text"));
        let output = renderer.render_to_string(&geom_file()).expect("render");
        assert!(output.contains("Label:text;\n"));
        assert!(output.contains("X:long;\n"));
    }

    #[test]
    fn test_block_count_matches_structural_types() {
        let file = geom_file();
        let output = SchemaRenderer::new(COMPACT)
            .render_to_string(&file)
            .expect("render");
        let blocks = output.lines().filter(|l| l.starts_with("table ")).count();
        assert_eq!(blocks, file.types().filter(|t| t.is_struct()).count());
    }
}
