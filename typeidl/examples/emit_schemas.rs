//! Example rendering both schema dialects for a small geometry model.
//!
//! Run with: `RUST_LOG=debug cargo run --example emit_schemas`

use std::io::Write;
use typeidl::prelude::*;

/// A point on the plane.
#[derive(Describe)]
#[idl(namespace = "geom")]
#[allow(dead_code)]
struct Point {
    #[idl(rename = "X")]
    x: i64,
    #[idl(rename = "Y")]
    y: i64,
}

/// A segment between two points.
#[derive(Describe)]
#[idl(namespace = "geom")]
#[allow(dead_code)]
struct Line {
    #[idl(rename = "A")]
    a: Point,
    #[idl(rename = "B")]
    b: Point,
    #[idl(rename = "Label")]
    label: String,
}

const SOURCE: &str = r#"
pub struct Point {
    pub X: i64,
    pub Y: i64,
}
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let package = build_package::<Line>()?;
    tracing::info!(
        "Built package {} with {} types",
        package.name(),
        package.len()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "// FlatBuffers-like, from reflection")?;
    emit_flat_schema(&package, &mut out)?;

    writeln!(out, "// Protocol-Buffers-like, from source text")?;
    let source = SourceFile::parse("geom", SOURCE)?;
    let file = build_file(&source)?;
    emit_proto_schema(&file, &mut out)?;

    Ok(())
}
