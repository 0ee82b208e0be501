//! Schema emission benchmarks.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use typeidl::codegen::{render_flat_schema, render_proto_schema};
use typeidl::{SourceFile, build_file, build_package, emit_flat_schema};
use typeidl_bench::{Scene, chained_source};

fn benchmark_emit_flat(c: &mut Criterion) {
    let pkg = build_package::<Scene>().expect("Failed to build");
    let mut buf = Vec::with_capacity(4096);

    c.bench_function("emit_flat_scene", |b| {
        b.iter(|| {
            buf.clear();
            emit_flat_schema(black_box(&pkg), &mut buf)
        })
    });
}

fn benchmark_render_chain(c: &mut Criterion) {
    let source = SourceFile::parse("bench", &chained_source(64)).expect("Failed to parse");
    let file = build_file(&source).expect("Failed to build");

    c.bench_function("render_flat_chain_64", |b| {
        b.iter(|| render_flat_schema(black_box(&file)))
    });

    c.bench_function("render_proto_chain_64", |b| {
        b.iter(|| render_proto_schema(black_box(&file)))
    });
}

criterion_group!(benches, benchmark_emit_flat, benchmark_render_chain);
criterion_main!(benches);
