//! Type graph build benchmarks.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use typeidl::{SourceFile, build_file, build_package};
use typeidl_bench::{Scene, chained_source};

fn benchmark_build_reflected(c: &mut Criterion) {
    c.bench_function("build_reflected_scene", |b| {
        b.iter(|| build_package::<Scene>().map(|pkg| black_box(pkg.len())))
    });
}

fn benchmark_build_source(c: &mut Criterion) {
    let source = SourceFile::parse("bench", &chained_source(64)).expect("Failed to parse");

    c.bench_function("build_source_chain_64", |b| {
        b.iter(|| build_file(black_box(&source)).map(|file| black_box(file.types().len())))
    });
}

fn benchmark_parse_source(c: &mut Criterion) {
    let text = chained_source(64);

    c.bench_function("parse_source_chain_64", |b| {
        b.iter(|| SourceFile::parse("bench", black_box(&text)))
    });
}

criterion_group!(
    benches,
    benchmark_build_reflected,
    benchmark_build_source,
    benchmark_parse_source
);
criterion_main!(benches);
