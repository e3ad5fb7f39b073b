use criterion::{criterion_group, criterion_main, Criterion};
use highlight_bench::fixtures;
use highlight_bench::{Highlighter, Language, RenderOptions, Synoptic, Syntect, TreeSitter};
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let house = TreeSitter::new();

    c.bench_function("tree_sitter small_code", |b| {
        b.iter(|| {
            house
                .highlight(Language::Javascript, black_box(fixtures::SMALL_CODE))
                .unwrap()
        })
    });

    c.bench_function("syntect small_code", |b| {
        b.iter(|| {
            Syntect
                .highlight(Language::Javascript, black_box(fixtures::SMALL_CODE))
                .unwrap()
        })
    });

    c.bench_function("synoptic small_code", |b| {
        b.iter(|| {
            Synoptic
                .highlight(Language::Javascript, black_box(fixtures::SMALL_CODE))
                .unwrap()
        })
    });

    c.bench_function("tree_sitter medium_html", |b| {
        b.iter(|| {
            house
                .highlight(Language::Html, black_box(fixtures::MEDIUM_HTML))
                .unwrap()
        })
    });

    c.bench_function("tree_sitter medium_css", |b| {
        b.iter(|| {
            house
                .highlight(Language::Css, black_box(fixtures::MEDIUM_CSS))
                .unwrap()
        })
    });

    let generated = fixtures::generate_large_source(2_000);
    c.bench_function("tree_sitter generated", |b| {
        b.iter(|| {
            house
                .highlight(Language::Javascript, black_box(&generated))
                .unwrap()
        })
    });

    let decorated = TreeSitter::with_options(RenderOptions {
        line_numbers: true,
        diff_markers: true,
        annotations: true,
        cache: false,
    });
    c.bench_function("tree_sitter generated decorated", |b| {
        b.iter(|| {
            decorated
                .highlight(Language::Javascript, black_box(&generated))
                .unwrap()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
