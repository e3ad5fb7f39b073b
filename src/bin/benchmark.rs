//! Timing comparison: the tree-sitter backend under its option variants
//! against syntect and synoptic, over every fixture. Results go to stdout,
//! progress to the log. Any engine failure aborts the run.

use anyhow::Result;
use highlight_bench::fixtures::{self, Fixture};
use highlight_bench::measure::{format_duration, measure, Timing};
use highlight_bench::{Highlighter, RenderOptions, Synoptic, Syntect, TreeSitter};
use std::hint::black_box;

const WARMUP: u32 = 3;

fn iterations_for(input_len: usize) -> u32 {
    match input_len {
        0..=2_000 => 200,
        2_001..=20_000 => 50,
        _ => 10,
    }
}

fn print_header() {
    println!(
        "  {:<28} {:>10} {:>10} {:>10} {:>12}",
        "case", "mean", "min", "max", "ops/s"
    );
}

fn print_row(case: &str, timing: &Timing) {
    println!(
        "  {:<28} {:>10} {:>10} {:>10} {:>12.0}",
        case,
        format_duration(timing.mean),
        format_duration(timing.min),
        format_duration(timing.max),
        timing.ops_per_sec()
    );
}

fn run_fixture(fixture: &Fixture) -> Result<()> {
    let source = fixture.text.as_ref();
    let language = fixture.language;
    let iterations = iterations_for(source.len());
    log::info!(
        "benchmarking {} ({} bytes, {iterations} iterations)",
        fixture.name,
        source.len()
    );

    println!(
        "== {} [{}] {} bytes",
        fixture.name,
        language.as_str(),
        source.len()
    );
    print_header();

    let variants = [
        ("tree-sitter", RenderOptions::default()),
        (
            "tree-sitter +line-numbers",
            RenderOptions {
                line_numbers: true,
                ..Default::default()
            },
        ),
        (
            "tree-sitter +diff-markers",
            RenderOptions {
                diff_markers: true,
                ..Default::default()
            },
        ),
        (
            "tree-sitter +annotations",
            RenderOptions {
                annotations: true,
                ..Default::default()
            },
        ),
        // warmup rounds prime the cache, so this measures the hit path
        (
            "tree-sitter +cache",
            RenderOptions {
                cache: true,
                ..Default::default()
            },
        ),
    ];
    for (case, options) in variants {
        let backend = TreeSitter::with_options(options);
        let timing = measure(WARMUP, iterations, || {
            black_box(backend.highlight(language, source))?;
            Ok(())
        })?;
        print_row(case, &timing);
    }

    for backend in [&Syntect as &dyn Highlighter, &Synoptic] {
        let timing = measure(WARMUP, iterations, || {
            black_box(backend.highlight(language, source))?;
            Ok(())
        })?;
        print_row(backend.name(), &timing);
    }

    println!();
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    println!("highlight-bench: tree-sitter vs syntect vs synoptic");
    println!();

    let mut fixtures = fixtures::static_fixtures();
    fixtures.push(fixtures::generated_fixture(fixtures::DEFAULT_GENERATED_LINES));
    for fixture in &fixtures {
        run_fixture(fixture)?;
    }

    println!("done.");
    Ok(())
}
