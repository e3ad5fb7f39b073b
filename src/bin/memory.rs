//! Heap footprint report: six scripted scenarios, each bracketed by memory
//! snapshots. The tracking allocator is installed here so heap counters
//! cover the whole process.

use anyhow::Result;
use highlight_bench::fixtures;
use highlight_bench::measure::{format_bytes, MemorySnapshot, TrackingAllocator};
use highlight_bench::{Highlighter, Language, RenderOptions, TreeSitter};
use std::hint::black_box;

#[global_allocator]
static ALLOC: TrackingAllocator = TrackingAllocator;

const CACHED_CALLS: usize = 100;

fn scenario<F>(name: &str, run: F) -> Result<()>
where
    F: FnOnce() -> Result<usize>,
{
    log::info!("running scenario: {name}");
    let before = MemorySnapshot::capture();
    let output_bytes = run()?;
    let after = MemorySnapshot::capture();
    let delta = after.delta(&before);

    println!("== {name}");
    println!("  output        {output_bytes} bytes");
    println!(
        "  rss           {:>12} -> {:>12}  ({})",
        format_bytes(before.rss as i64),
        format_bytes(after.rss as i64),
        format_bytes(delta.rss)
    );
    println!(
        "  heap used     {:>12} -> {:>12}  ({})",
        format_bytes(before.heap_used as i64),
        format_bytes(after.heap_used as i64),
        format_bytes(delta.heap_used)
    );
    println!(
        "  heap peak     {:>12} -> {:>12}  ({})",
        format_bytes(before.heap_peak as i64),
        format_bytes(after.heap_peak as i64),
        format_bytes(delta.heap_peak)
    );
    println!();
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    println!("highlight-bench memory report");
    println!();

    scenario("small input", || {
        let backend = TreeSitter::new();
        let html = backend.highlight(Language::Javascript, fixtures::SMALL_CODE)?;
        Ok(black_box(html).len())
    })?;

    scenario("medium input", || {
        let backend = TreeSitter::new();
        let html = backend.highlight(Language::Javascript, fixtures::MEDIUM_CODE)?;
        Ok(black_box(html).len())
    })?;

    scenario("large input", || {
        let backend = TreeSitter::new();
        let html = backend.highlight(Language::Javascript, fixtures::LARGE_CODE)?;
        Ok(black_box(html).len())
    })?;

    scenario("generated input", || {
        let source = fixtures::generate_large_source(fixtures::DEFAULT_GENERATED_LINES);
        let backend = TreeSitter::new();
        let html = backend.highlight(Language::Javascript, &source)?;
        Ok(black_box(html).len())
    })?;

    scenario("repeated calls, cache on", || {
        let backend = TreeSitter::with_options(RenderOptions {
            cache: true,
            ..Default::default()
        });
        let mut output_bytes = 0;
        for _ in 0..CACHED_CALLS {
            output_bytes += black_box(backend.highlight(Language::Javascript, fixtures::MEDIUM_CODE)?).len();
        }
        Ok(output_bytes)
    })?;

    scenario("advanced features", || {
        let backend = TreeSitter::with_options(RenderOptions::all());
        let html = backend.highlight(Language::Javascript, fixtures::LARGE_CODE)?;
        Ok(black_box(html).len())
    })?;

    println!("done.");
    Ok(())
}
