use crate::Language;
use anyhow::Result;

mod common;
mod css;
mod html;
mod javascript;
mod synoptic;
mod syntect;
mod tree_sitter;

pub use synoptic::Synoptic;
pub use syntect::Syntect;
pub use tree_sitter::TreeSitter;

/// The seam the benchmark drives: one engine, one fallible call that turns
/// source text into styled markup. Engine internals stay opaque.
pub trait Highlighter: Send + Sync {
    fn name(&self) -> &'static str;

    fn highlight(&self, language: Language, source: &str) -> Result<String>;
}
