use super::common;
use crate::{Chunk, Tag};
use anyhow::Result;
use std::sync::LazyLock;
use tree_sitter_highlight::HighlightConfiguration;
use tree_sitter_javascript::HIGHLIGHT_QUERY as HIGHLIGHTS_QUERY;
use tree_sitter_javascript::LANGUAGE;

const NAMES: &[&str] = &[
    "keyword",  // let
    "function", // *function* () {
    "variable", // let *foo* = ...
    "property", // foo.*bar* = ...
    "constant", // *true*
    "string",   // "string"
    "number",   // 42
    "comment",  // /* comments */
];
const TAGS: &[Tag] = &[
    Tag::Name,
    Tag::Text,
    Tag::Text,
    Tag::Text,
    Tag::Boolean,
    Tag::String,
    Tag::Number,
    Tag::Comment,
];

static CONFIG: LazyLock<HighlightConfiguration> = LazyLock::new(|| {
    let mut config = HighlightConfiguration::new(LANGUAGE.into(), "", HIGHLIGHTS_QUERY, "", "")
        .expect("failed to build syntax highlighter");
    config.configure(NAMES);
    config
});

pub(super) fn chunks(source: &str) -> Result<Vec<Chunk>> {
    common::highlight(&CONFIG, TAGS, source)
}
