use super::common;
use crate::{Chunk, Tag};
use anyhow::Result;
use std::sync::LazyLock;
use tree_sitter_css::HIGHLIGHTS_QUERY;
use tree_sitter_css::LANGUAGE;
use tree_sitter_highlight::HighlightConfiguration;

const NAMES: &[&str] = &[
    "tag",      // body
    "property", // font-size
    "variable", // --foo-bar
    "function", // calc()
    "number",   // 42
    "string",   // "foo"
    "comment",  // /* comment */
];
const TAGS: &[Tag] = &[
    Tag::Name,
    Tag::Boolean, // we only have one "Name", so this is a workaround.
    Tag::Text,
    Tag::Text,
    Tag::Number,
    Tag::String,
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
