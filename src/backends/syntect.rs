use super::Highlighter;
use crate::Language;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

// Loading the syntax dump takes longer than highlighting a fixture; both
// binaries share one lazily initialized set.
static SYNTAXES: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEMES: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

const THEME: &str = "base16-ocean.dark";

pub struct Syntect;

impl Highlighter for Syntect {
    fn name(&self) -> &'static str {
        "syntect"
    }

    fn highlight(&self, language: Language, source: &str) -> Result<String> {
        let syntax = SYNTAXES
            .find_syntax_by_token(language.extension())
            .with_context(|| format!("no syntax for {}", language.as_str()))?;
        highlighted_html_for_string(source, &SYNTAXES, syntax, &THEMES.themes[THEME])
            .with_context(|| format!("syntect failed on {}", language.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_every_language_resolves() {
        for language in Language::VALUES {
            assert!(
                SYNTAXES.find_syntax_by_token(language.extension()).is_some(),
                "{language:?}"
            );
        }
    }

    #[test]
    fn test_highlight_produces_markup() {
        let html = Syntect.highlight(Language::Css, fixtures::SMALL_CSS).unwrap();
        assert!(html.starts_with("<pre"));
        assert!(html.contains("<span"));
    }
}
