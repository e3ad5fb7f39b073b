use super::{css, html, javascript, Highlighter};
use crate::render::{render_html, RenderOptions};
use crate::{Chunk, Language};
use anyhow::Result;
use lru_time_cache::LruCache;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Mutex;

const CACHE_CAPACITY: usize = 64;

/// The house engine: tree-sitter grammars plus this crate's renderer.
/// The render options are what the benchmark sweeps; with `cache` set,
/// rendered output is memoized per (language, options, source).
pub struct TreeSitter {
    options: RenderOptions,
    cache: Mutex<LruCache<u64, String>>,
}

impl TreeSitter {
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    pub fn with_options(options: RenderOptions) -> Self {
        TreeSitter {
            options,
            cache: Mutex::new(LruCache::with_capacity(CACHE_CAPACITY)),
        }
    }

    pub fn chunks(language: Language, source: &str) -> Result<Vec<Chunk>> {
        match language {
            Language::Javascript => javascript::chunks(source),
            Language::Html => html::chunks(source),
            Language::Css => css::chunks(source),
        }
    }

    fn cache_key(&self, language: Language, source: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        language.as_str().hash(&mut hasher);
        self.options.hash(&mut hasher);
        source.hash(&mut hasher);
        hasher.finish()
    }
}

impl Default for TreeSitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for TreeSitter {
    fn name(&self) -> &'static str {
        "tree-sitter"
    }

    fn highlight(&self, language: Language, source: &str) -> Result<String> {
        if !self.options.cache {
            return Ok(render_html(&Self::chunks(language, source)?, &self.options));
        }

        let key = self.cache_key(language, source);
        if let Some(hit) = self.cache.lock().unwrap().get(&key) {
            return Ok(hit.clone());
        }
        let rendered = render_html(&Self::chunks(language, source)?, &self.options);
        self.cache.lock().unwrap().insert(key, rendered.clone());
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_highlight_spans() {
        let html = TreeSitter::new()
            .highlight(Language::Javascript, "let x = 42; // answer\n")
            .unwrap();
        assert!(html.contains("<span class=\"name\">let </span>"));
        assert!(html.contains("<span class=\"number\">42</span>"));
        assert!(html.contains("<span class=\"comment\">// answer</span>"));
    }

    #[test]
    fn test_highlight_escapes_source() {
        let html = TreeSitter::new()
            .highlight(Language::Html, "<p>1 & 2</p>")
            .unwrap();
        assert!(html.contains("&lt;p&gt;"));
        assert!(!html.contains("<p>"));
    }

    #[test]
    fn test_every_language_renders() {
        let backend = TreeSitter::new();
        for (language, source) in [
            (Language::Javascript, fixtures::SMALL_CODE),
            (Language::Html, fixtures::SMALL_HTML),
            (Language::Css, fixtures::SMALL_CSS),
        ] {
            let html = backend.highlight(language, source).unwrap();
            assert!(html.starts_with("<pre class=\"hl\">"), "{language:?}");
        }
    }

    #[test]
    fn test_cache_round_trip() {
        let cached = TreeSitter::with_options(RenderOptions {
            cache: true,
            ..Default::default()
        });
        let first = cached
            .highlight(Language::Javascript, fixtures::SMALL_CODE)
            .unwrap();
        let second = cached
            .highlight(Language::Javascript, fixtures::SMALL_CODE)
            .unwrap();
        assert_eq!(first, second);

        // a cache hit must be indistinguishable from a fresh render
        let fresh = TreeSitter::new()
            .highlight(Language::Javascript, fixtures::SMALL_CODE)
            .unwrap();
        assert_eq!(first, fresh);
    }

    #[test]
    fn test_cache_distinguishes_options() {
        let plain = TreeSitter::with_options(RenderOptions {
            cache: true,
            ..Default::default()
        });
        let numbered = TreeSitter::with_options(RenderOptions {
            cache: true,
            line_numbers: true,
            ..Default::default()
        });
        let a = plain
            .highlight(Language::Css, fixtures::SMALL_CSS)
            .unwrap();
        let b = numbered
            .highlight(Language::Css, fixtures::SMALL_CSS)
            .unwrap();
        assert_ne!(a, b);
        assert!(b.contains("<span class=\"ln\">"));
    }
}
