use super::Highlighter;
use crate::render::escape;
use crate::Language;
use anyhow::Result;
use synoptic::TokOpt;

const TAB_WIDTH: usize = 4;

/// Regex-based keyword engine. Rule sets come from synoptic's built-in
/// extension table where available, with a manual fallback per language.
pub struct Synoptic;

fn engine_for(language: Language) -> synoptic::Highlighter {
    if let Some(engine) = synoptic::from_extension(language.extension(), TAB_WIDTH) {
        return engine;
    }
    let mut engine = synoptic::Highlighter::new(TAB_WIDTH);
    match language {
        Language::Javascript => {
            engine.keyword(
                "keyword",
                r"\b(function|var|let|const|if|else|for|while|do|switch|case|break|continue|return|class|extends|import|export|from|default)\b",
            );
            engine.keyword("string", r#""[^"]*"|'[^']*'|`[^`]*`"#);
            engine.keyword("comment", r"//.*$");
            engine.bounded("comment", r"/\*", r"\*/", false);
        }
        Language::Html => {
            engine.keyword("string", r#""[^"]*""#);
            engine.bounded("comment", r"<!--", r"-->", false);
        }
        Language::Css => {
            engine.keyword("string", r#""[^"]*""#);
            engine.keyword("number", r"\b\d+(\.\d+)?(px|em|rem|ch|%)?\b");
            engine.bounded("comment", r"/\*", r"\*/", false);
        }
    }
    engine
}

impl Highlighter for Synoptic {
    fn name(&self) -> &'static str {
        "synoptic"
    }

    fn highlight(&self, language: Language, source: &str) -> Result<String> {
        let lines: Vec<String> = source.lines().map(str::to_string).collect();
        let mut engine = engine_for(language);
        engine.run(&lines);

        let mut out = String::with_capacity(source.len() * 2);
        out.push_str("<pre class=\"hl\">\n");
        for (row, line) in lines.iter().enumerate() {
            for token in engine.line(row, line) {
                match token {
                    TokOpt::Some(text, kind) => {
                        out.push_str(&format!("<span class=\"{kind}\">{}</span>", escape(&text)));
                    }
                    TokOpt::None(text) => out.push_str(&escape(&text)),
                }
            }
            out.push('\n');
        }
        out.push_str("</pre>");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_highlight_produces_markup() {
        let html = Synoptic
            .highlight(Language::Javascript, "const x = \"y\";\n")
            .unwrap();
        assert!(html.starts_with("<pre class=\"hl\">"));
        assert!(html.contains("<span"));
        assert!(html.contains("const"));
    }

    #[test]
    fn test_highlight_escapes_source() {
        let html = Synoptic
            .highlight(Language::Html, fixtures::SMALL_HTML)
            .unwrap();
        assert!(html.contains("&lt;"));
        assert!(!html.contains("<body>"));
    }

    #[test]
    fn test_every_language_renders() {
        for (language, source) in [
            (Language::Javascript, fixtures::SMALL_CODE),
            (Language::Html, fixtures::SMALL_HTML),
            (Language::Css, fixtures::SMALL_CSS),
        ] {
            let html = Synoptic.highlight(language, source).unwrap();
            assert!(!html.is_empty(), "{language:?}");
        }
    }
}
