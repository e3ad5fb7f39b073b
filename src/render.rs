//! Turns tagged chunks into HTML, applying the presentational variants the
//! benchmark sweeps: line-number gutters, diff line classes, and annotation
//! markers. Engine output itself is never touched.

use crate::{Chunk, Tag};

/// Comment token that marks a line as annotated. The marker never reaches
/// the rendered output.
pub const ANNOTATION_MARKER: &str = "[!mark]";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    pub line_numbers: bool,
    pub diff_markers: bool,
    pub annotations: bool,
    pub cache: bool,
}

impl RenderOptions {
    pub fn all() -> Self {
        RenderOptions {
            line_numbers: true,
            diff_markers: true,
            annotations: true,
            cache: true,
        }
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

/// Splits a chunk stream at newlines so that line-oriented options can wrap
/// complete lines. A chunk may span any number of lines.
fn split_lines(chunks: &[Chunk]) -> Vec<Vec<(Tag, String)>> {
    let mut lines = Vec::new();
    let mut current: Vec<(Tag, String)> = Vec::new();
    for (tag, text) in chunks {
        let mut rest = text.as_str();
        while let Some(pos) = rest.find('\n') {
            if pos > 0 {
                current.push((*tag, rest[..pos].to_string()));
            }
            lines.push(std::mem::take(&mut current));
            rest = &rest[pos + 1..];
        }
        if !rest.is_empty() {
            current.push((*tag, rest.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn render_html(chunks: &[Chunk], options: &RenderOptions) -> String {
    let lines = split_lines(chunks);
    let mut out = String::from("<pre class=\"hl\">\n");
    for (index, runs) in lines.iter().enumerate() {
        let raw: String = runs.iter().map(|(_, text)| text.as_str()).collect();

        let mut classes = vec!["line"];
        if options.diff_markers {
            match raw.trim_start().chars().next() {
                Some('+') => classes.push("add"),
                Some('-') => classes.push("del"),
                _ => {}
            }
        }
        let annotated = options.annotations && raw.contains(ANNOTATION_MARKER);
        if annotated {
            classes.push("annotated");
        }

        out.push_str(&format!("<span class=\"{}\">", classes.join(" ")));
        if options.line_numbers {
            out.push_str(&format!("<span class=\"ln\">{:>4}</span>", index + 1));
        }
        for (tag, text) in runs {
            if annotated && text.contains(ANNOTATION_MARKER) {
                continue;
            }
            let escaped = escape(text);
            if tag.as_str().is_empty() {
                out.push_str(&escaped);
            } else {
                out.push_str(&format!("<span class=\"{}\">{escaped}</span>", tag.as_str()));
            }
        }
        out.push_str("</span>\n");
    }
    out.push_str("</pre>");
    out
}
