//! Benchmark inputs: static source samples plus a synthetic generator.
//!
//! Everything here is inert sample text fed to the highlighter engines,
//! including the `Cache` class in [`MEDIUM_CODE`].

use crate::Language;
use std::borrow::Cow;

pub const SMALL_CODE: &str = r#"const greet = (name) => {
  const message = `Hello, ${name}!`;
  console.log(message);
  return message;
};

greet("world");
"#;

pub const MEDIUM_CODE: &str = r#"class Cache {
  constructor(capacity = 64) {
    this.capacity = capacity;
    this.entries = new Map();
  }

  get(key) {
    if (!this.entries.has(key)) {
      return undefined;
    }
    const value = this.entries.get(key);
    this.entries.delete(key);
    this.entries.set(key, value);
    return value;
  }

  set(key, value) {
    if (this.entries.size >= this.capacity) {
      const oldest = this.entries.keys().next().value;
      this.entries.delete(oldest);
    }
    this.entries.set(key, value);
  }

  get size() {
    return this.entries.size;
  }
}

const cache = new Cache(16);
for (let i = 0; i < 100; i++) {
  cache.set(`key-${i}`, { index: i, label: `value ${i}` });
}
console.log(cache.get("key-99"), cache.size);
"#;

pub const LARGE_CODE: &str = r#"// Token stream utilities for the playground editor.

export interface Token {
  kind: TokenKind;
  text: string;
  offset: number;
}

export type TokenKind =
  | "identifier"
  | "keyword"
  | "string"
  | "number"
  | "punctuation"
  | "comment";

const KEYWORDS = new Set([
  "const", "let", "var", "function", "class", "return",
  "if", "else", "for", "while", "import", "export",
]);

export class Scanner {
  private offset = 0;

  constructor(private readonly source: string) {}

  *tokens(): IterableIterator<Token> {
    while (this.offset < this.source.length) {
      const start = this.offset;
      const ch = this.source[this.offset];
      if (/\s/.test(ch)) {
        this.offset += 1;
        continue;
      }
      if (ch === "/" && this.source[this.offset + 1] === "/") {
        this.offset = this.lineEnd();
        yield { kind: "comment", text: this.slice(start), offset: start };
        continue;
      }
      if (ch === '"' || ch === "'" || ch === "`") {
        this.offset = this.stringEnd(ch);
        yield { kind: "string", text: this.slice(start), offset: start };
        continue;
      }
      if (/[0-9]/.test(ch)) {
        while (/[0-9._]/.test(this.source[this.offset] ?? "")) {
          this.offset += 1;
        }
        yield { kind: "number", text: this.slice(start), offset: start };
        continue;
      }
      if (/[A-Za-z_$]/.test(ch)) {
        while (/[A-Za-z0-9_$]/.test(this.source[this.offset] ?? "")) {
          this.offset += 1;
        }
        const text = this.slice(start);
        const kind = KEYWORDS.has(text) ? "keyword" : "identifier";
        yield { kind, text, offset: start };
        continue;
      }
      this.offset += 1;
      yield { kind: "punctuation", text: this.slice(start), offset: start };
    }
  }

  private slice(start: number): string {
    return this.source.slice(start, this.offset);
  }

  private lineEnd(): number {
    const next = this.source.indexOf("\n", this.offset);
    return next === -1 ? this.source.length : next;
  }

  private stringEnd(quote: string): number {
    let i = this.offset + 1;
    while (i < this.source.length && this.source[i] !== quote) {
      i += this.source[i] === "\\" ? 2 : 1;
    }
    return Math.min(i + 1, this.source.length);
  }
}

export function tokenize(source: string): Token[] {
  return [...new Scanner(source).tokens()];
}
"#;

pub const SMALL_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Playground</title>
  </head>
  <body>
    <h1>Hello, world!</h1>
    <!-- rendered by the demo server -->
  </body>
</html>
"#;

pub const MEDIUM_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Release notes</title>
    <link rel="stylesheet" href="/static/notes.css">
  </head>
  <body>
    <nav class="top">
      <a href="/">Home</a>
      <a href="/releases" class="active">Releases</a>
      <a href="/about">About</a>
    </nav>
    <main>
      <article data-version="2.4.0">
        <h2>2.4.0</h2>
        <ul>
          <li>Faster startup on large workspaces</li>
          <li>New <code>--trace</code> flag</li>
          <li>Fixed crash when config file is empty</li>
        </ul>
      </article>
      <article data-version="2.3.1">
        <h2>2.3.1</h2>
        <table>
          <tr><th>Area</th><th>Change</th></tr>
          <tr><td>Parser</td><td>Recovers from unterminated strings</td></tr>
          <tr><td>Renderer</td><td>Escapes attribute values</td></tr>
        </table>
      </article>
      <form action="/subscribe" method="post">
        <label for="email">Get notified</label>
        <input type="email" id="email" name="email" required>
        <button type="submit">Subscribe</button>
      </form>
    </main>
    <!-- build 7c21f9 -->
  </body>
</html>
"#;

pub const SMALL_CSS: &str = r#"body {
  margin: 0;
  font-family: sans-serif;
  color: #222;
}

h1 {
  font-size: 2rem;
}
"#;

pub const MEDIUM_CSS: &str = r#":root {
  --accent: #3366ff;
  --gutter: 1.5rem;
}

body {
  margin: 0 auto;
  max-width: 72ch;
  padding: var(--gutter);
  font-family: "Inter", sans-serif;
  line-height: 1.6;
}

nav.top a {
  color: var(--accent);
  text-decoration: none;
  margin-right: calc(var(--gutter) / 2);
}

nav.top a.active {
  border-bottom: 2px solid var(--accent);
}

article table {
  border-collapse: collapse;
  width: 100%;
}

article td,
article th {
  border: 1px solid #ddd;
  padding: 0.25rem 0.5rem;
}

/* small screens collapse the table into rows */
@media (max-width: 40rem) {
  article table,
  article td {
    display: block;
    width: auto;
  }
}
"#;

pub const DEFAULT_GENERATED_LINES: usize = 10_000;

/// Synthetic JavaScript-like input: `lines` lines, cycling through five fixed
/// templates with the zero-based line index substituted in. Concatenation
/// only, the output is never parsed here.
pub fn generate_large_source(lines: usize) -> String {
    let mut source = String::with_capacity(lines * 48);
    for i in 0..lines {
        match i % 5 {
            0 => source.push_str(&format!("const value{i} = compute({i});\n")),
            1 => source.push_str(&format!(
                "function helper{i}(input) {{ return input * {i}; }}\n"
            )),
            2 => source.push_str(&format!("let result{i} = helper{i}(value{i});\n")),
            3 => source.push_str(&format!("console.log(\"iteration {i}\", result{i});\n")),
            _ => source.push_str(&format!(
                "export const item{i} = {{ id: {i}, label: \"item-{i}\" }};\n"
            )),
        }
    }
    source
}

pub struct Fixture {
    pub name: &'static str,
    pub language: Language,
    pub text: Cow<'static, str>,
}

pub fn static_fixtures() -> Vec<Fixture> {
    vec![
        Fixture {
            name: "small_code",
            language: Language::Javascript,
            text: Cow::Borrowed(SMALL_CODE),
        },
        Fixture {
            name: "medium_code",
            language: Language::Javascript,
            text: Cow::Borrowed(MEDIUM_CODE),
        },
        Fixture {
            name: "large_code",
            language: Language::Javascript,
            text: Cow::Borrowed(LARGE_CODE),
        },
        Fixture {
            name: "small_html",
            language: Language::Html,
            text: Cow::Borrowed(SMALL_HTML),
        },
        Fixture {
            name: "medium_html",
            language: Language::Html,
            text: Cow::Borrowed(MEDIUM_HTML),
        },
        Fixture {
            name: "small_css",
            language: Language::Css,
            text: Cow::Borrowed(SMALL_CSS),
        },
        Fixture {
            name: "medium_css",
            language: Language::Css,
            text: Cow::Borrowed(MEDIUM_CSS),
        },
    ]
}

pub fn generated_fixture(lines: usize) -> Fixture {
    Fixture {
        name: "generated_code",
        language: Language::Javascript,
        text: Cow::Owned(generate_large_source(lines)),
    }
}
