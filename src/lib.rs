use anyhow::bail;
use std::str::FromStr;

pub mod backends;
pub mod fixtures;
pub mod measure;
pub mod render;

pub use backends::{Highlighter, Synoptic, Syntect, TreeSitter};
pub use render::RenderOptions;

pub type Chunk = (Tag, String);

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Language {
    Javascript,
    Html,
    Css,
}

impl Language {
    pub const VALUES: [Self; 3] = [Self::Javascript, Self::Html, Self::Css];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Javascript => "javascript",
            Self::Html => "html",
            Self::Css => "css",
        }
    }

    /// Extension used by engines that resolve languages per file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Javascript => "js",
            Self::Html => "html",
            Self::Css => "css",
        }
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "javascript" | "js" => Language::Javascript,
            "html" => Language::Html,
            "css" => Language::Css,
            other => bail!("Unsupported language: {other}"),
        })
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Tag {
    Text,    // Text that shouldn't be emphasized.
    Name,    // A tag or keyword.
    String,  // A string value.
    Number,  // A number value.
    Boolean, // A boolean value.
    Comment, // A comment.
}

impl Tag {
    pub const VALUES: [Self; 6] = [
        Self::Text,
        Self::Name,
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::Comment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Text => "",
            Tag::Name => "name",
            Tag::String => "string",
            Tag::Number => "number",
            Tag::Boolean => "boolean",
            Tag::Comment => "comment",
        }
    }
}
