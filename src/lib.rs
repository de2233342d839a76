//! # marklite
//!
//! Markdown to HTML converter built as an ordered pipeline of regex
//! rewrite passes, with an optional structured (AST-based) engine.
//!
//! ## Example
//!
//! ```
//! use marklite::{MarkdownToHtml, ConvertOptions};
//!
//! let converter = MarkdownToHtml::new(ConvertOptions::default());
//! let html = converter.convert("# Hello\n\nSome *text*.");
//! assert_eq!(html, "<h1>Hello</h1><p>Some <em>text</em>.</p>");
//! ```

pub mod converter;
pub mod core;
pub mod error;
pub mod parser;
pub mod render;

pub use converter::MarkdownToHtml;
pub use error::{Error, Result};
pub use render::{HtmlRenderer, Renderer};

use std::str::FromStr;

/// Options for Markdown to HTML conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Which conversion engine to use.
    pub engine: Engine,
    /// Whether to entity-escape raw HTML in the source before converting.
    ///
    /// Only meaningful for [`Engine::Faithful`], which otherwise passes
    /// `<`, `>` and `&` through verbatim. The structured engine always
    /// escapes its text output.
    pub escape_html: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            engine: Engine::Faithful,
            escape_html: false,
        }
    }
}

/// Selects how Markdown is turned into HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// Ordered whole-text regex rewrites, reproducing the behavior of the
    /// original pipeline exactly, quirks included: one merged `<ul>` per
    /// document, line-scoped blockquotes, ordered items never wrapped in
    /// `<ol>`, and no escaping of raw HTML in the source.
    Faithful,
    /// Line-oriented block parser plus AST renderer. Fixes the pipeline's
    /// known limitations (per-block lists, `<ol>`, merged blockquotes)
    /// and escapes text content. Output differs from [`Engine::Faithful`].
    Structured,
}

impl FromStr for Engine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "faithful" => Ok(Engine::Faithful),
            "structured" => Ok(Engine::Structured),
            other => Err(Error::UnknownEngine(other.to_string())),
        }
    }
}
