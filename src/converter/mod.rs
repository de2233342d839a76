//! Converter modules for Markdown to HTML transformation.

mod blocks;
mod emphasis;
mod headings;
mod paragraphs;
mod spans;

use crate::render::{HtmlRenderer, Renderer};
use crate::{parser, ConvertOptions, Engine, Result};
use std::path::Path;

pub use self::blocks::BlockPass;
pub use self::emphasis::EmphasisPass;
pub use self::headings::HeadingPass;
pub use self::paragraphs::ParagraphPass;
pub use self::spans::SpanPass;

/// Main converter struct that orchestrates Markdown to HTML conversion.
///
/// Compiles every pass's patterns once at construction; `convert` itself
/// is a pure function of its input and cannot fail.
pub struct MarkdownToHtml {
    options: ConvertOptions,
    headings: HeadingPass,
    emphasis: EmphasisPass,
    spans: SpanPass,
    blocks: BlockPass,
    paragraphs: ParagraphPass,
}

impl MarkdownToHtml {
    /// Creates a new converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            headings: HeadingPass::new(),
            emphasis: EmphasisPass::new(),
            spans: SpanPass::new(),
            blocks: BlockPass::new(),
            paragraphs: ParagraphPass::new(),
        }
    }

    /// Creates a new converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(ConvertOptions::default())
    }

    /// Converts Markdown source to an HTML fragment string.
    ///
    /// Total over all inputs: unsupported or malformed syntax passes
    /// through unmodified rather than producing an error.
    pub fn convert(&self, markdown: &str) -> String {
        match self.options.engine {
            Engine::Faithful => self.convert_faithful(markdown),
            Engine::Structured => {
                let document = parser::parse(markdown);
                HtmlRenderer.render(&document)
            }
        }
    }

    /// Reads a file and converts its contents.
    ///
    /// # Arguments
    /// * `path` - Path to the Markdown file
    ///
    /// # Returns
    /// The converted HTML content as a String.
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let source = std::fs::read_to_string(path)?;
        Ok(self.convert(&source))
    }

    fn convert_faithful(&self, markdown: &str) -> String {
        let source = if self.options.escape_html {
            escape_source(markdown)
        } else {
            markdown.to_string()
        };

        // Pass order is contractual: every pass rewrites the previous
        // pass's output, and later passes assume earlier syntax is gone.
        let text = self.headings.apply(&source);
        let text = self.emphasis.apply(&text);
        let text = self.spans.apply(&text);
        let text = self.blocks.apply(&text);
        self.paragraphs.apply(&text)
    }
}

/// Entity-escapes raw HTML in the source before any pass runs.
///
/// Escapes `&` and `<` only. A bare `>` is inert in HTML output, and
/// escaping it would destroy `> ` blockquote markers before the block
/// pass sees them.
fn escape_source(source: &str) -> String {
    let mut escaped = String::with_capacity(source.len());
    for ch in source.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
