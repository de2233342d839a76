//! Block-level AST for the structured engine.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading with level 1-3, matching the `#`-`###` syntax subset.
    Heading { level: u8, content: Vec<Inline> },
    Paragraph(Vec<Inline>),
    /// Consecutive `> ` lines merged into a single quote.
    Blockquote(Vec<Inline>),
    List {
        ordered: bool,
        items: Vec<Vec<Inline>>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    /// Inline code span; content is raw, never re-parsed for emphasis.
    Code(String),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    StrongEmphasis(Vec<Inline>),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}
