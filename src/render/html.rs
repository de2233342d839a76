use crate::core::ast::{Block, Document, Inline};
use crate::render::{escape_html_attr, escape_html_text, Renderer};

/// HTML renderer for the structured engine.
///
/// Unlike the faithful pipeline this escapes all text and attribute
/// content, wraps ordered lists in `<ol>` and emits one list element
/// per parsed list block.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, document: &Document) -> String {
        let mut out = Vec::with_capacity(document.blocks.len());
        for block in &document.blocks {
            out.push(render_block(block));
        }
        out.join("\n")
    }
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, content } => {
            format!("<h{level}>{}</h{level}>", render_inlines(content))
        }
        Block::Paragraph(content) => format!("<p>{}</p>", render_inlines(content)),
        Block::Blockquote(content) => {
            format!("<blockquote>{}</blockquote>", render_inlines(content))
        }
        Block::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            let mut out = format!("<{tag}>");
            for item in items {
                out.push_str("<li>");
                out.push_str(&render_inlines(item));
                out.push_str("</li>");
            }
            out.push_str(&format!("</{tag}>"));
            out
        }
    }
}

fn render_inlines(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(text) => out.push_str(&escape_html_text(text)),
            Inline::Code(code) => {
                out.push_str("<code>");
                out.push_str(&escape_html_text(code));
                out.push_str("</code>");
            }
            Inline::Emphasis(content) => {
                out.push_str("<em>");
                out.push_str(&render_inlines(content));
                out.push_str("</em>");
            }
            Inline::Strong(content) => {
                out.push_str("<strong>");
                out.push_str(&render_inlines(content));
                out.push_str("</strong>");
            }
            Inline::StrongEmphasis(content) => {
                out.push_str("<strong><em>");
                out.push_str(&render_inlines(content));
                out.push_str("</em></strong>");
            }
            Inline::Link { text, url } => {
                out.push_str(&format!(
                    "<a href=\"{}\">{}</a>",
                    escape_html_attr(url),
                    escape_html_text(text)
                ));
            }
            Inline::Image { alt, url } => {
                out.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\" />",
                    escape_html_attr(url),
                    escape_html_attr(alt)
                ));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    #[test]
    fn test_ordered_list_gets_ol() {
        let doc = parser::parse("1. a\n2. b");
        assert_eq!(
            HtmlRenderer.render(&doc),
            "<ol><li>a</li><li>b</li></ol>"
        );
    }

    #[test]
    fn test_text_content_is_escaped() {
        let doc = parser::parse("a <b> & c");
        assert_eq!(
            HtmlRenderer.render(&doc),
            "<p>a &lt;b&gt; &amp; c</p>"
        );
    }

    #[test]
    fn test_quote_lines_merge() {
        let doc = parser::parse("> a\n> b");
        assert_eq!(
            HtmlRenderer.render(&doc),
            "<blockquote>a b</blockquote>"
        );
    }

    #[test]
    fn test_code_span_is_escaped_but_not_reparsed() {
        let doc = parser::parse("`<em>*x*</em>`");
        assert_eq!(
            HtmlRenderer.render(&doc),
            "<p><code>&lt;em&gt;*x*&lt;/em&gt;</code></p>"
        );
    }
}
