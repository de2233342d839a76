//! Paragraph pass - chunk wrapping and block-tag cleanup.

use regex::Regex;

/// Splits the text on blank-line boundaries, wraps each chunk in
/// `<p>...</p>`, then strips the wrappers that landed immediately
/// around block-level tags (`<h1>`-`<h6>`, `<ul>`, `<blockquote>`).
///
/// The cleanup only matches literally adjacent markers: `<p></p>` with
/// any content between the tags, even whitespace, survives.
pub struct ParagraphPass {
    open_before_block: Regex,
    close_after_block: Regex,
    empty: Regex,
}

impl ParagraphPass {
    pub fn new() -> Self {
        Self {
            open_before_block: Regex::new(r"<p>(<(?:h[1-6]|ul|blockquote)>)").unwrap(),
            close_after_block: Regex::new(r"(</(?:h[1-6]|ul|blockquote)>)</p>").unwrap(),
            empty: Regex::new(r"<p></p>").unwrap(),
        }
    }

    pub fn apply(&self, text: &str) -> String {
        let wrapped: String = text
            .split("\n\n")
            .map(|chunk| format!("<p>{chunk}</p>"))
            .collect();
        let text = self.open_before_block.replace_all(&wrapped, "${1}");
        let text = self.close_after_block.replace_all(&text, "${1}");
        self.empty.replace_all(&text, "").into_owned()
    }
}

impl Default for ParagraphPass {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_chunks_are_wrapped() {
        let pass = ParagraphPass::new();
        assert_eq!(pass.apply("a\n\nb"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_block_tags_shed_their_wrapper() {
        let pass = ParagraphPass::new();
        assert_eq!(pass.apply("<h1>T</h1>"), "<h1>T</h1>");
        assert_eq!(pass.apply("<ul><li>a</li></ul>"), "<ul><li>a</li></ul>");
        assert_eq!(
            pass.apply("<blockquote>q</blockquote>"),
            "<blockquote>q</blockquote>"
        );
    }

    #[test]
    fn test_empty_input_collapses_to_nothing() {
        let pass = ParagraphPass::new();
        assert_eq!(pass.apply(""), "");
    }

    #[test]
    fn test_whitespace_only_paragraph_survives() {
        let pass = ParagraphPass::new();
        assert_eq!(pass.apply(" "), "<p> </p>");
    }

    #[test]
    fn test_inline_tags_keep_their_wrapper() {
        let pass = ParagraphPass::new();
        assert_eq!(
            pass.apply("<strong>b</strong>"),
            "<p><strong>b</strong></p>"
        );
    }
}
