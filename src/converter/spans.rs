//! Span pass - images, links and inline code.

use regex::Regex;

/// Rewrites inline spans: `![alt](url)`, `[text](url)` and `` `code` ``.
///
/// Images must be rewritten before links because link syntax is a subset
/// of image syntax; running links first would leave a stray `!` behind.
/// Inline code runs after the emphasis pass, so emphasis markers inside
/// a code span have already been rewritten by the time this pass sees
/// them.
pub struct SpanPass {
    image: Regex,
    link: Regex,
    code: Regex,
}

impl SpanPass {
    pub fn new() -> Self {
        Self {
            image: Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap(),
            link: Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap(),
            code: Regex::new(r"`(.*?)`").unwrap(),
        }
    }

    pub fn apply(&self, text: &str) -> String {
        let text = self
            .image
            .replace_all(text, r#"<img src="${2}" alt="${1}" />"#);
        let text = self.link.replace_all(&text, r#"<a href="${2}">${1}</a>"#);
        self.code
            .replace_all(&text, "<code>${1}</code>")
            .into_owned()
    }
}

impl Default for SpanPass {
    fn default() -> Self {
        Self::new()
    }
}
