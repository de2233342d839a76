//! Block pass - blockquotes and list items.

use regex::Regex;

/// Rewrites `> ` quote lines and `* `/`- `/`1. ` list item lines.
///
/// Blockquotes are line-scoped: each matching line gets its own tag pair
/// and consecutive quote lines are not merged. Unordered items are
/// wrapped exactly once, by a single greedy match spanning the first
/// `<li>` to the last `</li>` in the whole document, so separate lists
/// collapse into one `<ul>`. Ordered items are rewritten after that wrap
/// and never receive an `<ol>` of their own.
pub struct BlockPass {
    quote: Regex,
    unordered_item: Regex,
    list_wrap: Regex,
    ordered_item: Regex,
}

impl BlockPass {
    pub fn new() -> Self {
        Self {
            quote: Regex::new(r"(?m)^> (.*)$").unwrap(),
            unordered_item: Regex::new(r"(?m)^[*-] (.*)$").unwrap(),
            list_wrap: Regex::new(r"(?s)(<li>.*</li>)").unwrap(),
            ordered_item: Regex::new(r"(?m)^\d+\. (.*)$").unwrap(),
        }
    }

    pub fn apply(&self, text: &str) -> String {
        let text = self
            .quote
            .replace_all(text, "<blockquote>${1}</blockquote>");
        let text = self.unordered_item.replace_all(&text, "<li>${1}</li>");
        // First match only; (?s) makes the greedy `.*` span lines.
        let text = self.list_wrap.replace(&text, "<ul>${1}</ul>");
        self.ordered_item
            .replace_all(&text, "<li>${1}</li>")
            .into_owned()
    }
}

impl Default for BlockPass {
    fn default() -> Self {
        Self::new()
    }
}
