//! Emphasis pass - bold, italic and combined markers.

use regex::Regex;

/// Rewrites emphasis markers, most-specific delimiter first.
///
/// All patterns are non-greedy and stay within a single line (`.` does
/// not cross `\n`), so an unpaired marker never swallows the rest of the
/// document.
pub struct EmphasisPass {
    bold_italic: Regex,
    bold: Regex,
    italic: Regex,
    bold_underscore: Regex,
    italic_underscore: Regex,
}

impl EmphasisPass {
    pub fn new() -> Self {
        Self {
            bold_italic: Regex::new(r"\*\*\*(.*?)\*\*\*").unwrap(),
            bold: Regex::new(r"\*\*(.*?)\*\*").unwrap(),
            italic: Regex::new(r"\*(.*?)\*").unwrap(),
            bold_underscore: Regex::new(r"__(.*?)__").unwrap(),
            italic_underscore: Regex::new(r"_(.*?)_").unwrap(),
        }
    }

    pub fn apply(&self, text: &str) -> String {
        let text = self
            .bold_italic
            .replace_all(text, "<strong><em>${1}</em></strong>");
        let text = self.bold.replace_all(&text, "<strong>${1}</strong>");
        let text = self.italic.replace_all(&text, "<em>${1}</em>");
        let text = self
            .bold_underscore
            .replace_all(&text, "<strong>${1}</strong>");
        self.italic_underscore
            .replace_all(&text, "<em>${1}</em>")
            .into_owned()
    }
}

impl Default for EmphasisPass {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_and_italic() {
        let pass = EmphasisPass::new();
        assert_eq!(pass.apply("**b**"), "<strong>b</strong>");
        assert_eq!(pass.apply("*i*"), "<em>i</em>");
        assert_eq!(pass.apply("***x***"), "<strong><em>x</em></strong>");
    }

    #[test]
    fn test_underscore_variants() {
        let pass = EmphasisPass::new();
        assert_eq!(pass.apply("__b__"), "<strong>b</strong>");
        assert_eq!(pass.apply("_i_"), "<em>i</em>");
    }

    #[test]
    fn test_non_greedy_within_line() {
        let pass = EmphasisPass::new();
        assert_eq!(pass.apply("*a* and *b*"), "<em>a</em> and <em>b</em>");
    }

    #[test]
    fn test_unpaired_marker_passes_through() {
        let pass = EmphasisPass::new();
        assert_eq!(pass.apply("2 * 3 = 6"), "2 * 3 = 6");
    }

    #[test]
    fn test_marker_does_not_cross_lines() {
        let pass = EmphasisPass::new();
        assert_eq!(pass.apply("*a\nb*"), "*a\nb*");
    }
}
