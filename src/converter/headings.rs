//! Heading pass - rewrites ATX heading lines.

use regex::Regex;

/// Rewrites lines beginning with `# `, `## ` or `### ` into `<h1>`-`<h3>`.
///
/// Checked longest-prefix-first so `### ` lines are consumed before the
/// shorter patterns can match their leading `#`.
pub struct HeadingPass {
    h3: Regex,
    h2: Regex,
    h1: Regex,
}

impl HeadingPass {
    pub fn new() -> Self {
        Self {
            h3: Regex::new(r"(?m)^### (.*)$").unwrap(),
            h2: Regex::new(r"(?m)^## (.*)$").unwrap(),
            h1: Regex::new(r"(?m)^# (.*)$").unwrap(),
        }
    }

    pub fn apply(&self, text: &str) -> String {
        let text = self.h3.replace_all(text, "<h3>${1}</h3>");
        let text = self.h2.replace_all(&text, "<h2>${1}</h2>");
        self.h1.replace_all(&text, "<h1>${1}</h1>").into_owned()
    }
}

impl Default for HeadingPass {
    fn default() -> Self {
        Self::new()
    }
}
