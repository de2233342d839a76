//! Regression coverage for the faithful pipeline's known limitations.
//!
//! These behaviors are contractual for the faithful engine: callers who
//! need the corrected output opt into the structured engine, which is
//! exercised alongside each quirk here.

use marklite::{ConvertOptions, Engine, MarkdownToHtml};
use pretty_assertions::assert_eq;

fn faithful(source: &str) -> String {
    MarkdownToHtml::with_defaults().convert(source)
}

fn structured(source: &str) -> String {
    MarkdownToHtml::new(ConvertOptions {
        engine: Engine::Structured,
        ..Default::default()
    })
    .convert(source)
}

#[test]
fn test_separated_lists_collapse_into_one_ul() {
    let source = "- a\n- b\n\nmiddle\n\n- c";
    // One greedy wrap spans the first <li> to the last </li>, leaving
    // stray paragraph markers inside the merged list.
    assert_eq!(
        faithful(source),
        "<ul><li>a</li>\n<li>b</li></p><p>middle</p><p><li>c</li></ul>"
    );
    assert_eq!(
        structured(source),
        "<ul><li>a</li><li>b</li></ul>\n<p>middle</p>\n<ul><li>c</li></ul>"
    );
}

#[test]
fn test_ordered_items_never_get_an_ol() {
    let source = "1. one\n2. two";
    assert_eq!(faithful(source), "<p><li>one</li>\n<li>two</li></p>");
    assert_eq!(structured(source), "<ol><li>one</li><li>two</li></ol>");
}

#[test]
fn test_emphasis_rewrites_inside_code_spans() {
    let source = "`a*b*c`";
    // Emphasis runs before inline code, so the asterisks are already
    // rewritten by the time the backtick pass sees them.
    assert_eq!(faithful(source), "<p><code>a<em>b</em>c</code></p>");
    assert_eq!(structured(source), "<p><code>a*b*c</code></p>");
}

#[test]
fn test_consecutive_quote_lines_stay_separate() {
    let source = "> a\n> b";
    assert_eq!(
        faithful(source),
        "<blockquote>a</blockquote>\n<blockquote>b</blockquote>"
    );
    assert_eq!(structured(source), "<blockquote>a b</blockquote>");
}

#[test]
fn test_raw_html_passthrough_vs_escaping() {
    let source = "tags like <em> stay raw";
    assert_eq!(faithful(source), "<p>tags like <em> stay raw</p>");
    assert_eq!(structured(source), "<p>tags like &lt;em&gt; stay raw</p>");
}

#[test]
fn test_ordered_items_between_unordered_join_the_merged_ul() {
    // The greedy wrap runs before the ordered pass, so ordered lines
    // between two unordered items end up inside the single <ul>.
    let source = "- a\n1. b\n- c";
    assert_eq!(
        faithful(source),
        "<ul><li>a</li>\n<li>b</li>\n<li>c</li></ul>"
    );
}
