//! Golden snapshots pin the exact output of both engines for a document
//! exercising every supported construct.

use marklite::{ConvertOptions, Engine, MarkdownToHtml};
use pretty_assertions::assert_eq;

#[test]
fn golden_snapshot_faithful_output() {
    let source = include_str!("golden/sample.md");
    let converter = MarkdownToHtml::with_defaults();

    let html = converter.convert(source);

    let expected = include_str!("golden/sample_faithful.html");
    assert_eq!(html.trim_end(), expected.trim_end());
}

#[test]
fn golden_snapshot_structured_output() {
    let source = include_str!("golden/sample.md");
    let converter = MarkdownToHtml::new(ConvertOptions {
        engine: Engine::Structured,
        ..Default::default()
    });

    let html = converter.convert(source);

    let expected = include_str!("golden/sample_structured.html");
    assert_eq!(html.trim_end(), expected.trim_end());
}
