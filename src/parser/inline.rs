//! Inline tokenizer for the structured engine.

use crate::core::ast::Inline;

/// Parses inline Markdown into a sequence of inline nodes.
///
/// Unpaired delimiters fall back to literal text, so the function is
/// total: every input produces some sequence of nodes. Code spans are
/// recognized here, before any emphasis inside them can be rewritten,
/// which is the structured engine's fix for the pipeline's pass-order
/// interference.
pub fn parse_inlines(text: &str) -> Vec<Inline> {
    let mut nodes = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        if let Some((code, after)) = code_span(rest) {
            flush(&mut nodes, &mut plain);
            nodes.push(Inline::Code(code.to_string()));
            rest = after;
            continue;
        }

        if rest.starts_with("![") {
            if let Some((alt, url, after)) = bracket_span(&rest[1..]) {
                flush(&mut nodes, &mut plain);
                nodes.push(Inline::Image {
                    alt: alt.to_string(),
                    url: url.to_string(),
                });
                rest = after;
                continue;
            }
        }

        if rest.starts_with('[') {
            if let Some((text, url, after)) = bracket_span(rest) {
                flush(&mut nodes, &mut plain);
                nodes.push(Inline::Link {
                    text: text.to_string(),
                    url: url.to_string(),
                });
                rest = after;
                continue;
            }
        }

        if let Some((delimiter, inner, after)) = emphasis_span(rest) {
            flush(&mut nodes, &mut plain);
            let content = parse_inlines(inner);
            nodes.push(match delimiter {
                "***" => Inline::StrongEmphasis(content),
                "**" | "__" => Inline::Strong(content),
                _ => Inline::Emphasis(content),
            });
            rest = after;
            continue;
        }

        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            plain.push(ch);
        }
        rest = chars.as_str();
    }

    flush(&mut nodes, &mut plain);
    nodes
}

fn flush(nodes: &mut Vec<Inline>, plain: &mut String) {
    if !plain.is_empty() {
        nodes.push(Inline::Text(std::mem::take(plain)));
    }
}

/// `` `code` `` with the content kept raw. Returns (content, remainder).
fn code_span(rest: &str) -> Option<(&str, &str)> {
    let body = rest.strip_prefix('`')?;
    let end = body.find('`')?;
    Some((&body[..end], &body[end + 1..]))
}

/// `[first](second)` starting at the opening bracket.
/// Returns (first, second, remainder).
fn bracket_span(rest: &str) -> Option<(&str, &str, &str)> {
    let body = rest.strip_prefix('[')?;
    let close = body.find("](")?;
    let target = &body[close + 2..];
    let end = target.find(')')?;
    // Skip past ')' in the original slice. For images the caller strips
    // the leading '!' itself.
    Some((&body[..close], &target[..end], &target[end + 1..]))
}

/// Emphasis delimiters, most specific first.
const DELIMITERS: [&str; 5] = ["***", "**", "*", "__", "_"];

/// A delimiter with a matching closer on the same logical text.
/// Returns (delimiter, inner, remainder); the inner text is non-greedy.
fn emphasis_span(rest: &str) -> Option<(&'static str, &str, &str)> {
    for delimiter in DELIMITERS {
        let Some(body) = rest.strip_prefix(delimiter) else {
            continue;
        };
        if let Some(end) = body.find(delimiter) {
            let inner = &body[..end];
            if inner.is_empty() {
                continue;
            }
            return Some((delimiter, inner, &body[end + delimiter.len()..]));
        }
    }
    None
}
