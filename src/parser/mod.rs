//! Line-oriented block parser for the structured engine.
//!
//! Covers the same restricted Markdown subset as the faithful pipeline
//! (ATX headings to level 3, emphasis, links, images, inline code,
//! blockquotes, flat lists) but builds a block AST instead of rewriting
//! text, so lists stay separate, ordered lists are recognized as such
//! and consecutive quote lines merge into one blockquote.

mod inline;

pub use self::inline::parse_inlines;

use crate::core::ast::{Block, Document, Inline};

/// Parses Markdown source into a block-level document.
///
/// Total over all inputs: any line that matches no block marker is
/// paragraph text.
pub fn parse(source: &str) -> Document {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut quote: Vec<&str> = Vec::new();
    let mut list: Option<(bool, Vec<Vec<Inline>>)> = None;

    for line in source.lines() {
        if line.trim().is_empty() {
            flush_paragraph(&mut blocks, &mut paragraph);
            flush_quote(&mut blocks, &mut quote);
            flush_list(&mut blocks, &mut list);
            continue;
        }

        if let Some((level, rest)) = heading_line(line) {
            flush_paragraph(&mut blocks, &mut paragraph);
            flush_quote(&mut blocks, &mut quote);
            flush_list(&mut blocks, &mut list);
            blocks.push(Block::Heading {
                level,
                content: parse_inlines(rest),
            });
            continue;
        }

        if let Some(rest) = line.strip_prefix("> ") {
            flush_paragraph(&mut blocks, &mut paragraph);
            flush_list(&mut blocks, &mut list);
            quote.push(rest);
            continue;
        }

        if let Some(rest) = unordered_item(line) {
            flush_paragraph(&mut blocks, &mut paragraph);
            flush_quote(&mut blocks, &mut quote);
            push_item(&mut blocks, &mut list, false, rest);
            continue;
        }

        if let Some(rest) = ordered_item(line) {
            flush_paragraph(&mut blocks, &mut paragraph);
            flush_quote(&mut blocks, &mut quote);
            push_item(&mut blocks, &mut list, true, rest);
            continue;
        }

        flush_quote(&mut blocks, &mut quote);
        flush_list(&mut blocks, &mut list);
        paragraph.push(line);
    }

    flush_paragraph(&mut blocks, &mut paragraph);
    flush_quote(&mut blocks, &mut quote);
    flush_list(&mut blocks, &mut list);

    Document { blocks }
}

fn heading_line(line: &str) -> Option<(u8, &str)> {
    // Longest prefix first, mirroring the faithful pipeline's pass order.
    if let Some(rest) = line.strip_prefix("### ") {
        return Some((3, rest));
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return Some((2, rest));
    }
    line.strip_prefix("# ").map(|rest| (1, rest))
}

fn unordered_item(line: &str) -> Option<&str> {
    line.strip_prefix("* ").or_else(|| line.strip_prefix("- "))
}

fn ordered_item(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}

fn flush_paragraph(blocks: &mut Vec<Block>, lines: &mut Vec<&str>) {
    if lines.is_empty() {
        return;
    }
    let text = lines.join(" ");
    lines.clear();
    blocks.push(Block::Paragraph(parse_inlines(&text)));
}

fn flush_quote(blocks: &mut Vec<Block>, lines: &mut Vec<&str>) {
    if lines.is_empty() {
        return;
    }
    let text = lines.join(" ");
    lines.clear();
    blocks.push(Block::Blockquote(parse_inlines(&text)));
}

fn flush_list(blocks: &mut Vec<Block>, list: &mut Option<(bool, Vec<Vec<Inline>>)>) {
    if let Some((ordered, items)) = list.take() {
        blocks.push(Block::List { ordered, items });
    }
}

fn push_item(
    blocks: &mut Vec<Block>,
    list: &mut Option<(bool, Vec<Vec<Inline>>)>,
    ordered: bool,
    rest: &str,
) {
    // A marker change (ordered vs unordered) closes the current list.
    if matches!(list, Some((current, _)) if *current != ordered) {
        flush_list(blocks, list);
    }
    let (_, items) = list.get_or_insert_with(|| (ordered, Vec::new()));
    items.push(parse_inlines(rest));
}
