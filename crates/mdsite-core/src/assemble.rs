//! Block assembly
//!
//! Strips the block-level markup of a classified block and builds its element.
//! Everything except fenced code goes through the inline tokenizer.

use crate::convert::text_to_elements;
use md_parser::block::FENCE;
use md_parser::{BlockKind, heading_level, is_fence, ordered_item};
use mdsite_html::Element;

/// Build the element for a block of the given kind
///
/// Returns `None` for a paragraph with no visible content; such blocks are
/// left out of the document.
pub fn assemble_block(block: &str, kind: BlockKind) -> Option<Element> {
    match kind {
        BlockKind::Paragraph => paragraph_to_element(block),
        BlockKind::Heading => Some(heading_to_element(block)),
        BlockKind::Code => Some(code_to_element(block)),
        BlockKind::Quote => Some(quote_to_element(block)),
        BlockKind::UnorderedList => Some(list_to_element(block, "ul", strip_unordered_marker)),
        BlockKind::OrderedList => Some(list_to_element(block, "ol", strip_ordered_marker)),
    }
}

/// Collapse every run of whitespace (newlines included) to one space and trim
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn inline_children(text: &str) -> Vec<Element> {
    text_to_elements(&normalize_whitespace(text))
}

fn paragraph_to_element(block: &str) -> Option<Element> {
    let children = inline_children(block);
    if children.iter().all(is_blank_text) {
        return None;
    }
    Some(Element::parent("p", children))
}

/// Leaf with nothing but whitespace and no attributes
///
/// An `img` has an empty value but carries `src`, so it still counts as
/// content.
fn is_blank_text(element: &Element) -> bool {
    element.is_leaf()
        && element.attributes().is_empty()
        && element.value().is_none_or(|v| v.trim().is_empty())
}

fn heading_to_element(block: &str) -> Element {
    let level = heading_level(block).unwrap_or(1);
    let text = block.trim_start_matches('#');
    let text = text.strip_prefix(' ').unwrap_or(text);
    Element::parent(format!("h{}", level), inline_children(text))
}

/// Fenced code keeps its text verbatim apart from the fences and the
/// indentation shared by all lines
fn code_to_element(block: &str) -> Element {
    let mut lines: Vec<&str> = block.lines().collect();
    if lines.first().is_some_and(|line| is_fence(line)) {
        lines.remove(0);
    }
    if lines.last().is_some_and(|line| line.trim() == FENCE) {
        lines.pop();
    }

    let mut value = String::new();
    for line in dedent(&lines) {
        value.push_str(line);
        value.push('\n');
    }

    Element::parent("pre", vec![Element::leaf("code", value)])
}

/// Strip the leading whitespace shared by every non-blank line
///
/// Spaces and tabs are compared literally, so `\t` and `  ` share nothing.
fn dedent<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let prefix = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|&line| leading_whitespace(line))
        .reduce(common_prefix)
        .unwrap_or("");

    lines
        .iter()
        .map(|&line| {
            line.strip_prefix(prefix)
                .unwrap_or_else(|| line.trim_start_matches([' ', '\t']))
        })
        .collect()
}

fn leading_whitespace(line: &str) -> &str {
    let rest = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - rest.len()]
}

fn common_prefix<'a>(a: &'a str, b: &'a str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

fn quote_to_element(block: &str) -> Element {
    let stripped: Vec<&str> = block
        .lines()
        .map(|line| {
            let line = line.strip_prefix('>').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line)
        })
        .collect();
    Element::parent("blockquote", inline_children(&stripped.join("\n")))
}

/// One `li` per line, even when a line has no inline content
fn list_to_element(block: &str, tag: &str, strip_marker: fn(&str) -> &str) -> Element {
    let items = block
        .lines()
        .map(|line| Element::parent("li", inline_children(strip_marker(line))))
        .collect();
    Element::parent(tag, items)
}

fn strip_unordered_marker(line: &str) -> &str {
    line.strip_prefix("- ").unwrap_or(line)
}

fn strip_ordered_marker(line: &str) -> &str {
    ordered_item(line).map_or(line, |(_, content)| content)
}
