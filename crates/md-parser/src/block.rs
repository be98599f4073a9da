//! Block splitting and classification
//!
//! A document is split into blocks on blank lines, then each block is
//! classified by its line structure alone. Inline content is not looked at.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Code fence marker
pub const FENCE: &str = "```";

/// The structural kind of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading => "heading",
            BlockKind::Code => "code",
            BlockKind::Quote => "quote",
            BlockKind::UnorderedList => "unordered_list",
            BlockKind::OrderedList => "ordered_list",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a document into trimmed, non-empty blocks
///
/// Blocks are separated by one or more blank (whitespace-only) lines.
/// Blank lines between an opening and a closing code fence do not split. A
/// fence that is never closed does not hold anything together: the lines
/// after it are split on blank lines like any others.
pub fn split_blocks(markdown: &str) -> Vec<String> {
    let normalized = markdown.replace("\r\n", "\n");
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    // Index in `current` of the fence line that is still open
    let mut open_fence: Option<usize> = None;

    for line in normalized.lines() {
        if is_fence(line) && !is_single_line_fence(line) {
            open_fence = match open_fence {
                Some(_) => None,
                None => Some(current.len()),
            };
        }

        if line.trim().is_empty() && open_fence.is_none() {
            flush_block(&mut current, &mut blocks);
        } else {
            current.push(line);
        }
    }

    if let Some(start) = open_fence {
        log::debug!("code fence never closed, splitting its lines as plain blocks");
        let unclosed = current.split_off(start);
        flush_block(&mut current, &mut blocks);
        for line in unclosed {
            if line.trim().is_empty() {
                flush_block(&mut current, &mut blocks);
            } else {
                current.push(line);
            }
        }
    }
    flush_block(&mut current, &mut blocks);

    blocks
}

fn flush_block(current: &mut Vec<&str>, blocks: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let block = current.join("\n");
    current.clear();

    let trimmed = block.trim();
    if !trimmed.is_empty() {
        blocks.push(trimmed.to_string());
    }
}

/// Whether a line opens or closes a code fence
pub fn is_fence(line: &str) -> bool {
    line.trim_start().starts_with(FENCE)
}

/// A line such as "```code```" that opens and closes on itself
fn is_single_line_fence(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 2 * FENCE.len() && trimmed.ends_with(FENCE)
}

/// Classify a block by its structure
///
/// Checks run in order: heading, code, quote, unordered list, ordered list.
/// Anything else is a paragraph.
pub fn classify(block: &str) -> BlockKind {
    let lines: Vec<&str> = block.lines().collect();
    if lines.is_empty() {
        return BlockKind::Paragraph;
    }

    if heading_level(block).is_some() {
        BlockKind::Heading
    } else if is_code_block(&lines) {
        BlockKind::Code
    } else if lines.iter().all(|line| line.starts_with('>')) {
        BlockKind::Quote
    } else if lines.iter().all(|line| line.starts_with("- ")) {
        BlockKind::UnorderedList
    } else if is_ordered_list(&lines) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

/// Heading level (1-6) when the first line is `#`s followed by a space
pub fn heading_level(block: &str) -> Option<u8> {
    let first = block.lines().next()?;
    let hashes = first.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && first[hashes..].starts_with(' ') {
        u8::try_from(hashes).ok()
    } else {
        None
    }
}

fn is_code_block(lines: &[&str]) -> bool {
    match (lines.first(), lines.last()) {
        (Some(first), Some(last)) if lines.len() >= 2 => {
            first.starts_with(FENCE) && last.trim() == FENCE
        }
        _ => false,
    }
}

/// Items must be numbered 1, 2, 3, ... with no gaps
fn is_ordered_list(lines: &[&str]) -> bool {
    lines
        .iter()
        .enumerate()
        .all(|(i, line)| matches!(ordered_item(line), Some((n, _)) if n as usize == i + 1))
}

/// Split an ordered list line such as `12. text` into its number and content
pub fn ordered_item(line: &str) -> Option<(u32, &str)> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let number = line[..digits].parse().ok()?;
    let content = line[digits..].strip_prefix(". ")?;
    Some((number, content))
}
