//! Markdown document to HTML element tree
//!
//! Splits a document into blocks, classifies and assembles each one, and
//! wraps the results in a single `div`.

use crate::assemble::assemble_block;
use crate::error::{Error, Result};
use md_parser::{classify, split_blocks};
use mdsite_html::{Element, element_to_html};

/// Convert a markdown document to an element tree rooted at a `div`
pub fn markdown_to_element(markdown: &str) -> Element {
    let blocks = split_blocks(markdown);
    log::debug!("split document into {} blocks", blocks.len());

    let mut children = Vec::with_capacity(blocks.len());
    for (i, block) in blocks.iter().enumerate() {
        let kind = classify(block);
        log::debug!("block {} classified as {}", i, kind);

        match assemble_block(block, kind) {
            Some(element) => children.push(element),
            None => log::debug!("block {} has no content, dropped", i),
        }
    }

    Element::parent("div", children)
}

/// Convert a markdown document straight to an HTML string
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    let root = markdown_to_element(markdown);
    Ok(element_to_html(&root)?)
}

/// Page title: the text of the first line starting with `# `
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(Error::NoHeading)
}

#[cfg(test)]
mod tests;
