//! Element tree to HTML writer
//!
//! Converts an element tree into an HTML string. Text and attribute values
//! are written as-is: no entity encoding and no escaping of quotes.

use crate::attributes::Attributes;
use crate::element::{Element, Leaf, Parent};
use thiserror::Error;

/// Errors raised when serializing an incomplete element
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("leaf element has no value")]
    MissingValue,

    #[error("parent element has no tag")]
    MissingTag,

    #[error("parent element <{tag}> has no children")]
    MissingChildren { tag: String },
}

/// Render result type
pub type Result<T> = std::result::Result<T, RenderError>;

/// Convert an element tree to HTML
pub fn element_to_html(element: &Element) -> Result<String> {
    let mut writer = Writer::new();
    writer.write_element(element)?;
    Ok(writer.output)
}

/// Render attributes as `name="value"` pairs separated by single spaces
///
/// An empty mapping renders as the empty string.
pub fn attributes_to_html(attributes: &Attributes) -> String {
    attributes
        .iter()
        .map(|(name, value)| format!(r#"{}="{}""#, name, value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// HTML writer state
struct Writer {
    output: String,
}

impl Writer {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn write_element(&mut self, element: &Element) -> Result<()> {
        match element {
            Element::Leaf(leaf) => self.write_leaf(leaf),
            Element::Parent(parent) => self.write_parent(parent),
        }
    }

    fn write_leaf(&mut self, leaf: &Leaf) -> Result<()> {
        let value = leaf.value.as_deref().ok_or(RenderError::MissingValue)?;

        match &leaf.tag {
            Some(tag) => {
                self.write_open_tag(tag, &leaf.attributes);
                self.output.push_str(value);
                self.write_close_tag(tag);
            }
            None => self.output.push_str(value),
        }
        Ok(())
    }

    fn write_parent(&mut self, parent: &Parent) -> Result<()> {
        let tag = parent.tag.as_deref().ok_or(RenderError::MissingTag)?;
        let children = parent
            .children
            .as_ref()
            .ok_or_else(|| RenderError::MissingChildren {
                tag: tag.to_string(),
            })?;

        self.write_open_tag(tag, &parent.attributes);
        for child in children {
            self.write_element(child)?;
        }
        self.write_close_tag(tag);
        Ok(())
    }

    fn write_open_tag(&mut self, tag: &str, attributes: &Attributes) {
        self.output.push('<');
        self.output.push_str(tag);
        if !attributes.is_empty() {
            self.output.push(' ');
            self.output.push_str(&attributes_to_html(attributes));
        }
        self.output.push('>');
    }

    fn write_close_tag(&mut self, tag: &str) {
        self.output.push_str("</");
        self.output.push_str(tag);
        self.output.push('>');
    }
}
