//! HTML element tree types
//!
//! Every element is exactly one of two variants. A [`Leaf`] carries a literal
//! value and can never hold children; a [`Parent`] carries children and can
//! never hold a value.
//!
//! Fields that the writer requires (`Leaf::value`, `Parent::tag`,
//! `Parent::children`) are optional so that a tree deserialized from JSON can
//! describe an incomplete element. The constructors always fill them in; the
//! writer reports anything still missing as a [`RenderError`](crate::RenderError).

use crate::attributes::Attributes;
use serde::{Deserialize, Serialize};

/// An HTML element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Element {
    Leaf(Leaf),
    Parent(Parent),
}

/// Terminal element with a literal value
///
/// Without a tag the value is emitted as bare text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

/// Element wrapping an ordered sequence of children
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parent {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub children: Option<Vec<Element>>,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

// Convenience constructors
impl Element {
    /// Untagged leaf: plain text with no markup
    pub fn text(value: impl Into<String>) -> Self {
        Element::Leaf(Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        })
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::leaf_with_attributes(tag, value, Attributes::new())
    }

    pub fn leaf_with_attributes(
        tag: impl Into<String>,
        value: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        Element::Leaf(Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes,
        })
    }

    pub fn parent(tag: impl Into<String>, children: Vec<Element>) -> Self {
        Self::parent_with_attributes(tag, children, Attributes::new())
    }

    pub fn parent_with_attributes(
        tag: impl Into<String>,
        children: Vec<Element>,
        attributes: Attributes,
    ) -> Self {
        Element::Parent(Parent {
            tag: Some(tag.into()),
            children: Some(children),
            attributes,
        })
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Element::Leaf(leaf) => leaf.tag.as_deref(),
            Element::Parent(parent) => parent.tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Element::Leaf(leaf) => &leaf.attributes,
            Element::Parent(parent) => &parent.attributes,
        }
    }

    /// Value of a leaf; `None` for parents
    pub fn value(&self) -> Option<&str> {
        match self {
            Element::Leaf(leaf) => leaf.value.as_deref(),
            Element::Parent(_) => None,
        }
    }

    /// Children of a parent; `None` for leaves
    pub fn children(&self) -> Option<&[Element]> {
        match self {
            Element::Leaf(_) => None,
            Element::Parent(parent) => parent.children.as_deref(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Element::Leaf(_))
    }

    /// Serialize this element and its descendants to HTML
    pub fn to_html(&self) -> crate::Result<String> {
        crate::writer::element_to_html(self)
    }
}
