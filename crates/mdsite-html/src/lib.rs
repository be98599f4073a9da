//! mdsite-html: HTML element tree and serializer for mdsite
//!
//! This crate provides:
//! - A two-variant element tree (leaf / parent)
//! - Insertion-ordered attribute mappings
//! - Serialization of the tree to an HTML string
//!
//! ## Example
//!
//! ```rust
//! use mdsite_html::{Element, element_to_html};
//!
//! let doc = Element::parent(
//!     "div",
//!     vec![Element::parent("p", vec![Element::text("Hello "), Element::leaf("b", "world")])],
//! );
//!
//! let html = element_to_html(&doc).unwrap();
//! assert_eq!(html, "<div><p>Hello <b>world</b></p></div>");
//! ```

pub mod attributes;
pub mod element;
pub mod writer;

pub use attributes::Attributes;
pub use element::{Element, Leaf, Parent};
pub use writer::{RenderError, Result, attributes_to_html, element_to_html};
