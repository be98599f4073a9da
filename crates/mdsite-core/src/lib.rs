//! mdsite-core: Core library for converting markdown to HTML
//!
//! This crate provides:
//! - Inline fragment to HTML element conversion
//! - Block assembly (markup stripping, per-kind structure)
//! - Whole-document building and title extraction

pub mod assemble;
pub mod convert;
pub mod document;
pub mod error;

pub use assemble::{assemble_block, normalize_whitespace};
pub use convert::{fragment_to_element, text_to_elements};
pub use document::{extract_title, markdown_to_element, markdown_to_html};
pub use error::{Error, Result};

pub use md_parser::{BlockKind, FragmentKind, TextFragment, classify, split_blocks, tokenize};
pub use mdsite_html::{Attributes, Element, RenderError, element_to_html};
