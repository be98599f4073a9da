//! md-parser: Inline tokenizer and block classifier for a small markdown dialect
//!
//! This crate provides:
//! - Inline tokenization into typed text fragments (plain, bold, italic, code, link, image)
//! - Splitting of a document into blocks on blank lines
//! - Structural classification of blocks
//!
//! # Example
//!
//! ```
//! use md_parser::{BlockKind, TextFragment, classify, split_blocks, tokenize};
//!
//! let blocks = split_blocks("# Title\n\nSome **bold** text");
//! assert_eq!(classify(&blocks[0]), BlockKind::Heading);
//! assert_eq!(tokenize(&blocks[1])[1], TextFragment::bold("bold"));
//! ```

pub mod block;
pub mod inline;

// Re-export main types for convenient access
pub use block::{BlockKind, classify, heading_level, is_fence, ordered_item, split_blocks};
pub use inline::{
    FragmentKind, ParseError, ParseResult, TextFragment, extract_markdown_images,
    extract_markdown_links, split_delimiter, split_images, split_links, tokenize,
};
