//! Inline fragment to HTML element conversion

use md_parser::{TextFragment, tokenize};
use mdsite_html::{Attributes, Element};

/// Convert one inline fragment to a leaf element
pub fn fragment_to_element(fragment: &TextFragment) -> Element {
    match fragment {
        TextFragment::Plain { text } => Element::text(text.as_str()),
        TextFragment::Bold { text } => Element::leaf("b", text.as_str()),
        TextFragment::Italic { text } => Element::leaf("i", text.as_str()),
        TextFragment::Code { text } => Element::leaf("code", text.as_str()),
        TextFragment::Link { text, url } => Element::leaf_with_attributes(
            "a",
            text.as_str(),
            Attributes::from([("href", url.as_str())]),
        ),
        TextFragment::Image { text, url } => Element::leaf_with_attributes(
            "img",
            "",
            Attributes::from([("src", url.as_str()), ("alt", text.as_str())]),
        ),
    }
}

/// Tokenize inline text and convert every fragment
pub fn text_to_elements(text: &str) -> Vec<Element> {
    tokenize(text).iter().map(fragment_to_element).collect()
}
