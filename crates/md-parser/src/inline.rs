//! Inline tokenizer
//!
//! Splits a run of inline text into typed fragments. The rules are applied in
//! a fixed order (bold, italic, code, image, link) and each rule only splits
//! fragments that are still plain, so a span that was already typed is never
//! looked at again. Nested emphasis is therefore never produced.
//!
//! Unterminated delimiters are not an error: the unmatched delimiter stays in
//! the output as literal text.

use regex::{Captures, Regex};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Parser errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown fragment kind: {name}")]
    UnknownFragmentKind { name: String },

    #[error("{kind} fragment has no url")]
    MissingUrl { kind: FragmentKind },
}

/// Parse result type
pub type ParseResult<T> = Result<T, ParseError>;

/// A typed run of inline text
///
/// Links and images always carry a URL; the other kinds never do.
///
/// Deserialization resolves the `kind` name with [`FragmentKind::from_str`],
/// so an unknown kind is reported as [`ParseError::UnknownFragmentKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TextFragment {
    Plain { text: String },
    Bold { text: String },
    Italic { text: String },
    Code { text: String },
    Link { text: String, url: String },
    /// `text` is the alt text
    Image { text: String, url: String },
}

impl TextFragment {
    pub fn plain(text: impl Into<String>) -> Self {
        TextFragment::Plain { text: text.into() }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        TextFragment::Bold { text: text.into() }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        TextFragment::Italic { text: text.into() }
    }

    pub fn code(text: impl Into<String>) -> Self {
        TextFragment::Code { text: text.into() }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        TextFragment::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        TextFragment::Image {
            text: alt.into(),
            url: url.into(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            TextFragment::Plain { text }
            | TextFragment::Bold { text }
            | TextFragment::Italic { text }
            | TextFragment::Code { text }
            | TextFragment::Link { text, .. }
            | TextFragment::Image { text, .. } => text,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            TextFragment::Link { url, .. } | TextFragment::Image { url, .. } => Some(url),
            _ => None,
        }
    }

}

/// Wire form of a fragment before its kind is resolved
#[derive(Deserialize)]
struct RawFragment {
    kind: String,
    text: String,
    #[serde(default)]
    url: Option<String>,
}

impl TryFrom<RawFragment> for TextFragment {
    type Error = ParseError;

    fn try_from(raw: RawFragment) -> ParseResult<Self> {
        let kind: FragmentKind = raw.kind.parse()?;
        let text = raw.text;
        let fragment = match kind {
            FragmentKind::Plain => TextFragment::Plain { text },
            FragmentKind::Bold => TextFragment::Bold { text },
            FragmentKind::Italic => TextFragment::Italic { text },
            FragmentKind::Code => TextFragment::Code { text },
            FragmentKind::Link => TextFragment::Link {
                text,
                url: raw.url.ok_or(ParseError::MissingUrl { kind })?,
            },
            FragmentKind::Image => TextFragment::Image {
                text,
                url: raw.url.ok_or(ParseError::MissingUrl { kind })?,
            },
        };
        Ok(fragment)
    }
}

impl<'de> Deserialize<'de> for TextFragment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawFragment::deserialize(deserializer)?;
        TextFragment::try_from(raw).map_err(serde::de::Error::custom)
    }
}

/// The kind of a [`TextFragment`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl FragmentKind {
    pub const ALL: [FragmentKind; 6] = [
        FragmentKind::Plain,
        FragmentKind::Bold,
        FragmentKind::Italic,
        FragmentKind::Code,
        FragmentKind::Link,
        FragmentKind::Image,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FragmentKind::Plain => "plain",
            FragmentKind::Bold => "bold",
            FragmentKind::Italic => "italic",
            FragmentKind::Code => "code",
            FragmentKind::Link => "link",
            FragmentKind::Image => "image",
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FragmentKind {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        FragmentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownFragmentKind {
                name: s.to_string(),
            })
    }
}

/// Tokenize inline text into fragments
///
/// Empty input yields no fragments.
pub fn tokenize(text: &str) -> Vec<TextFragment> {
    let fragments = vec![TextFragment::plain(text)];
    let fragments = split_delimiter(fragments, "**", TextFragment::bold);
    let fragments = split_delimiter(fragments, "_", TextFragment::italic);
    let fragments = split_delimiter(fragments, "`", TextFragment::code);
    let fragments = split_images(fragments);
    let fragments = split_links(fragments);

    log::trace!(
        "tokenized {} bytes into {} fragments",
        text.len(),
        fragments.len()
    );
    fragments
}

/// Split plain fragments on a literal delimiter
///
/// Segments at odd positions (inside a delimiter pair) become `make(segment)`,
/// the rest stay plain. Empty segments are dropped. When the delimiter count
/// is odd the last delimiter has no partner and is kept as literal text.
/// A plain fragment without the delimiter passes through unchanged.
pub fn split_delimiter(
    fragments: Vec<TextFragment>,
    delimiter: &str,
    make: fn(String) -> TextFragment,
) -> Vec<TextFragment> {
    let mut result = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        let text = match fragment {
            TextFragment::Plain { text } => text,
            other => {
                result.push(other);
                continue;
            }
        };
        if !text.contains(delimiter) {
            result.push(TextFragment::Plain { text });
            continue;
        }

        let mut sections: Vec<String> = text.split(delimiter).map(str::to_string).collect();
        if sections.len() % 2 == 0 {
            // Unmatched trailing delimiter: glue the last two sections back together
            if let Some(tail) = sections.pop()
                && let Some(last) = sections.last_mut()
            {
                last.push_str(delimiter);
                last.push_str(&tail);
            }
        }

        for (i, section) in sections.into_iter().enumerate() {
            if section.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                result.push(TextFragment::Plain { text: section });
            } else {
                result.push(make(section));
            }
        }
    }

    result
}

fn image_pattern() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| {
        Regex::new(r"!\[(?P<text>[^\[\]]*)\]\((?P<url>[^\(\)]*)\)").expect("Invalid image regex")
    })
}

fn link_pattern() -> &'static Regex {
    // The optional `bang` group stands in for a look-behind: a match that
    // starts with `!` is image syntax and is skipped.
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| {
        Regex::new(r"(?P<bang>!?)\[(?P<text>[^\[\]]*)\]\((?P<url>[^\(\)]*)\)")
            .expect("Invalid link regex")
    })
}

fn is_image_syntax(caps: &Captures) -> bool {
    caps.name("bang").is_some_and(|m| !m.as_str().is_empty())
}

/// Extract `(alt, url)` pairs for every `![alt](url)` in the text
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    image_pattern()
        .captures_iter(text)
        .map(|caps| (caps["text"].to_string(), caps["url"].to_string()))
        .collect()
}

/// Extract `(text, url)` pairs for every `[text](url)` not preceded by `!`
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    link_pattern()
        .captures_iter(text)
        .filter(|caps| !is_image_syntax(caps))
        .map(|caps| (caps["text"].to_string(), caps["url"].to_string()))
        .collect()
}

/// Pull `![alt](url)` images out of plain fragments
pub fn split_images(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_markup(fragments, image_pattern(), TextFragment::image)
}

/// Pull `[text](url)` links out of plain fragments
///
/// Must run after [`split_images`].
pub fn split_links(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_markup(fragments, link_pattern(), TextFragment::link)
}

/// Replace each pattern match in a plain fragment with `make(text, url)`
///
/// Text between matches becomes plain fragments; empty pieces are omitted.
fn split_markup(
    fragments: Vec<TextFragment>,
    pattern: &Regex,
    make: fn(String, String) -> TextFragment,
) -> Vec<TextFragment> {
    let mut result = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        let text = match fragment {
            TextFragment::Plain { text } => text,
            other => {
                result.push(other);
                continue;
            }
        };

        let mut pending_start = 0;
        for caps in pattern.captures_iter(&text) {
            if is_image_syntax(&caps) {
                continue;
            }
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let before = &text[pending_start..whole.start()];
            if !before.is_empty() {
                result.push(TextFragment::plain(before));
            }
            result.push(make(caps["text"].to_string(), caps["url"].to_string()));
            pending_start = whole.end();
        }

        let rest = &text[pending_start..];
        if !rest.is_empty() {
            result.push(TextFragment::plain(rest));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_equality() {
        assert_eq!(TextFragment::bold("a"), TextFragment::bold("a"));
        assert_ne!(TextFragment::plain("a"), TextFragment::bold("a"));
        assert_ne!(
            TextFragment::link("a", "https://google.com"),
            TextFragment::link("a", "https://example.com")
        );
    }

    #[test]
    fn test_fragment_accessors() {
        let img = TextFragment::image("alt", "a.png");
        assert_eq!(img.text(), "alt");
        assert_eq!(img.url(), Some("a.png"));
        assert_eq!(TextFragment::code("x").url(), None);
    }

    #[test]
    fn test_fragment_kind_from_str() {
        assert_eq!("bold".parse::<FragmentKind>(), Ok(FragmentKind::Bold));
        assert_eq!("Image".parse::<FragmentKind>(), Ok(FragmentKind::Image));
        let err = "strike".parse::<FragmentKind>().unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownFragmentKind {
                name: "strike".to_string()
            }
        );
        assert_eq!(err.to_string(), "Unknown fragment kind: strike");
    }

    #[test]
    fn test_deserialize_fragments() {
        let fragments: Vec<TextFragment> = serde_json::from_str(
            r#"[{"kind":"plain","text":"see "},{"kind":"Link","text":"docs","url":"/d"}]"#,
        )
        .unwrap();
        assert_eq!(
            fragments,
            vec![TextFragment::plain("see "), TextFragment::link("docs", "/d")]
        );
    }

    #[test]
    fn test_deserialize_unknown_kind() {
        let err = serde_json::from_str::<TextFragment>(r#"{"kind":"strike","text":"x"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Unknown fragment kind: strike"));
    }

    #[test]
    fn test_deserialize_link_without_url() {
        let err =
            serde_json::from_str::<TextFragment>(r#"{"kind":"image","text":"alt"}"#).unwrap_err();
        assert!(err.to_string().contains("image fragment has no url"));
    }

    #[test]
    fn test_split_delimiter_bold() {
        let nodes = split_delimiter(
            vec![TextFragment::plain("This is text with a **bolded phrase** in the middle")],
            "**",
            TextFragment::bold,
        );
        assert_eq!(
            nodes,
            vec![
                TextFragment::plain("This is text with a "),
                TextFragment::bold("bolded phrase"),
                TextFragment::plain(" in the middle"),
            ]
        );
    }

    #[test]
    fn test_split_delimiter_without_delimiter() {
        let nodes = split_delimiter(vec![TextFragment::plain("nothing")], "`", TextFragment::code);
        assert_eq!(nodes, vec![TextFragment::plain("nothing")]);
    }

    #[test]
    fn test_split_delimiter_unterminated_is_literal() {
        let nodes = split_delimiter(
            vec![TextFragment::plain("**done** and **open")],
            "**",
            TextFragment::bold,
        );
        assert_eq!(
            nodes,
            vec![TextFragment::bold("done"), TextFragment::plain(" and **open")]
        );

        let nodes = split_delimiter(vec![TextFragment::plain("a `b")], "`", TextFragment::code);
        assert_eq!(nodes, vec![TextFragment::plain("a `b")]);
    }

    #[test]
    fn test_split_delimiter_drops_empty_segments() {
        let nodes = split_delimiter(vec![TextFragment::plain("****")], "**", TextFragment::bold);
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_split_delimiter_skips_typed_fragments() {
        let nodes = split_delimiter(
            vec![TextFragment::code("a **b** c"), TextFragment::plain("**d**")],
            "**",
            TextFragment::bold,
        );
        assert_eq!(
            nodes,
            vec![TextFragment::code("a **b** c"), TextFragment::bold("d")]
        );
    }

    #[test]
    fn test_extract_markdown_images() {
        let matches = extract_markdown_images(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png)",
        );
        assert_eq!(
            matches,
            vec![(
                "image".to_string(),
                "https://i.imgur.com/zjjcJKZ.png".to_string()
            )]
        );
    }

    #[test]
    fn test_extract_markdown_links_skips_images() {
        let matches = extract_markdown_links(
            "![img](a.png) and [to boot dev](https://www.boot.dev) and [yt](https://youtube.com)",
        );
        assert_eq!(
            matches,
            vec![
                ("to boot dev".to_string(), "https://www.boot.dev".to_string()),
                ("yt".to_string(), "https://youtube.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_split_images() {
        let nodes = split_images(vec![TextFragment::plain(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
        )]);
        assert_eq!(
            nodes,
            vec![
                TextFragment::plain("This is text with an "),
                TextFragment::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                TextFragment::plain(" and another "),
                TextFragment::image("second image", "https://i.imgur.com/3elNhQu.png"),
            ]
        );
    }

    #[test]
    fn test_split_links_adjacent() {
        let nodes = split_links(vec![TextFragment::plain("[a](1)[b](2)")]);
        assert_eq!(
            nodes,
            vec![TextFragment::link("a", "1"), TextFragment::link("b", "2")]
        );
    }

    #[test]
    fn test_split_links_leaves_image_syntax() {
        let nodes = split_links(vec![TextFragment::plain("![a](1) [a](1)")]);
        assert_eq!(
            nodes,
            vec![TextFragment::plain("![a](1) "), TextFragment::link("a", "1")]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_plain() {
        assert_eq!(tokenize("just text"), vec![TextFragment::plain("just text")]);
    }

    #[test]
    fn test_tokenize_mixed_emphasis() {
        assert_eq!(
            tokenize("**bold** and _em_ and `code`"),
            vec![
                TextFragment::bold("bold"),
                TextFragment::plain(" and "),
                TextFragment::italic("em"),
                TextFragment::plain(" and "),
                TextFragment::code("code"),
            ]
        );
    }

    #[test]
    fn test_tokenize_image_before_link() {
        assert_eq!(
            tokenize("![alt](u1) and [text](u2)"),
            vec![
                TextFragment::image("alt", "u1"),
                TextFragment::plain(" and "),
                TextFragment::link("text", "u2"),
            ]
        );
    }

    #[test]
    fn test_tokenize_code_span_is_opaque_to_later_rules() {
        assert_eq!(
            tokenize("run `[x](y)` now"),
            vec![
                TextFragment::plain("run "),
                TextFragment::code("[x](y)"),
                TextFragment::plain(" now"),
            ]
        );
    }

    #[test]
    fn test_tokenize_bold_is_not_nested() {
        assert_eq!(
            tokenize("**a _b_ c**"),
            vec![TextFragment::bold("a _b_ c")]
        );
    }
}
