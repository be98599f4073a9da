use super::*;
use md_parser::{TextFragment, tokenize};

fn to_html(markdown: &str) -> String {
    markdown_to_html(markdown).unwrap()
}

#[test]
fn test_empty_document() {
    let root = markdown_to_element("");
    assert_eq!(root, Element::parent("div", vec![]));
    assert_eq!(to_html("\n\n\n"), "<div></div>");
}

#[test]
fn test_emphasis_paragraph_shape() {
    let markdown = "**bold** and _em_ and `code`";
    assert_eq!(
        tokenize(markdown),
        vec![
            TextFragment::bold("bold"),
            TextFragment::plain(" and "),
            TextFragment::italic("em"),
            TextFragment::plain(" and "),
            TextFragment::code("code"),
        ]
    );

    let root = markdown_to_element(markdown);
    let paragraphs = root.children().unwrap();
    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0].tag(), Some("p"));

    let leaves = paragraphs[0].children().unwrap();
    assert_eq!(leaves.len(), 5);
    assert!(leaves.iter().all(Element::is_leaf));
    let tags: Vec<_> = leaves.iter().map(Element::tag).collect();
    assert_eq!(
        tags,
        vec![Some("b"), None, Some("i"), None, Some("code")]
    );
}

#[test]
fn test_paragraphs() {
    let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

";
    insta::assert_snapshot!(
        to_html(md),
        @"<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
    );
}

#[test]
fn test_codeblock() {
    let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
    insta::assert_snapshot!(
        to_html(md),
        @r"
    <div><pre><code>This is text that _should_ remain
    the **same** even with inline stuff
    </code></pre></div>
    "
    );
}

#[test]
fn test_code_with_blank_line_stays_one_block() {
    let md = "```\nfirst\n\nsecond\n```";
    assert_eq!(
        to_html(md),
        "<div><pre><code>first\n\nsecond\n</code></pre></div>"
    );
}

#[test]
fn test_headings() {
    let md = "# Title\n\n### Sub _title_";
    assert_eq!(
        to_html(md),
        "<div><h1>Title</h1><h3>Sub <i>title</i></h3></div>"
    );
}

#[test]
fn test_lists_and_quote() {
    let md = "
- This is a list
- with items
- and _more_ items

1. This is an `ordered` list
2. with items
3. and more items

> This is a blockquote
> continued here
";
    insta::assert_snapshot!(
        to_html(md),
        @"<div><ul><li>This is a list</li><li>with items</li><li>and <i>more</i> items</li></ul><ol><li>This is an <code>ordered</code> list</li><li>with items</li><li>and more items</li></ol><blockquote>This is a blockquote continued here</blockquote></div>"
    );
}

#[test]
fn test_links_and_images() {
    let md = "Visit [the site](https://example.com) and see ![logo](/logo.png)";
    insta::assert_snapshot!(
        to_html(md),
        @r#"<div><p>Visit <a href="https://example.com">the site</a> and see <img src="/logo.png" alt="logo"></img></p></div>"#
    );
}

#[test]
fn test_empty_paragraph_is_suppressed() {
    let root = markdown_to_element("# Title\n\n****\n\nbody");
    let children = root.children().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].tag(), Some("h1"));
    assert_eq!(children[1].tag(), Some("p"));
}

#[test]
fn test_blank_markup_paragraphs_are_suppressed() {
    assert_eq!(to_html("# T\n\n` `\n\n** **"), "<div><h1>T</h1></div>");
}

#[test]
fn test_unclosed_fence_keeps_later_blocks() {
    insta::assert_snapshot!(
        to_html("# T\n\n```\nunclosed\n\n## Next\n\nbody"),
        @"<div><h1>T</h1><p>` unclosed</p><h2>Next</h2><p>body</p></div>"
    );
}

#[test]
fn test_list_item_count_is_line_count() {
    let md = "- one\n- **\n- ``\n- four";
    let root = markdown_to_element(md);
    let list = &root.children().unwrap()[0];
    assert_eq!(list.tag(), Some("ul"));
    assert_eq!(list.children().unwrap().len(), 4);
}

#[test]
fn test_unterminated_markup_is_literal() {
    assert_eq!(
        to_html("a **dangling marker"),
        "<div><p>a **dangling marker</p></div>"
    );
}

#[test]
fn test_render_is_idempotent() {
    let md = "# T\n\n[a](1) ![b](2) **c**\n\n- x\n- y";
    assert_eq!(to_html(md), to_html(md));
}

#[test]
fn test_extract_title() {
    assert_eq!(extract_title("# Hello").unwrap(), "Hello");
    assert_eq!(
        extract_title("no header\n# Real Title\nbody").unwrap(),
        "Real Title"
    );
    assert_eq!(extract_title("#   Padded   ").unwrap(), "Padded");
}

#[test]
fn test_extract_title_requires_h1() {
    assert_eq!(extract_title("no heading here"), Err(Error::NoHeading));
    assert_eq!(extract_title("## Only h2\n#also not"), Err(Error::NoHeading));
    assert_eq!(extract_title(" # indented"), Err(Error::NoHeading));
}
