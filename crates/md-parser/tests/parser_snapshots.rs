//! Snapshot tests for the block splitter, classifier and inline tokenizer

use std::fs;
use std::path::PathBuf;

use md_parser::{classify, split_blocks, tokenize};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(format!("{}.md", name));
    fs::read_to_string(&path).expect("Failed to read fixture file")
}

fn fragments_json(text: &str) -> String {
    serde_json::to_string(&tokenize(text)).expect("Failed to serialize fragments")
}

#[test]
fn test_block_classification() {
    let source = read_fixture("blocks");
    let summary: Vec<String> = split_blocks(&source)
        .iter()
        .map(|block| {
            let first_line = block.lines().next().unwrap_or_default();
            format!("{}: {}", classify(block), first_line)
        })
        .collect();

    insta::assert_snapshot!(summary.join("\n"), @r#"
    heading: # Tolkien Fan Club
    paragraph: ![JRR Tolkien sitting](/images/tolkien.png)
    paragraph: Here's the deal, **I like Tolkien**.
    quote: > "I am in fact a Hobbit in all but size."
    heading: ## Blog posts
    unordered_list: - [Why Glorfindel is More Impressive than Legolas](/blog/glorfindel)
    ordered_list: 1. Gandalf
    code: ```
    paragraph: 4. not
    "#);
}

#[test]
fn test_emphasis_fragments() {
    insta::assert_snapshot!(
        fragments_json("**bold** and _em_ and `code`"),
        @r#"[{"kind":"bold","text":"bold"},{"kind":"plain","text":" and "},{"kind":"italic","text":"em"},{"kind":"plain","text":" and "},{"kind":"code","text":"code"}]"#
    );
}

#[test]
fn test_image_and_link_fragments() {
    insta::assert_snapshot!(
        fragments_json("![alt](u1) and [text](u2)"),
        @r#"[{"kind":"image","text":"alt","url":"u1"},{"kind":"plain","text":" and "},{"kind":"link","text":"text","url":"u2"}]"#
    );
}

#[test]
fn test_all_rules_in_one_line() {
    let text = "This is **text** with an _italic_ word and a `code block` and an ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)";
    insta::assert_snapshot!(
        fragments_json(text),
        @r#"[{"kind":"plain","text":"This is "},{"kind":"bold","text":"text"},{"kind":"plain","text":" with an "},{"kind":"italic","text":"italic"},{"kind":"plain","text":" word and a "},{"kind":"code","text":"code block"},{"kind":"plain","text":" and an "},{"kind":"image","text":"obi wan image","url":"https://i.imgur.com/fJRm4Vk.jpeg"},{"kind":"plain","text":" and a "},{"kind":"link","text":"link","url":"https://boot.dev"}]"#
    );
}
