//! Whole-document tests for the parsing module.
//!
//! Every document parsed here is also run through `invariants::check`.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    highlight::{CodeToken, HighlightCache, LanguageDef, LanguageRegistry, TokenKind},
    parsing::{Parser, blocks::DocumentNode, inline::InlineSpan, invariants, parse, parse_rope},
};

fn checked(md: &str) -> Vec<DocumentNode> {
    let nodes = parse(md);
    invariants::check(md, &nodes);
    nodes
}

fn text(s: &str) -> InlineSpan {
    InlineSpan::Text(s.to_string())
}

fn para(s: &str) -> DocumentNode {
    DocumentNode::Paragraph {
        spans: vec![text(s)],
    }
}

fn items(list: &[&str]) -> Vec<Vec<InlineSpan>> {
    list.iter().map(|s| vec![text(s)]).collect()
}

#[test]
fn fence_boundary() {
    let nodes = checked("```js\nconst x = 1;\n```\nafter");
    assert_eq!(nodes.len(), 2);

    match &nodes[0] {
        DocumentNode::CodeBlock { language, lines } => {
            assert_eq!(language, "js");
            assert_eq!(lines.len(), 1);
            assert_eq!(lines[0][0], CodeToken::new(TokenKind::Keyword, "const"));
        }
        other => panic!("expected CodeBlock, got {other:?}"),
    }
    assert_eq!(nodes[1], para("after"));
}

#[test]
fn blank_line_breaks_list_grouping() {
    let nodes = checked("- a\n- b\n\n- c");
    assert_eq!(
        nodes,
        vec![
            DocumentNode::UnorderedList {
                items: items(&["a", "b"]),
            },
            DocumentNode::Blank,
            DocumentNode::UnorderedList {
                items: items(&["c"]),
            },
        ]
    );
}

#[test]
fn heading_level_is_clamped() {
    let nodes = checked("####### too many");
    assert_eq!(
        nodes,
        vec![DocumentNode::Heading {
            level: 6,
            spans: vec![text("too many")],
        }]
    );
}

#[test]
fn parse_is_idempotent() {
    let md = "# T\n\n- **a**\n1. b\n```py\ndef f(): pass\n```\n> q\n---\n";
    assert_eq!(parse(md), parse(md));
}

#[test]
fn empty_document() {
    assert!(checked("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert_eq!(checked("\n\n\n"), vec![DocumentNode::Blank; 3]);
}

#[test]
fn fence_content_is_never_interpreted() {
    let nodes = checked("```\n# not a heading\n- not a list\n```");
    match &nodes[..] {
        [DocumentNode::CodeBlock { language, lines }] => {
            assert_eq!(language, "");
            assert_eq!(lines[0], vec![CodeToken::plain("# not a heading")]);
            assert_eq!(lines[1], vec![CodeToken::plain("- not a list")]);
        }
        other => panic!("expected one CodeBlock, got {other:?}"),
    }
}

#[test]
fn unterminated_fence_closes_at_eof() {
    let nodes = checked("intro\n```python\nx = 1\ny = 2");
    assert_eq!(nodes.len(), 2);
    match &nodes[1] {
        DocumentNode::CodeBlock { language, lines } => {
            assert_eq!(language, "python");
            assert_eq!(lines.len(), 2);
        }
        other => panic!("expected CodeBlock, got {other:?}"),
    }
}

#[test]
fn fence_with_info_only_closes_on_bare_fence() {
    // A second "```js" inside a fence is content, not a closer.
    let nodes = checked("```\n```js\n```");
    match &nodes[..] {
        [DocumentNode::CodeBlock { lines, .. }] => {
            assert_eq!(lines, &vec![vec![CodeToken::plain("```js")]]);
        }
        other => panic!("expected one CodeBlock, got {other:?}"),
    }
}

#[test]
fn empty_fence() {
    let nodes = checked("```\n```");
    assert_eq!(
        nodes,
        vec![DocumentNode::CodeBlock {
            language: String::new(),
            lines: vec![],
        }]
    );
}

#[test]
fn ordered_list_discards_numerals() {
    let nodes = checked("3. three\n7. seven\n1. one");
    assert_eq!(
        nodes,
        vec![DocumentNode::OrderedList {
            items: items(&["three", "seven", "one"]),
        }]
    );
}

#[test]
fn switching_list_kind_starts_a_new_list() {
    let nodes = checked("- a\n1. b\n* c");
    assert_eq!(
        nodes,
        vec![
            DocumentNode::UnorderedList { items: items(&["a"]) },
            DocumentNode::OrderedList { items: items(&["b"]) },
            DocumentNode::UnorderedList { items: items(&["c"]) },
        ]
    );
}

#[test]
fn mixed_bullets_share_a_list() {
    let nodes = checked("- a\n* b\n+ c");
    assert_eq!(
        nodes,
        vec![DocumentNode::UnorderedList {
            items: items(&["a", "b", "c"]),
        }]
    );
}

#[test]
fn paragraph_ends_a_list() {
    let nodes = checked("- a\nafter");
    assert_eq!(
        nodes,
        vec![
            DocumentNode::UnorderedList { items: items(&["a"]) },
            para("after"),
        ]
    );
}

#[test]
fn consecutive_quotes_stay_separate() {
    let nodes = checked("> one\n> two");
    assert_eq!(
        nodes,
        vec![
            DocumentNode::BlockQuote {
                spans: vec![text("one")],
            },
            DocumentNode::BlockQuote {
                spans: vec![text("two")],
            },
        ]
    );
}

#[test]
fn each_paragraph_line_is_its_own_node() {
    assert_eq!(checked("one\ntwo"), vec![para("one"), para("two")]);
}

#[rstest]
#[case::rule("---", DocumentNode::HorizontalRule)]
#[case::long_rule("  ------", DocumentNode::HorizontalRule)]
#[case::hashtag("#tag", para("#tag"))]
#[case::numberish("3.14 is pi", para("3.14 is pi"))]
#[case::dash_word("-dash", para("-dash"))]
fn single_line_documents(#[case] md: &str, #[case] expected: DocumentNode) {
    assert_eq!(checked(md), vec![expected]);
}

#[test]
fn inline_content_is_tokenized_in_every_block() {
    let nodes = checked("## A *b*\n> [c](d)\n- `e`\n1. ![f](g)\nplain **h**");
    assert_eq!(
        nodes,
        vec![
            DocumentNode::Heading {
                level: 2,
                spans: vec![text("A "), InlineSpan::Italic("b".into())],
            },
            DocumentNode::BlockQuote {
                spans: vec![InlineSpan::Link {
                    text: "c".into(),
                    href: "d".into(),
                }],
            },
            DocumentNode::UnorderedList {
                items: vec![vec![InlineSpan::Code("e".into())]],
            },
            DocumentNode::OrderedList {
                items: vec![vec![InlineSpan::Image {
                    alt: "f".into(),
                    src: "g".into(),
                }]],
            },
            DocumentNode::Paragraph {
                spans: vec![text("plain "), InlineSpan::Bold("h".into())],
            },
        ]
    );
}

#[test]
fn crlf_documents() {
    let nodes = checked("# T\r\n\r\n- a\r\n- b\r\n");
    assert_eq!(nodes.len(), 3);
    assert_eq!(
        nodes[2],
        DocumentNode::UnorderedList {
            items: items(&["a", "b"]),
        }
    );
}

#[test]
fn rope_and_str_agree() {
    let md = "# T\n```ts\ninterface A {}\n```\n- x";
    let rope = xi_rope::Rope::from(md);
    assert_eq!(parse_rope(&rope), parse(md));
}

#[test]
fn parser_with_custom_registry_and_cache() {
    let mut registry = LanguageRegistry::empty();
    registry.insert("lua", LanguageDef::new(["local", "end"], Some("--"), "\"'"));
    let cache = HighlightCache::new();
    let parser = Parser::with_registry(&registry).with_cache(&cache);

    let md = "```lua\nlocal x = 1 -- one\nlocal x = 1 -- one\n```";
    let nodes = parser.parse(md);
    invariants::check(md, &nodes);

    match &nodes[..] {
        [DocumentNode::CodeBlock { lines, .. }] => {
            assert_eq!(lines[0][0], CodeToken::new(TokenKind::Keyword, "local"));
            assert_eq!(
                lines[0].last(),
                Some(&CodeToken::new(TokenKind::Comment, "-- one"))
            );
        }
        other => panic!("expected one CodeBlock, got {other:?}"),
    }
    assert_eq!(cache.len(), 1);

    // The builtin languages are not part of a custom registry.
    let js = parser.parse("```js\nconst a\n```");
    assert_eq!(
        js,
        vec![DocumentNode::CodeBlock {
            language: "js".into(),
            lines: vec![vec![CodeToken::plain("const a")]],
        }]
    );
}

#[test]
fn cached_parse_matches_uncached() {
    let cache = HighlightCache::new();
    let md = "```javascript\nfunction f(a) { return a * 2; }\n```";
    let cached = Parser::new().with_cache(&cache).parse(md);
    assert_eq!(cached, parse(md));
    assert_eq!(cache.len(), 1);
}

#[test]
fn repeated_edits_keep_the_cache_bounded() {
    let cache = HighlightCache::new();
    let parser = Parser::new().with_cache(&cache);

    for edit in 0..1000 {
        let md = format!("```js\nconst x = {edit};\nconsole.log(x);\n```");
        parser.parse(&md);
        cache.sweep();
        assert_eq!(cache.len(), 2);
    }
}

#[test]
fn single_line_inline_code_is_not_a_fence() {
    let nodes = checked("```inline``` code\nnext line");
    assert_eq!(nodes.len(), 2);
    assert!(matches!(nodes[0], DocumentNode::Paragraph { .. }));
    assert_eq!(nodes[1], para("next line"));
}

#[test]
fn non_ascii_digits_are_not_list_numbers() {
    assert_eq!(checked("٣. item"), vec![para("٣. item")]);
}

#[test]
fn snapshot_of_a_small_document() {
    let nodes = checked("# Title\n\n> **note** `x`\n---");
    insta::assert_debug_snapshot!(nodes, @r#"
    [
        Heading {
            level: 1,
            spans: [
                Text(
                    "Title",
                ),
            ],
        },
        Blank,
        BlockQuote {
            spans: [
                Bold(
                    "note",
                ),
                Text(
                    " ",
                ),
                Code(
                    "x",
                ),
            ],
        },
        HorizontalRule,
    ]
    "#);
}
