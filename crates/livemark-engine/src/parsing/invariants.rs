use crate::{
    highlight::tokens_to_line,
    parsing::{
        blocks::{DocumentNode, kinds::CodeFence},
        rope::source_lines,
    },
};

/// Validates parser output against its source.
///
/// Walks the nodes and the source lines in lockstep and asserts that:
/// - Every node accounts for exactly the lines it was built from, in order
/// - Code block token lines reproduce their source lines exactly
/// - Heading levels are within 1..=6 and list groups are non-empty
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(document: &str, nodes: &[DocumentNode]) {
    let lines: Vec<&str> = source_lines(document).collect();
    let mut at = 0usize;

    for (n, node) in nodes.iter().enumerate() {
        assert!(
            at < lines.len(),
            "node {n} ({}) has no source line left (line count: {})",
            node.kind_name(),
            lines.len()
        );

        match node {
            DocumentNode::CodeBlock { lines: code, .. } => {
                assert!(
                    CodeFence::opens(lines[at]).is_some(),
                    "code block {n} does not start at a fence: {:?}",
                    lines[at]
                );
                at += 1;
                for tokens in code {
                    assert_eq!(
                        tokens_to_line(tokens),
                        lines[at],
                        "code tokens of node {n} do not reproduce source line {at}"
                    );
                    at += 1;
                }
                // The closing fence is absent only at end of input.
                if at < lines.len() {
                    assert!(
                        CodeFence::closes(lines[at]),
                        "code block {n} not followed by a closing fence: {:?}",
                        lines[at]
                    );
                    at += 1;
                }
            }
            DocumentNode::UnorderedList { items } | DocumentNode::OrderedList { items } => {
                assert!(!items.is_empty(), "list node {n} has no items");
                at += items.len();
            }
            DocumentNode::Heading { level, .. } => {
                assert!(
                    (1..=6).contains(level),
                    "heading node {n} has level {level}"
                );
                at += 1;
            }
            DocumentNode::Paragraph { .. }
            | DocumentNode::BlockQuote { .. }
            | DocumentNode::HorizontalRule
            | DocumentNode::Blank => at += 1,
        }
    }

    assert_eq!(
        at,
        lines.len(),
        "nodes cover {at} source lines but the document has {}",
        lines.len()
    );
}
