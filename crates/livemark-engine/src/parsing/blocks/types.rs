use serde::Serialize;

use crate::{highlight::CodeToken, parsing::inline::InlineSpan};

/// One block of a parsed document.
///
/// Nodes appear in source line order. Every node covers whole lines; only
/// `CodeBlock` spans several lines of mixed content (the lines strictly
/// between its fences).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DocumentNode {
    /// `#` through `######`.
    Heading { level: u8, spans: Vec<InlineSpan> },
    /// A single line of ordinary text.
    Paragraph { spans: Vec<InlineSpan> },
    /// A fenced code block with one token list per content line.
    CodeBlock {
        language: String,
        lines: Vec<Vec<CodeToken>>,
    },
    /// A single `>` line.
    BlockQuote { spans: Vec<InlineSpan> },
    /// Consecutive `-`/`*`/`+` items.
    UnorderedList { items: Vec<Vec<InlineSpan>> },
    /// Consecutive `N.` items. Source numerals are not kept.
    OrderedList { items: Vec<Vec<InlineSpan>> },
    HorizontalRule,
    /// An empty line. Separates blocks; never rendered.
    Blank,
}

impl DocumentNode {
    /// A short stable name for the node's variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DocumentNode::Heading { .. } => "Heading",
            DocumentNode::Paragraph { .. } => "Paragraph",
            DocumentNode::CodeBlock { .. } => "CodeBlock",
            DocumentNode::BlockQuote { .. } => "BlockQuote",
            DocumentNode::UnorderedList { .. } => "UnorderedList",
            DocumentNode::OrderedList { .. } => "OrderedList",
            DocumentNode::HorizontalRule => "HorizontalRule",
            DocumentNode::Blank => "Blank",
        }
    }

    /// Whether a renderer paints anything for this node.
    pub fn is_rendered(&self) -> bool {
        !matches!(self, DocumentNode::Blank)
    }
}
