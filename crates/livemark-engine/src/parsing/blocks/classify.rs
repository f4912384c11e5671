use super::kinds::{BlockQuote, CodeFence, Heading, ListItem, ThematicBreak};

/// What a single line looks like on its own.
///
/// Carries borrowed slices of the line; no inline work has happened yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    FenceOpen { language: &'a str },
    Heading { level: u8, text: &'a str },
    Rule,
    Quote { text: &'a str },
    Bullet { text: &'a str },
    Numbered { text: &'a str },
    Blank,
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Whether the line actually sits
/// inside a fence is the builder's business; `raw` is kept for that case.
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    /// The line without its terminator.
    pub raw: &'a str,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Predicates are tried top to bottom and the first match wins: fence,
    /// heading, rule, quote, bullet, numbered item, blank, text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let kind = if let Some(language) = CodeFence::opens(line) {
            LineKind::FenceOpen { language }
        } else if let Some((level, text)) = Heading::parse(line) {
            LineKind::Heading { level, text }
        } else if ThematicBreak::matches(line) {
            LineKind::Rule
        } else if let Some(text) = BlockQuote::strip_prefix(line) {
            LineKind::Quote { text }
        } else if let Some(text) = ListItem::bullet(line) {
            LineKind::Bullet { text }
        } else if let Some(text) = ListItem::ordered(line) {
            LineKind::Numbered { text }
        } else if line.trim().is_empty() {
            LineKind::Blank
        } else {
            LineKind::Text
        };

        LineClass { raw: line, kind }
    }
}
