use serde::Serialize;

/// A typed fragment of a single line's inline content.
///
/// Each variant owns the text a renderer paints. Link targets, image sources
/// and alt text are metadata carried alongside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineSpan {
    /// Plain text that isn't part of any special construct.
    Text(String),
    /// `**bold**`
    Bold(String),
    /// `*italic*`
    Italic(String),
    /// `` `code` `` - no inline parsing happens inside.
    Code(String),
    /// `[text](href)`
    Link { text: String, href: String },
    /// `![alt](src)`
    Image { alt: String, src: String },
}

impl InlineSpan {
    /// The body text a renderer paints for this span.
    ///
    /// Images have no body text; their alt text is metadata.
    pub fn visible_text(&self) -> &str {
        match self {
            InlineSpan::Text(s)
            | InlineSpan::Bold(s)
            | InlineSpan::Italic(s)
            | InlineSpan::Code(s) => s,
            InlineSpan::Link { text, .. } => text,
            InlineSpan::Image { .. } => "",
        }
    }
}

/// Concatenates the visible text of a run of spans.
pub fn spans_to_plain(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::visible_text).collect()
}
