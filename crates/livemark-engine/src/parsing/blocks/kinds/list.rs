use std::sync::LazyLock;

use regex::Regex;

/// `1. item`, `42.\titem`: ASCII digits, a dot, then whitespace.
static ORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s+").expect("Invalid ordered list regex"));

pub struct ListItem;

impl ListItem {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];

    /// Returns the item text of a `-`, `*` or `+` bullet followed by a space.
    pub fn bullet(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::BULLETS)?;
        let text = rest.strip_prefix(' ')?;
        Some(text.trim_start())
    }

    /// Returns the item text of a numbered item. The numeral is discarded;
    /// renderers renumber sequentially.
    pub fn ordered(line: &str) -> Option<&str> {
        let m = ORDERED_MARKER.find(line)?;
        Some(&line[m.end()..])
    }
}
