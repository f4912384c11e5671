//! Word, character and line counts for a preview status bar.

use serde::Serialize;

/// Reading speed used when a caller passes zero.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DocumentStats {
    /// Whitespace-separated words.
    pub words: usize,
    /// Unicode scalar values, line breaks included.
    pub characters: usize,
    /// Physical lines; an empty document has one.
    pub lines: usize,
    /// Whole minutes, rounded up.
    pub reading_minutes: usize,
}

/// Computes statistics over the raw markdown source.
pub fn stats(document: &str, words_per_minute: u32) -> DocumentStats {
    let wpm = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    } as usize;

    let words = document.split_whitespace().count();

    DocumentStats {
        words,
        characters: document.chars().count(),
        lines: document.split('\n').count(),
        reading_minutes: words.div_ceil(wpm),
    }
}
