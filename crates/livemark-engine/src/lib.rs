pub mod highlight;
pub mod parsing;
pub mod stats;

// Re-export key types for easier usage
pub use highlight::{
    CodeToken, HighlightCache, LanguageDef, LanguageRegistry, TokenKind, highlight,
    highlight_with,
};
pub use parsing::{
    Parser,
    blocks::DocumentNode,
    inline::{InlineSpan, spans_to_plain, tokenize_inline},
    parse, parse_rope,
};
pub use stats::{DocumentStats, stats};
