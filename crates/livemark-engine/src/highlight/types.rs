use serde::Serialize;

/// Classification of a highlighted code fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Keyword,
    String,
    Comment,
    Number,
    /// An identifier immediately followed by `(`.
    Function,
    Punctuation,
    Plain,
}

/// A classified substring of one code line.
///
/// Concatenating the `text` of a line's tokens in order gives back the line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CodeToken {
    pub kind: TokenKind,
    pub text: String,
}

impl CodeToken {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Plain, text)
    }
}

/// Rebuilds a code line from its tokens.
pub fn tokens_to_line(tokens: &[CodeToken]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
