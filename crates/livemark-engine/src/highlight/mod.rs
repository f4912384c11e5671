//! # Code Highlighting
//!
//! Per-line tokenizing of fenced code for a declared language.
//!
//! ## Modules
//!
//! - **`types`**: `CodeToken` and `TokenKind`
//! - **`language`**: `LanguageDef` and the tag → definition `LanguageRegistry`
//! - **`scanner`**: the cursor-driven per-line rules
//! - **`cache`**: `HighlightCache`, an optional caller-owned read-through cache
//!
//! Unknown languages are not an error: each line comes back as a single
//! `Plain` token.

pub mod cache;
pub mod language;
pub mod scanner;
pub mod types;

pub use cache::HighlightCache;
pub use language::{LanguageDef, LanguageRegistry, builtin_registry};
pub use types::{CodeToken, TokenKind, tokens_to_line};

/// Highlights `lines` using the builtin languages.
///
/// Always returns exactly one token list per input line.
pub fn highlight<S: AsRef<str>>(lines: &[S], language: &str) -> Vec<Vec<CodeToken>> {
    Highlighter::new(builtin_registry()).highlight(lines, language)
}

/// Highlights `lines` using an explicit registry.
pub fn highlight_with<S: AsRef<str>>(
    registry: &LanguageRegistry,
    lines: &[S],
    language: &str,
) -> Vec<Vec<CodeToken>> {
    Highlighter::new(registry).highlight(lines, language)
}

/// Highlights a single line, falling back to one `Plain` token for unknown
/// languages.
pub fn highlight_line(registry: &LanguageRegistry, language: &str, line: &str) -> Vec<CodeToken> {
    match registry.get(language) {
        Some(def) => scanner::scan_line(def, line),
        None => vec![CodeToken::plain(line)],
    }
}

/// A registry plus an optional cache, passed by value into the block parser.
#[derive(Debug, Clone, Copy)]
pub struct Highlighter<'a> {
    registry: &'a LanguageRegistry,
    cache: Option<&'a HighlightCache>,
}

impl<'a> Highlighter<'a> {
    pub fn new(registry: &'a LanguageRegistry) -> Self {
        Self {
            registry,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: &'a HighlightCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn highlight<S: AsRef<str>>(&self, lines: &[S], language: &str) -> Vec<Vec<CodeToken>> {
        if !language.is_empty() && !self.registry.contains(language) {
            log::debug!("no highlighter for language {language:?}, using plain text");
        }

        lines
            .iter()
            .map(|line| {
                let line = line.as_ref();
                match self.cache {
                    Some(cache) => cache.get_or_highlight(self.registry, language, line),
                    None => highlight_line(self.registry, language, line),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unknown_language_is_plain_per_line() {
        let lines = ["fn main() {", "", "  \"x\" // y", "}"];
        let out = highlight(&lines, "unknown-lang");
        assert_eq!(out.len(), lines.len());
        for (tokens, line) in out.iter().zip(lines) {
            assert_eq!(tokens, &vec![CodeToken::plain(line)]);
        }
    }

    #[test]
    fn empty_language_is_plain() {
        let out = highlight(&["const x"], "");
        assert_eq!(out, vec![vec![CodeToken::plain("const x")]]);
    }

    #[test]
    fn no_lines_no_output() {
        let lines: [&str; 0] = [];
        assert!(highlight(&lines, "python").is_empty());
    }

    #[test]
    fn aliases_highlight_like_their_target() {
        let lines = vec!["import os".to_string()];
        assert_eq!(highlight(&lines, "py"), highlight(&lines, "python"));
        assert_eq!(highlight(&lines, "py")[0][0].kind, TokenKind::Keyword);
    }

    #[test]
    fn every_line_round_trips() {
        let lines = [
            "async function load(url) {",
            "  const res = await fetch(`${url}/api`);",
            "  return res.json(); // parse",
            "}",
        ];
        let out = highlight(&lines, "javascript");
        for (tokens, line) in out.iter().zip(lines) {
            assert_eq!(tokens_to_line(tokens), line);
        }
    }

    #[test]
    fn cached_and_uncached_agree() {
        let cache = HighlightCache::new();
        let reg = builtin_registry();
        let lines = ["x = lambda y: y * 2", "x = lambda y: y * 2"];

        let cached = Highlighter::new(reg).with_cache(&cache).highlight(&lines, "python");
        assert_eq!(cached, highlight(&lines, "python"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn custom_registry() {
        let mut reg = LanguageRegistry::empty();
        reg.insert("rust", LanguageDef::new(["fn", "let"], Some("//"), "\""));
        let out = highlight_with(&reg, &["let v = 1;"], "rust");
        assert_eq!(out[0][0], CodeToken::new(TokenKind::Keyword, "let"));
    }
}
