pub mod blocks;
pub mod inline;
pub mod invariants;
pub mod rope;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use crate::highlight::{HighlightCache, Highlighter, LanguageRegistry, builtin_registry};

use blocks::{BlockBuilder, DocumentNode, MarkdownLineClassifier};
use rope::{rope_text, source_lines};

/// Parses a whole document with the builtin highlighting languages.
///
/// Never fails: any line that matches no block construct is a paragraph, and
/// an unterminated fence is closed at end of input. Each call starts from
/// scratch; nothing is carried between calls.
pub fn parse(document: &str) -> Vec<DocumentNode> {
    Parser::new().parse(document)
}

/// Parses an editor buffer held as a rope.
pub fn parse_rope(rope: &Rope) -> Vec<DocumentNode> {
    parse(&rope_text(rope))
}

/// A parse configuration: which languages to highlight and, optionally, a
/// caller-owned highlight cache.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    highlighter: Highlighter<'a>,
}

impl Parser<'static> {
    pub fn new() -> Self {
        Self {
            highlighter: Highlighter::new(builtin_registry()),
        }
    }
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Parser<'a> {
    pub fn with_registry(registry: &'a LanguageRegistry) -> Self {
        Self {
            highlighter: Highlighter::new(registry),
        }
    }

    pub fn with_cache(self, cache: &'a HighlightCache) -> Parser<'a> {
        Parser {
            highlighter: self.highlighter.with_cache(cache),
        }
    }

    pub fn parse(&self, document: &str) -> Vec<DocumentNode> {
        let classifier = MarkdownLineClassifier;
        let mut builder = BlockBuilder::new(self.highlighter);

        for line in source_lines(document) {
            let lc = classifier.classify(line);
            builder.push(&lc);
        }

        let nodes = builder.finish();
        log::trace!("parsed {} bytes into {} nodes", document.len(), nodes.len());
        nodes
    }

    pub fn parse_rope(&self, rope: &Rope) -> Vec<DocumentNode> {
        self.parse(&rope_text(rope))
    }
}
