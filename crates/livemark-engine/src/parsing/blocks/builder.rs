use crate::{highlight::Highlighter, parsing::inline::{InlineSpan, tokenize_inline}};

use super::{
    classify::{LineClass, LineKind},
    kinds::CodeFence,
    types::DocumentNode,
};

/// The one piece of state carried between lines.
#[derive(Debug)]
enum LeafState {
    None,
    List {
        ordered: bool,
        items: Vec<Vec<InlineSpan>>,
    },
    Fence {
        language: String,
        lines: Vec<String>,
    },
}

/// Phase 2 of block parsing: folds classified lines into [`DocumentNode`]s.
///
/// Lists accumulate until a line of another kind (a blank line included)
/// arrives; fences swallow every line verbatim until a bare closing fence.
/// Everything else becomes exactly one node per line.
pub struct BlockBuilder<'h> {
    highlighter: Highlighter<'h>,
    leaf: LeafState,
    out: Vec<DocumentNode>,
}

impl<'h> BlockBuilder<'h> {
    pub fn new(highlighter: Highlighter<'h>) -> Self {
        Self {
            highlighter,
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if self.in_fence() {
            self.consume_fence_line(c.raw);
            return;
        }

        match c.kind {
            LineKind::Bullet { text } => self.extend_list(false, text),
            LineKind::Numbered { text } => self.extend_list(true, text),
            LineKind::FenceOpen { language } => {
                self.flush_list();
                self.leaf = LeafState::Fence {
                    language: language.to_string(),
                    lines: vec![],
                };
            }
            LineKind::Heading { level, text } => {
                self.flush_list();
                self.out.push(DocumentNode::Heading {
                    level,
                    spans: tokenize_inline(text),
                });
            }
            LineKind::Rule => {
                self.flush_list();
                self.out.push(DocumentNode::HorizontalRule);
            }
            LineKind::Quote { text } => {
                self.flush_list();
                self.out.push(DocumentNode::BlockQuote {
                    spans: tokenize_inline(text),
                });
            }
            LineKind::Blank => {
                self.flush_list();
                self.out.push(DocumentNode::Blank);
            }
            LineKind::Text => {
                self.flush_list();
                self.out.push(DocumentNode::Paragraph {
                    spans: tokenize_inline(c.raw),
                });
            }
        }
    }

    pub fn finish(mut self) -> Vec<DocumentNode> {
        // EOF flush; an open fence is closed implicitly
        self.flush_list();
        self.flush_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn consume_fence_line(&mut self, raw: &str) {
        if CodeFence::closes(raw) {
            self.flush_fence();
        } else if let LeafState::Fence { lines, .. } = &mut self.leaf {
            lines.push(raw.to_string());
        }
    }

    fn extend_list(&mut self, ordered: bool, text: &str) {
        let spans = tokenize_inline(text);
        if let LeafState::List {
            ordered: current,
            items,
        } = &mut self.leaf
            && *current == ordered
        {
            items.push(spans);
            return;
        }

        self.flush_list();
        self.leaf = LeafState::List {
            ordered,
            items: vec![spans],
        };
    }

    fn flush_list(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        match prev {
            LeafState::List {
                ordered: true,
                items,
            } => self.out.push(DocumentNode::OrderedList { items }),
            LeafState::List {
                ordered: false,
                items,
            } => self.out.push(DocumentNode::UnorderedList { items }),
            other => self.leaf = other, // put back non-list leaf (e.g. fence)
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence { language, lines } = prev {
            let lines = self.highlighter.highlight(&lines, &language);
            self.out.push(DocumentNode::CodeBlock { language, lines });
        } else {
            self.leaf = prev;
        }
    }
}
