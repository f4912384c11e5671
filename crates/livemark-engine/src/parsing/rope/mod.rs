//! Adapters between editor buffers and the line-oriented parser.

pub mod lines;

use std::borrow::Cow;

use xi_rope::Rope;

pub use lines::source_lines;

/// Borrows the full text of a rope, allocating only if it is fragmented.
pub fn rope_text(rope: &Rope) -> Cow<'_, str> {
    rope.slice_to_cow(..)
}
