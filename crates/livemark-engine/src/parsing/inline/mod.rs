//! # Inline Tokenizing
//!
//! Cursor-based tokenizing of a single line's inline content.
//!
//! ## Architecture
//!
//! Inline tokenizing is separate from block parsing: the block parser hands
//! each heading, paragraph, quote and list item its own line of text.
//!
//! The tokenizer walks a cursor forward through the line. At every position it
//! tries the known constructs in precedence order and, when none match, grows a
//! pending text run by one character. The cursor never moves backwards.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum (Text, Bold, Italic, Code, Link, Image)
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for scanning a line with byte positions
//! - **`parser`**: `tokenize_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! image > link > bold > code span > italic. Bold precedes italic because both
//! use `*`. Inside a matched construct nothing else is interpreted: the first
//! closing delimiter wins.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize_inline;
pub use types::{InlineSpan, spans_to_plain};
