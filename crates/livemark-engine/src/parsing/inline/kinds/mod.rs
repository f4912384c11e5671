//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK`, a single backtick
//! - **`Emphasis`**: `STRONG = "**"`, `EM = "*"`
//! - **`Link`**: `OPEN = '['`, `TEXT_CLOSE = "]"`, `TARGET_OPEN = '('`, `TARGET_CLOSE = ")"`, `IMAGE_BANG = '!'`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
