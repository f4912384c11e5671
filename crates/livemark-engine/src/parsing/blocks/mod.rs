//! # Block Parsing
//!
//! Two-phase, line-at-a-time block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    from local facts only (fence opener, heading marker, list marker, blank status)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` carries the only cross-line
//!    state (an open list group or an open fence) and emits `DocumentNode`s
//!
//! ## Modules
//!
//! - **`types`**: `DocumentNode`
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, ...)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Nodes come out in source line order
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - A blank line always closes an open list

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::DocumentNode;
