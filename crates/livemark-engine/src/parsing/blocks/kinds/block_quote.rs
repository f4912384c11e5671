/// Blockquote block type with owned delimiter constant.
///
/// Quotes are single-line in this grammar: consecutive `>` lines produce
/// separate nodes and `>>` is not nesting.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the `>` prefix and at most one following space.
    ///
    /// Returns `None` if the line doesn't start with `>`.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
