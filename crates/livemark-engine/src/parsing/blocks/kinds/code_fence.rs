pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// If `line` opens a fence, returns its language tag (empty when absent).
    ///
    /// Only the first word after the backticks is the tag; any further info
    /// string is ignored. A backtick anywhere after the opener means the line
    /// is inline code, not a fence.
    pub fn opens(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::BACKTICKS)?;
        if rest.contains('`') {
            return None;
        }
        Some(rest.split_whitespace().next().unwrap_or(""))
    }

    /// A closing fence is exactly three backticks, surrounding whitespace aside.
    pub fn closes(line: &str) -> bool {
        line.trim() == Self::BACKTICKS
    }
}
