pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARK: char = '-';
    pub const MIN_RUN: usize = 3;

    /// A rule is three or more `-` and nothing else once trimmed.
    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        t.len() >= Self::MIN_RUN && t.chars().all(|c| c == Self::MARK)
    }
}
