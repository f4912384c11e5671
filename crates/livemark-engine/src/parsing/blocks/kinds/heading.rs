pub struct Heading;

impl Heading {
    pub const MARK: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Parses an ATX heading: a run of `#` followed by a space.
    ///
    /// Runs longer than six are clamped to level 6 rather than rejected.
    /// Returns the level and the trimmed heading text.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let run = line.len() - line.trim_start_matches(Self::MARK).len();
        if run == 0 {
            return None;
        }
        let text = line[run..].strip_prefix(' ')?;
        let level = run.min(Self::MAX_LEVEL as usize) as u8;
        Some((level, text.trim()))
    }
}
