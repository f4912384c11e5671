/// Code span inline type with owned delimiter constant.
///
/// The first backtick after the opener closes the span; nothing inside is
/// interpreted.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const TICK: &'static str = "`";
}
