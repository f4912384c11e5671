/// Links `[text](href)` and images `![alt](src)`.
///
/// The text part closes at the first `]`, which must be immediately followed
/// by `(`; the target closes at the first `)`.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const TEXT_CLOSE: &'static str = "]";
    pub const TARGET_OPEN: u8 = b'(';
    pub const TARGET_CLOSE: &'static str = ")";
    pub const IMAGE_BANG: u8 = b'!';
}
