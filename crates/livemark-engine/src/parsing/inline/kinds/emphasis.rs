/// Bold and italic share the `*` delimiter, so `STRONG` must always be tried
/// before `EM`.
pub struct Emphasis;

impl Emphasis {
    pub const STRONG: &'static str = "**";
    pub const EM: &'static str = "*";
}
