/// Splits a document into lines for block parsing.
///
/// Accepts `\n` and `\r\n` terminators. A trailing terminator does not start
/// an extra empty line, so `"a\n"` is one line and `""` is none.
pub fn source_lines(document: &str) -> impl Iterator<Item = &str> + '_ {
    document.lines()
}
