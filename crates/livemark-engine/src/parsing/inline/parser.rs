use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link},
    types::InlineSpan,
};

/// Tokenizes one line of inline content into a sequence of [`InlineSpan`]s.
///
/// # Precedence
/// At each cursor position constructs are tried in a fixed order: image,
/// link, bold, code span, italic. The first that matches wins regardless of
/// how long a later candidate would have been. Closing delimiters are found
/// non-greedily, so `**a** and **b**` yields two bold spans.
///
/// # Returns
/// Spans covering the entire input. Anything that doesn't form a complete
/// construct, including unterminated openers, is emitted as `Text`. Adjacent
/// text is merged into one span.
pub fn tokenize_inline(line: &str) -> Vec<InlineSpan> {
    let mut cur = Cursor::new(line);
    let mut out = vec![];
    let mut text_start = 0;

    // Helper to flush accumulated text as a Text span
    fn flush_text(out: &mut Vec<InlineSpan>, text: &str) {
        if !text.is_empty() {
            out.push(InlineSpan::Text(text.to_string()));
        }
    }

    while !cur.eof() {
        let start = cur.i;
        let matched = try_parse_image(&mut cur)
            .or_else(|| try_parse_link(&mut cur))
            .or_else(|| try_parse_delimited(&mut cur, Emphasis::STRONG, InlineSpan::Bold))
            .or_else(|| try_parse_delimited(&mut cur, CodeSpan::TICK, InlineSpan::Code))
            .or_else(|| try_parse_delimited(&mut cur, Emphasis::EM, InlineSpan::Italic));

        match matched {
            Some(span) => {
                flush_text(&mut out, cur.slice(text_start, start));
                out.push(span);
                text_start = cur.i;
            }
            None => {
                cur.bump_char();
            }
        }
    }

    flush_text(&mut out, cur.slice(text_start, line.len()));
    out
}

/// Attempts to parse `open`-content-`open` at the current position.
///
/// The first occurrence of the delimiter after the opener closes the span.
/// Empty content (e.g. `**` followed directly by `**`) is not a match, which
/// keeps a lone `**` or `*` from swallowing its neighbour.
/// On failure the cursor is left untouched.
fn try_parse_delimited(
    cur: &mut Cursor<'_>,
    delim: &str,
    make: fn(String) -> InlineSpan,
) -> Option<InlineSpan> {
    if !cur.starts_with(delim.as_bytes()) {
        return None;
    }

    let inner_start = cur.i + delim.len();
    let inner_end = cur.find_from(inner_start, delim)?;
    if inner_end == inner_start {
        return None;
    }

    let inner = cur.slice(inner_start, inner_end).to_string();
    cur.jump_to(inner_end + delim.len());
    Some(make(inner))
}

/// Parses the `[label](target)` tail shared by links and images, starting at
/// byte index `open` which must hold `[`.
///
/// Returns `(label, target, end)` where `end` is the index just past `)`.
fn bracket_target<'a>(cur: &Cursor<'a>, open: usize) -> Option<(&'a str, &'a str, usize)> {
    let label_start = open + 1;
    let label_end = cur.find_from(label_start, Link::TEXT_CLOSE)?;

    if cur.s.as_bytes().get(label_end + 1) != Some(&Link::TARGET_OPEN) {
        return None;
    }
    let target_start = label_end + 2;
    let target_end = cur.find_from(target_start, Link::TARGET_CLOSE)?;

    Some((
        cur.slice(label_start, label_end),
        cur.slice(target_start, target_end),
        target_end + Link::TARGET_CLOSE.len(),
    ))
}

/// Attempts to parse an image `![alt](src)` at the current position.
fn try_parse_image(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if cur.peek() != Some(Link::IMAGE_BANG) || cur.peek_at(1) != Some(Link::OPEN) {
        return None;
    }

    let (alt, src, end) = bracket_target(cur, cur.i + 1)?;
    let span = InlineSpan::Image {
        alt: alt.to_string(),
        src: src.to_string(),
    };
    cur.jump_to(end);
    Some(span)
}

/// Attempts to parse a link `[text](href)` at the current position.
///
/// Empty display text `[]()` is still a link.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let (text, href, end) = bracket_target(cur, cur.i)?;
    let span = InlineSpan::Link {
        text: text.to_string(),
        href: href.to_string(),
    };
    cur.jump_to(end);
    Some(span)
}
