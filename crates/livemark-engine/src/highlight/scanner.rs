use crate::parsing::inline::cursor::Cursor;

use super::{
    language::LanguageDef,
    types::{CodeToken, TokenKind},
};

/// Tokenizes one line of code for a known language.
///
/// At each position the rules are tried in order: string literal, line
/// comment, number, identifier (function call, keyword or plain name), then a
/// single-character fallback. A rule that doesn't match falls through to the
/// next, so the scan always terminates and covers the whole line.
pub fn scan_line(def: &LanguageDef, line: &str) -> Vec<CodeToken> {
    let mut cur = Cursor::new(line);
    let mut out: Vec<CodeToken> = vec![];

    while !cur.eof() {
        let start = cur.i;
        let kind = try_string(def, &mut cur)
            .or_else(|| try_comment(def, &mut cur))
            .or_else(|| try_number(&mut cur))
            .or_else(|| try_identifier(def, &mut cur))
            .unwrap_or_else(|| single_char(&mut cur));
        push_token(&mut out, kind, cur.slice(start, cur.i));
    }

    out
}

/// Adjacent plain fragments are merged; everything else stays separate.
fn push_token(out: &mut Vec<CodeToken>, kind: TokenKind, text: &str) {
    if kind == TokenKind::Plain
        && let Some(last) = out.last_mut()
        && last.kind == TokenKind::Plain
    {
        last.text.push_str(text);
        return;
    }
    out.push(CodeToken::new(kind, text));
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A quote, anything, then the next occurrence of the same quote.
fn try_string(def: &LanguageDef, cur: &mut Cursor<'_>) -> Option<TokenKind> {
    let quote = cur.rest().chars().next().filter(|&c| def.is_quote(c))?;
    let body_start = cur.i + quote.len_utf8();
    let close = cur.s.get(body_start..)?.find(quote)? + body_start;
    cur.jump_to(close + quote.len_utf8());
    Some(TokenKind::String)
}

fn try_comment(def: &LanguageDef, cur: &mut Cursor<'_>) -> Option<TokenKind> {
    let marker = def.line_comment.as_deref()?;
    if marker.is_empty() || !cur.starts_with(marker.as_bytes()) {
        return None;
    }
    cur.jump_to(cur.s.len());
    Some(TokenKind::Comment)
}

/// Digits, optionally followed by one `.` and more digits.
fn try_number(cur: &mut Cursor<'_>) -> Option<TokenKind> {
    let digits = |s: &str| s.bytes().take_while(u8::is_ascii_digit).count();

    let int_len = digits(cur.rest());
    if int_len == 0 {
        return None;
    }
    cur.bump_n(int_len);

    if cur.peek() == Some(b'.') {
        let frac_len = digits(&cur.rest()[1..]);
        if frac_len > 0 {
            cur.bump_n(1 + frac_len);
        }
    }
    Some(TokenKind::Number)
}

/// Consumes a whole identifier so keywords only match on word boundaries.
fn try_identifier(def: &LanguageDef, cur: &mut Cursor<'_>) -> Option<TokenKind> {
    let rest = cur.rest();
    if !rest.chars().next().is_some_and(is_ident_start) {
        return None;
    }

    let len = rest
        .char_indices()
        .find(|&(_, c)| !is_ident_continue(c))
        .map_or(rest.len(), |(i, _)| i);
    let word = &rest[..len];
    cur.bump_n(len);

    Some(if cur.peek() == Some(b'(') {
        TokenKind::Function
    } else if def.is_keyword(word) {
        TokenKind::Keyword
    } else {
        TokenKind::Plain
    })
}

fn single_char(cur: &mut Cursor<'_>) -> TokenKind {
    match cur.bump_char() {
        Some(c) if c.is_ascii_punctuation() => TokenKind::Punctuation,
        _ => TokenKind::Plain,
    }
}
