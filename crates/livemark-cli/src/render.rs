//! Turns parsed nodes into styled terminal lines.

use livemark_engine::{CodeToken, DocumentNode, InlineSpan, TokenKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const RULE_WIDTH: usize = 40;

fn heading_style(level: u8) -> Style {
    let color = match level {
        1 => Color::Magenta,
        2 => Color::Cyan,
        _ => Color::Blue,
    };
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if level == 1 {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

fn token_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Keyword => Style::default().fg(Color::Magenta),
        TokenKind::String => Style::default().fg(Color::Green),
        TokenKind::Comment => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        TokenKind::Number => Style::default().fg(Color::LightYellow),
        TokenKind::Function => Style::default().fg(Color::Yellow),
        TokenKind::Punctuation => Style::default().fg(Color::Gray),
        TokenKind::Plain => Style::default(),
    }
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Styles a run of inline spans, applying `base` underneath.
fn inline_spans(spans: &[InlineSpan], base: Style) -> Vec<Span<'static>> {
    let mut out = vec![];
    for span in spans {
        match span {
            InlineSpan::Text(t) => out.push(Span::styled(t.clone(), base)),
            InlineSpan::Bold(t) => {
                out.push(Span::styled(t.clone(), base.add_modifier(Modifier::BOLD)))
            }
            InlineSpan::Italic(t) => {
                out.push(Span::styled(t.clone(), base.add_modifier(Modifier::ITALIC)))
            }
            InlineSpan::Code(t) => {
                out.push(Span::styled(t.clone(), base.fg(Color::Yellow).bg(Color::Black)))
            }
            InlineSpan::Link { text, href } => {
                out.push(Span::styled(
                    text.clone(),
                    base.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
                ));
                out.push(Span::styled(format!(" <{href}>"), dim()));
            }
            InlineSpan::Image { alt, src } => {
                out.push(Span::styled(format!("[image: {alt}]"), dim()));
                log::trace!("image source {src:?} not displayed");
            }
        }
    }
    out
}

fn code_line(tokens: &[CodeToken], tab_width: usize) -> Line<'static> {
    let mut spans = vec![Span::styled("│ ", dim())];
    spans.extend(tokens.iter().map(|t| {
        Span::styled(
            t.text.replace('\t', &" ".repeat(tab_width)),
            token_style(t.kind),
        )
    }));
    Line::from(spans)
}

fn prefixed(prefix: String, prefix_style: Style, spans: &[InlineSpan]) -> Line<'static> {
    let mut out = vec![Span::styled(prefix, prefix_style)];
    out.extend(inline_spans(spans, Style::default()));
    Line::from(out)
}

/// Renders every node to one or more lines. `Blank` nodes produce nothing.
pub fn render_nodes(nodes: &[DocumentNode], tab_width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for node in nodes {
        match node {
            DocumentNode::Heading { level, spans } => {
                lines.push(Line::from(inline_spans(spans, heading_style(*level))));
            }
            DocumentNode::Paragraph { spans } => {
                lines.push(Line::from(inline_spans(spans, Style::default())));
            }
            DocumentNode::BlockQuote { spans } => {
                let mut out = vec![Span::styled("▌ ", dim())];
                out.extend(inline_spans(
                    spans,
                    Style::default().add_modifier(Modifier::ITALIC),
                ));
                lines.push(Line::from(out));
            }
            DocumentNode::UnorderedList { items } => {
                for item in items {
                    lines.push(prefixed("  • ".into(), Style::default().fg(Color::Cyan), item));
                }
            }
            DocumentNode::OrderedList { items } => {
                for (i, item) in items.iter().enumerate() {
                    lines.push(prefixed(
                        format!("  {}. ", i + 1),
                        Style::default().fg(Color::Cyan),
                        item,
                    ));
                }
            }
            DocumentNode::HorizontalRule => {
                lines.push(Line::from(Span::styled("─".repeat(RULE_WIDTH), dim())));
            }
            DocumentNode::CodeBlock { language, lines: code } => {
                lines.push(Line::from(Span::styled(format!("╭─ {language}"), dim())));
                lines.extend(code.iter().map(|tokens| code_line(tokens, tab_width)));
                lines.push(Line::from(Span::styled("╰─", dim())));
            }
            DocumentNode::Blank => {}
        }
    }

    lines
}
