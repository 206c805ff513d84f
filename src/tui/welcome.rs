//! Drawing a welcome [`Document`] onto a ratatui frame.
//!
//! The standard layout is a bordered sheet centered over the host content;
//! the immersive layout covers the whole frame.

use super::colors;
use super::layout::{centered_rect_absolute, wrap_words};
use crate::render::{
    Background, Block as BodyBlock, Button, Document, FeatureRow, Icon, Inline, RichText,
    WelcomeStyle,
};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

const SHEET_WIDTH_PERCENT: u16 = 60;
const SHEET_PADDING: u16 = 2;

/// Draw `document` over whatever is already on the frame.
pub fn draw_document(frame: &mut Frame<'_>, document: &Document) {
    let area = frame.area();
    match document.style {
        WelcomeStyle::Standard => draw_sheet(frame, document, area),
        WelcomeStyle::Immersive => draw_cover(frame, document, area),
    }
}

/// Area the standard sheet occupies inside `area`.
#[must_use]
pub fn sheet_rect(document: &Document, area: Rect) -> Rect {
    sheet_layout(document, area).0
}

/// Sheet area and the lines drawn inside its border.
fn sheet_layout(document: &Document, area: Rect) -> (Rect, Vec<Line<'static>>) {
    let max_lines = usize::from(area.height.saturating_sub(2));
    let lines = sheet_lines(document, sheet_text_width(area), max_lines);
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    (
        centered_rect_absolute(SHEET_WIDTH_PERCENT, height, area),
        lines,
    )
}

fn sheet_text_width(area: Rect) -> usize {
    let width = centered_rect_absolute(SHEET_WIDTH_PERCENT, 1, area).width;
    usize::from(width.saturating_sub(2 + SHEET_PADDING * 2).max(1))
}

fn draw_sheet(frame: &mut Frame<'_>, document: &Document, area: Rect) {
    let (rect, lines) = sheet_layout(document, area);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER))
                .padding(Padding::horizontal(SHEET_PADDING)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, rect);
    frame.render_widget(paragraph, rect);
}

fn draw_cover(frame: &mut Frame<'_>, document: &Document, area: Rect) {
    let width = usize::from(area.width.saturating_sub(SHEET_PADDING * 4).max(1));
    let mut lines = cover_lines(document, width, usize::from(area.height));

    let (bg, caption) = match &document.background {
        Background::Solid(color) => (colors::from_config(*color), None),
        Background::Image(name) => (colors::SURFACE, Some(format!("background: {name}"))),
        Background::Surface => (colors::SURFACE, None),
    };

    // Content hangs from the bottom edge, leaving the top to the backdrop.
    let content_height = lines.len().saturating_add(1);
    let top_pad = usize::from(area.height).saturating_sub(content_height);
    let mut padded: Vec<Line<'static>> = Vec::with_capacity(top_pad + lines.len());
    if let Some(caption) = caption
        && top_pad > 0
    {
        padded.push(
            Line::from(Span::styled(caption, Style::default().fg(colors::TEXT_MUTED)))
                .right_aligned(),
        );
        padded.extend((1..top_pad).map(|_| Line::from("")));
    } else {
        padded.extend((0..top_pad).map(|_| Line::from("")));
    }
    padded.append(&mut lines);

    let paragraph = Paragraph::new(padded).style(Style::default().bg(bg));
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn sheet_lines(document: &Document, width: usize, max_lines: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];

    if let Some(icon) = &document.icon {
        lines.push(icon_line(icon));
        lines.push(Line::from(""));
    }

    let title_style = Style::default()
        .fg(colors::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD);
    for title in &document.title {
        lines.extend(centered_plain(title, title_style, width));
    }
    lines.push(Line::from(""));

    push_body(&mut lines, &document.body, width, colors::TEXT_DIM);
    push_disclaimer(&mut lines, document, width);
    fit_lines(lines, footer_lines(document), max_lines)
}

fn cover_lines(document: &Document, width: usize, max_lines: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let title_style = Style::default()
        .fg(colors::TEXT_ON_ACCENT)
        .add_modifier(Modifier::BOLD);
    for title in &document.title {
        lines.extend(centered_plain(title, title_style, width));
    }
    lines.push(Line::from(""));

    push_body(&mut lines, &document.body, width, colors::TEXT_PRIMARY);
    push_disclaimer(&mut lines, document, width);
    fit_lines(lines, footer_lines(document), max_lines)
}

/// Join `content` and `footer` within `max_lines`, cutting content first so
/// the button and key hint stay on screen.
fn fit_lines(
    mut content: Vec<Line<'static>>,
    mut footer: Vec<Line<'static>>,
    max_lines: usize,
) -> Vec<Line<'static>> {
    footer.truncate(max_lines);
    content.truncate(max_lines - footer.len());
    content.append(&mut footer);
    content
}

fn push_body(lines: &mut Vec<Line<'static>>, body: &[BodyBlock], width: usize, text: Color) {
    for block in body {
        match block {
            BodyBlock::Intro(rich) => {
                lines.extend(rich_lines(rich, Style::default().fg(text), width));
                lines.push(Line::from(""));
            }
            BodyBlock::Highlight(rich) => {
                let style = Style::default()
                    .fg(colors::TEXT_ON_ACCENT)
                    .add_modifier(Modifier::BOLD);
                lines.extend(rich_lines(rich, style, width));
                lines.push(Line::from(""));
            }
            BodyBlock::Feature(row) => {
                lines.extend(feature_lines(row, width));
                lines.push(Line::from(""));
            }
        }
    }
}

fn push_disclaimer(lines: &mut Vec<Line<'static>>, document: &Document, width: usize) {
    if let Some(disclaimer) = &document.disclaimer {
        lines.extend(rich_lines(
            disclaimer,
            Style::default().fg(colors::TEXT_MUTED),
            width,
        ));
        lines.push(Line::from(""));
    }
}

fn footer_lines(document: &Document) -> Vec<Line<'static>> {
    let mut lines = vec![button_line(&document.continue_button)];
    if let Some(privacy) = &document.privacy_link {
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                privacy.label.clone(),
                Style::default()
                    .fg(colors::from_config(privacy.color))
                    .add_modifier(Modifier::UNDERLINED),
            ))
            .centered(),
        );
    }

    lines.push(Line::from(""));
    let hint = if document.privacy_link.is_some() {
        "Enter continue · Esc close · p privacy"
    } else {
        "Enter continue · Esc close"
    };
    lines.push(
        Line::from(Span::styled(hint, Style::default().fg(colors::TEXT_MUTED))).centered(),
    );
    lines
}

fn icon_line(icon: &Icon) -> Line<'static> {
    let badge = |text: String, color| {
        Span::styled(
            text,
            Style::default()
                .fg(colors::TEXT_ON_ACCENT)
                .bg(colors::from_config(color))
                .add_modifier(Modifier::BOLD),
        )
    };

    let spans = match icon {
        Icon::Image(name) => vec![Span::styled(
            format!("▣ {name}"),
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )],
        Icon::Symbol { name, tint } => vec![badge(format!("  {name}  "), *tint)],
        Icon::Default { tint, accent } => vec![
            badge("  ".to_string(), *tint),
            badge(format!(" {} ", icon.glyph()), *accent),
            badge("  ".to_string(), *tint),
        ],
    };
    Line::from(spans).centered()
}

fn feature_lines(row: &FeatureRow, width: usize) -> Vec<Line<'static>> {
    let mut title_spans = Vec::new();
    let mut indent = 0usize;
    if let Some(badge) = &row.badge {
        let label = format!(" {} ", badge.symbol);
        indent = label.chars().count() + 1;
        title_spans.push(Span::styled(
            label,
            Style::default()
                .fg(colors::TEXT_ON_ACCENT)
                .bg(colors::from_config(badge.color)),
        ));
        title_spans.push(Span::raw(" "));
    }
    title_spans.push(Span::styled(
        row.title.clone(),
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    ));

    let mut lines = vec![Line::from(title_spans)];
    if let Some(description) = &row.description {
        let pad = " ".repeat(indent);
        let available = width.saturating_sub(indent).max(1);
        lines.extend(wrap_words(description, available).into_iter().map(|text| {
            Line::from(vec![
                Span::raw(pad.clone()),
                Span::styled(text, Style::default().fg(colors::TEXT_DIM)),
            ])
        }));
    }
    lines
}

fn button_line(button: &Button) -> Line<'static> {
    Line::from(Span::styled(
        format!("   {}   ", button.label),
        Style::default()
            .fg(colors::TEXT_ON_ACCENT)
            .bg(colors::from_config(button.color))
            .add_modifier(Modifier::BOLD),
    ))
    .centered()
}

fn centered_plain(text: &str, style: Style, width: usize) -> Vec<Line<'static>> {
    wrap_words(text, width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, style)).centered())
        .collect()
}

/// A word made of differently styled pieces ("docs," is a link + text).
#[derive(Default)]
struct Word {
    pieces: Vec<(String, Style)>,
    len: usize,
}

fn rich_words(text: &RichText, base: Style) -> Vec<Word> {
    let link_style = Style::default()
        .fg(colors::LINK)
        .add_modifier(Modifier::UNDERLINED);

    let mut words = Vec::new();
    let mut current: Option<Word> = None;

    for run in &text.runs {
        let (content, style) = match run {
            Inline::Text(text) => (text.as_str(), base),
            Inline::Link { label, .. } => (label.as_str(), link_style),
        };

        for ch in content.chars() {
            if ch.is_whitespace() {
                words.extend(current.take());
                continue;
            }
            let word = current.get_or_insert_with(Word::default);
            match word.pieces.last_mut() {
                Some((piece, piece_style)) if *piece_style == style => piece.push(ch),
                _ => word.pieces.push((ch.to_string(), style)),
            }
            word.len += 1;
        }
    }
    words.extend(current);
    words
}

fn rich_lines(text: &RichText, base: Style, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut line_len = 0usize;

    for word in rich_words(text, base) {
        if line_len != 0 && line_len + 1 + word.len > width {
            lines.push(Line::from(std::mem::take(&mut spans)).centered());
            line_len = 0;
        }
        if line_len != 0 {
            spans.push(Span::styled(" ", base));
            line_len += 1;
        }
        line_len += word.len;
        spans.extend(
            word.pieces
                .into_iter()
                .map(|(piece, style)| Span::styled(piece, style)),
        );
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans).centered());
    }

    if let Some((_, target)) = text.link() {
        lines.push(
            Line::from(Span::styled(
                format!("→ {target}"),
                Style::default().fg(colors::TEXT_MUTED),
            ))
            .centered(),
        );
    }
    lines
}
