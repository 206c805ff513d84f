//! Sizing and wrapping helpers for overlays.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Create a centered rect with percentage width and absolute height
#[must_use]
pub fn centered_rect_absolute(percent_x: u16, height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    let vertical_padding = area.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_padding),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let side = (100 - percent_x.min(100)) / 2;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(side),
            Constraint::Percentage(percent_x),
            Constraint::Percentage(side),
        ])
        .split(popup_layout[1])[1]
}

/// Word-wrap `text` into lines of at most `width` characters.
///
/// Words longer than `width` are split at character boundaries. An empty
/// input yields no lines.
#[must_use]
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let mut rest = word;
        loop {
            let word_len = rest.chars().count();
            let needed = if current_len == 0 {
                word_len
            } else {
                current_len.saturating_add(1).saturating_add(word_len)
            };

            if needed <= width {
                if current_len != 0 {
                    current.push(' ');
                }
                current.push_str(rest);
                current_len = needed;
                break;
            }

            if current_len != 0 {
                out.push(std::mem::take(&mut current));
                current_len = 0;
                continue;
            }

            let split = rest
                .char_indices()
                .nth(width)
                .map_or(rest.len(), |(idx, _)| idx);
            out.push(rest[..split].to_string());
            rest = &rest[split..];
            if rest.is_empty() {
                break;
            }
        }
    }

    if current_len != 0 {
        out.push(current);
    }
    out
}
