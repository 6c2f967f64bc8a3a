//! Inline button rows shared by the range selector and the filter bar.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::styles::Palette;

/// Gap between adjacent buttons.
const GAP: u16 = 1;

fn label_width(label: &str) -> u16 {
    u16::try_from(label.chars().count()).unwrap_or(u16::MAX)
}

/// Width of a button, including one cell of padding on each side.
#[must_use]
pub fn button_width(label: &str) -> u16 {
    label_width(label).saturating_add(2)
}

/// Build a line of buttons preceded by `prefix`. The `selected` button is
/// highlighted.
#[must_use]
pub fn button_line<'a>(
    prefix: &'a str,
    labels: &[&'a str],
    selected: Option<usize>,
    palette: &Palette,
) -> Line<'a> {
    let mut spans = Vec::with_capacity(labels.len() * 2 + 1);
    if !prefix.is_empty() {
        spans.push(Span::styled(prefix, palette.muted_style()));
    }
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if selected == Some(i) {
            palette.selected_style()
        } else {
            Style::default().fg(palette.muted).bg(palette.highlight)
        };
        spans.push(Span::styled(format!(" {label} "), style));
    }
    Line::from(spans)
}

/// Which button sits under `offset` cells from the start of the line.
#[must_use]
pub fn button_at(prefix: &str, labels: &[&str], offset: u16) -> Option<usize> {
    let mut x = label_width(prefix);
    if offset < x {
        return None;
    }
    for (i, label) in labels.iter().enumerate() {
        let end = x.saturating_add(button_width(label));
        if offset >= x && offset < end {
            return Some(i);
        }
        x = end.saturating_add(GAP);
    }
    None
}
