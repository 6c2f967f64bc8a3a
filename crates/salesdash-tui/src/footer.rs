//! Footer with keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::styles::Palette;

const HINTS: [(&str, &str); 9] = [
    ("q", "quit"),
    ("t", "theme"),
    ("m", "menu"),
    ("↑↓⏎", "nav"),
    ("r", "range"),
    ("←→", "hover"),
    ("Tab", "segment"),
    ("f", "filter"),
    ("s/g/n", "sort"),
];

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect, palette: &Palette) {
    let mut spans = Vec::with_capacity(HINTS.len() * 3);
    for (i, (key, help)) in HINTS.iter().enumerate() {
        spans.push(Span::styled(if i == 0 { " " } else { " | " }, palette.muted_style()));
        spans.push(Span::styled(*key, palette.header_style()));
        spans.push(Span::styled(format!(": {help}"), palette.muted_style()));
    }
    spans.push(Span::styled(" | ", palette.muted_style()));
    spans.push(Span::styled("p", palette.header_style()));
    spans.push(Span::styled(": profile", palette.muted_style()));
    let paragraph = Paragraph::new(Line::from(spans)).style(palette.surface_style());
    frame.render_widget(paragraph, area);
}
