//! Top bar and page greeting.

use chrono::NaiveDate;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use salesdash_core::constants::{USER_FIRST_NAME, USER_INITIALS};
use salesdash_core::NOTIFICATION_COUNT;

use crate::styles::Palette;

/// Theme indicator: the sun offers light mode, the moon offers dark mode.
#[must_use]
pub fn theme_glyph(dark: bool) -> &'static str {
    if dark {
        "☀"
    } else {
        "☾"
    }
}

/// Long date such as "Monday, October 19, 2026".
#[must_use]
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Render the top bar: menu toggle, title, theme indicator, notification
/// badge and avatar.
pub fn render_top_bar(frame: &mut Frame, area: Rect, palette: &Palette, menu_open: bool) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(palette.border_style())
        .style(palette.surface_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Line::from(vec![
        Span::styled(" ☰ ", palette.muted_style()),
        Span::styled(
            "Dashboard Overview",
            palette.text_style().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), inner);

    let avatar_style = if menu_open {
        palette.selected_style()
    } else {
        Style::default().fg(palette.surface).bg(palette.accent)
    };
    let controls = Line::from(vec![
        Span::styled(theme_glyph(palette.mode.is_dark()), palette.muted_style()),
        Span::raw("  "),
        Span::styled("♪", palette.muted_style()),
        Span::styled(
            format!("{NOTIFICATION_COUNT}"),
            Style::default()
                .fg(palette.surface)
                .bg(palette.error)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!(" {USER_INITIALS} "), avatar_style),
        Span::raw(" "),
    ]);
    frame.render_widget(Paragraph::new(controls).alignment(Alignment::Right), inner);
}

/// Render the greeting line and today's date.
pub fn render_greeting(frame: &mut Frame, area: Rect, palette: &Palette, today: NaiveDate) {
    let lines = vec![
        Line::from(Span::styled(
            format!(" Good morning, {USER_FIRST_NAME}"),
            palette.text_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", format_long_date(today)),
            palette.muted_style(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).style(palette.base_style()), area);
}
