//! KPI stat cards with eighth-block sparkline bars.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use salesdash_core::constants::SPARK_CONTAINER_EIGHTHS;
use salesdash_core::{SparkScale, StatCard};

use crate::styles::Palette;

/// Block characters for 0..=8 eighths of a cell.
const EIGHTHS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Rows the sparkline container spans.
pub const SPARK_ROWS: u16 = SPARK_CONTAINER_EIGHTHS / 8;

/// Glyph for a bar of `height` eighths at `row` (0 = bottom).
#[must_use]
pub fn bar_glyph(height: u16, row: u16) -> char {
    let level = height.saturating_sub(row * 8).min(8);
    EIGHTHS[usize::from(level)]
}

/// Text rows of the sparkline, top row first. Each bar is `bar_width`
/// columns wide with one blank column between bars.
#[must_use]
pub fn spark_rows(heights: &[u16], rows: u16, bar_width: u16) -> Vec<String> {
    (0..rows)
        .rev()
        .map(|row| {
            let mut line = String::new();
            for (i, &h) in heights.iter().enumerate() {
                if i > 0 {
                    line.push(' ');
                }
                let glyph = bar_glyph(h, row);
                for _ in 0..bar_width {
                    line.push(glyph);
                }
            }
            line
        })
        .collect()
}

/// Widest bars that fit `width` columns, between 1 and 3.
#[must_use]
pub fn bar_width_for(width: u16, bars: usize) -> u16 {
    let bars = u16::try_from(bars).unwrap_or(u16::MAX).max(1);
    let gaps = bars - 1;
    (width.saturating_sub(gaps) / bars).clamp(1, 3)
}

/// Render a single card.
pub fn render_stat_card(frame: &mut Frame, area: Rect, card: &StatCard, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .title_bottom(Span::styled(" Last 7 days ", palette.muted_style()))
        .style(palette.surface_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    let positive = card.direction.is_positive();
    let text = vec![
        Line::from(vec![
            Span::styled(
                card.icon.glyph(),
                Style::default().fg(palette.token_color(card.color)),
            ),
            Span::raw(" "),
            Span::styled(card.name, palette.muted_style()),
        ]),
        Line::from(Span::styled(
            card.value,
            palette.text_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(card.direction.indicator(), palette.change_style(positive)),
            Span::raw(" "),
            Span::styled(card.change, palette.change_style(positive)),
        ]),
    ];
    frame.render_widget(Paragraph::new(text), rows[0]);

    let heights = SparkScale::default().heights(&card.trend);
    let bar_width = bar_width_for(rows[1].width, heights.len());
    let lines: Vec<Line> = spark_rows(&heights, SPARK_ROWS.min(rows[1].height), bar_width)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, palette.change_style(positive))))
        .collect();
    frame.render_widget(Paragraph::new(lines), rows[1]);
}

/// Render all cards into their slots.
pub fn render_stat_cards(frame: &mut Frame, slots: &[Rect], cards: &[StatCard], palette: &Palette) {
    for (area, card) in slots.iter().zip(cards) {
        render_stat_card(frame, *area, card, palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use salesdash_core::data::STAT_CARDS;

    fn row_text(buf: &ratatui::buffer::Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn glyph_levels() {
        assert_eq!(bar_glyph(0, 0), ' ');
        assert_eq!(bar_glyph(4, 0), '▄');
        assert_eq!(bar_glyph(8, 0), '█');
        assert_eq!(bar_glyph(20, 0), '█');
        assert_eq!(bar_glyph(20, 1), '█');
        assert_eq!(bar_glyph(20, 2), '▄');
        assert_eq!(bar_glyph(20, 3), ' ');
    }

    #[test]
    fn capped_bars_stop_below_the_container_top() {
        // 81% of 32 eighths is 25, capped to 24: three full rows, empty top
        let rows = spark_rows(&[24], SPARK_ROWS, 1);
        assert_eq!(rows, vec![" ", "█", "█", "█"]);
    }

    #[test]
    fn sample_trend_rows() {
        let heights = SparkScale::default().heights(&[65, 59, 80, 81, 56, 55, 70]);
        assert_eq!(heights, vec![20, 18, 24, 24, 17, 17, 22]);
        let rows = spark_rows(&heights, SPARK_ROWS, 1);
        assert_eq!(rows[0], "             ");
        assert_eq!(rows[1], "▄ ▂ █ █ ▁ ▁ ▆");
        assert_eq!(rows[3], "█ █ █ █ █ █ █");
    }

    #[test]
    fn bar_width_fits() {
        assert_eq!(bar_width_for(13, 7), 1);
        assert_eq!(bar_width_for(20, 7), 2);
        assert_eq!(bar_width_for(60, 7), 3);
        assert_eq!(bar_width_for(3, 7), 1);
    }

    #[test]
    fn card_renders_name_value_and_change() {
        let backend = TestBackend::new(26, 9);
        let mut terminal = Terminal::new(backend).unwrap();
        let palette = Palette::light();
        let card = STAT_CARDS[0];
        let buf = terminal
            .draw(|frame| render_stat_card(frame, frame.area(), &card, &palette))
            .unwrap();
        assert!(row_text(buf.buffer, 1).contains(card.name));
        assert!(row_text(buf.buffer, 2).contains(card.value));
        assert!(row_text(buf.buffer, 3).contains(card.change));
        assert!(row_text(buf.buffer, 3).contains(card.direction.indicator()));
        assert!(row_text(buf.buffer, 8).contains("Last 7 days"));
        assert!(row_text(buf.buffer, 7).contains('█'));
    }

    #[test]
    fn negative_card_uses_error_colour() {
        let backend = TestBackend::new(26, 9);
        let mut terminal = Terminal::new(backend).unwrap();
        let palette = Palette::light();
        let card = STAT_CARDS
            .iter()
            .find(|c| !c.direction.is_positive())
            .copied()
            .unwrap();
        let buf = terminal
            .draw(|frame| render_stat_card(frame, frame.area(), &card, &palette))
            .unwrap();
        assert_eq!(buf.buffer[(1, 3)].fg, palette.error);
    }
}
