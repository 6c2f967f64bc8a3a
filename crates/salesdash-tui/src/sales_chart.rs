//! Sales performance card: range selector, summary tiles and the
//! Sales/Target line chart.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;
use salesdash_core::format::format_dollars;
use salesdash_core::trend::nearest_sample;
use salesdash_core::{SalesPeriod, SalesTrendState, TimeRange};

use crate::buttons::{button_at, button_line};
use crate::layout::{contains, SalesLayout};
use crate::styles::Palette;

/// y axis ceiling: the window maximum rounded up to the next thousand.
#[must_use]
pub fn y_ceiling(window: &[SalesPeriod]) -> u32 {
    let max = window
        .iter()
        .map(|p| p.sales.max(p.target))
        .max()
        .unwrap_or(0);
    max.div_ceil(1000).max(1) * 1000
}

/// y axis labels, bottom to top.
#[must_use]
pub fn y_labels(ceiling: u32) -> Vec<String> {
    [0, ceiling / 2, ceiling]
        .into_iter()
        .map(format_dollars)
        .collect()
}

/// The plotting area inside `chart`, after the y labels and the x axis.
#[must_use]
pub fn plot_area(chart: Rect, ceiling: u32) -> Rect {
    let label_width = y_labels(ceiling)
        .iter()
        .map(|l| u16::try_from(l.chars().count()).unwrap_or(u16::MAX))
        .max()
        .unwrap_or(0)
        .max(2)
        .min(chart.width / 3);
    let left = label_width + 1;
    Rect {
        x: chart.x + left,
        y: chart.y,
        width: chart.width.saturating_sub(left),
        height: chart.height.saturating_sub(2),
    }
}

/// Window index of the sample nearest the pointer, if it is over the plot.
#[must_use]
pub fn sample_under(chart: Rect, window: &[SalesPeriod], column: u16, row: u16) -> Option<usize> {
    let plot = plot_area(chart, y_ceiling(window));
    if !contains(plot, column, row) {
        return None;
    }
    nearest_sample(column - plot.x, plot.width, window.len())
}

fn range_names() -> [&'static str; 4] {
    TimeRange::ALL.map(TimeRange::name)
}

/// Range button under the pointer.
#[must_use]
pub fn range_at(area: Rect, column: u16, row: u16) -> Option<TimeRange> {
    if !contains(area, column, row) {
        return None;
    }
    button_at("", &range_names(), column - area.x).map(|i| TimeRange::ALL[i])
}

#[allow(clippy::cast_precision_loss)]
fn points(window: &[SalesPeriod], value: impl Fn(&SalesPeriod) -> u32) -> Vec<(f64, f64)> {
    window
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, f64::from(value(p))))
        .collect()
}

/// Render the whole card.
pub fn render_sales(
    frame: &mut Frame,
    layout: &SalesLayout,
    series: &[SalesPeriod],
    state: &SalesTrendState,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .title(Span::styled(" ▥ Sales Performance ", palette.header_style()))
        .style(palette.surface_style());
    frame.render_widget(block, layout.block);

    render_ranges(frame, layout.ranges, state.range, palette);
    render_tiles(frame, layout.tiles, state.summary(series), palette);
    render_chart(frame, layout.chart, state.filtered(series), state.hovered_index(series), palette);
}

fn render_ranges(frame: &mut Frame, area: Rect, range: TimeRange, palette: &Palette) {
    let names = range_names();
    let selected = TimeRange::ALL.iter().position(|r| *r == range);
    let mut line = button_line("", &names, selected, palette);
    line.spans.push(Span::styled(format!("  {}", range.label()), palette.muted_style()));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_tiles(frame: &mut Frame, area: Rect, summary: Option<SalesPeriod>, palette: &Palette) {
    let Some(period) = summary else {
        return;
    };
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);
    let tiles = [
        ("Total Sales", period.sales, palette.sales_series),
        ("Target", period.target, palette.target_series),
        ("Profit", period.profit, palette.success),
    ];
    for ((label, value, color), col) in tiles.into_iter().zip(cols.iter()) {
        let text = vec![
            Line::from(Span::styled(label, Style::default().fg(color))),
            Line::from(Span::styled(
                format_dollars(value),
                palette.text_style().add_modifier(Modifier::BOLD),
            )),
        ];
        frame.render_widget(Paragraph::new(text), *col);
    }
}

#[allow(clippy::cast_precision_loss)]
fn render_chart(
    frame: &mut Frame,
    area: Rect,
    window: &[SalesPeriod],
    hovered: Option<usize>,
    palette: &Palette,
) {
    if window.is_empty() {
        return;
    }
    let ceiling = y_ceiling(window);
    let sales = points(window, |p| p.sales);
    let target = points(window, |p| p.target);
    let marker: Vec<(f64, f64)> = hovered
        .into_iter()
        .flat_map(|i| [sales[i], target[i]])
        .collect();

    let mut datasets = vec![
        Dataset::default()
            .name("Sales")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette.sales_series))
            .data(&sales),
        Dataset::default()
            .name("Target")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette.target_series))
            .data(&target),
    ];
    if !marker.is_empty() {
        datasets.push(
            Dataset::default()
                .marker(Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(palette.text))
                .data(&marker),
        );
    }

    let x_labels: Vec<Line> = window
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let style = if hovered == Some(i) {
                palette.text_style().add_modifier(Modifier::BOLD)
            } else {
                palette.muted_style()
            };
            Line::from(Span::styled(p.month, style))
        })
        .collect();
    let y_labels: Vec<Line> = y_labels(ceiling)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, palette.muted_style())))
        .collect();

    let chart = Chart::new(datasets)
        .style(palette.surface_style())
        .x_axis(
            Axis::default()
                .style(palette.border_style())
                .bounds([0.0, (window.len().saturating_sub(1)).max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(palette.border_style())
                .bounds([0.0, f64::from(ceiling)])
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}
