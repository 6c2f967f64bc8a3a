//! Revenue-by-segment donut, legend and tooltip.
//!
//! The ring is drawn on a Braille canvas whose bounds are stretched to the
//! widget's aspect ratio (a cell is about twice as tall as it is wide) so
//! the ring stays round. Pointer cells are mapped back into the same
//! canvas space for hit-testing.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use salesdash_core::constants::{RING_ACTIVE_SCALE, RING_INNER_RADIUS, RING_OUTER_RADIUS};
use salesdash_core::revenue::{layout_wedges, segment_at, segment_color, Wedge};
use salesdash_core::{RevenueSegment, RevenueState, REVENUE_CENTER_TOTAL};

use crate::layout::{contains, RevenueLayout};
use crate::styles::{rgb, Palette};

const OUTLINE_WIDTH: f64 = 0.04;
const SHADOW_OFFSET: f64 = 0.05;

/// Canvas x and y bounds for a widget area.
#[must_use]
pub fn canvas_bounds(area: Rect) -> ([f64; 2], [f64; 2]) {
    if area.width == 0 || area.height == 0 {
        return ([-1.0, 1.0], [-1.0, 1.0]);
    }
    let aspect = f64::from(area.width) / (2.0 * f64::from(area.height));
    if aspect >= 1.0 {
        ([-aspect, aspect], [-1.0, 1.0])
    } else {
        ([-1.0, 1.0], [-1.0 / aspect, 1.0 / aspect])
    }
}

/// Canvas coordinates of the centre of a terminal cell.
#[must_use]
pub fn to_canvas(area: Rect, column: u16, row: u16) -> (f64, f64) {
    let ([x0, x1], [y0, y1]) = canvas_bounds(area);
    let fx = (f64::from(column.saturating_sub(area.x)) + 0.5) / f64::from(area.width.max(1));
    let fy = (f64::from(row.saturating_sub(area.y)) + 0.5) / f64::from(area.height.max(1));
    (x0 + fx * (x1 - x0), y1 - fy * (y1 - y0))
}

/// Segment under a pointer cell, if the cell lies on the ring.
#[must_use]
pub fn segment_under(area: Rect, wedges: &[Wedge], column: u16, row: u16) -> Option<usize> {
    if !contains(area, column, row) {
        return None;
    }
    let (x, y) = to_canvas(area, column, row);
    segment_at(wedges, x, y)
}

/// Braille dot positions of one wedge between two radii, shifted by
/// `offset`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn wedge_points(
    area: Rect,
    wedge: &Wedge,
    inner: f64,
    outer: f64,
    offset: (f64, f64),
) -> Vec<(f64, f64)> {
    let ([x0, x1], [y0, y1]) = canvas_bounds(area);
    let cols = usize::from(area.width) * 2;
    let rows = usize::from(area.height) * 4;
    let mut points = Vec::new();
    for j in 0..rows {
        let y = y1 - (j as f64 + 0.5) / rows as f64 * (y1 - y0);
        for i in 0..cols {
            let x = x0 + (i as f64 + 0.5) / cols as f64 * (x1 - x0);
            let (dx, dy) = (x - offset.0, y - offset.1);
            let r = dx.hypot(dy);
            if r < inner || r > outer {
                continue;
            }
            let angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
            if wedge.contains(angle) {
                points.push((x, y));
            }
        }
    }
    points
}

/// Render the card: ring, centre total, legend and tooltip.
pub fn render_revenue(
    frame: &mut Frame,
    layout: &RevenueLayout,
    segments: &[RevenueSegment],
    state: &RevenueState,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .title(Span::styled(" ◔ Revenue by Segment ", palette.header_style()))
        .style(palette.surface_style());
    frame.render_widget(block, layout.block);

    render_ring(frame, layout.ring, segments, state, palette);
    render_legend(frame, layout.legend, segments, palette);
    if let Some(segment) = state.active().and_then(|i| segments.get(i)) {
        render_tooltip(frame, layout.legend, segment, palette);
    }
}

fn render_ring(
    frame: &mut Frame,
    area: Rect,
    segments: &[RevenueSegment],
    state: &RevenueState,
    palette: &Palette,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let wedges = layout_wedges(segments);
    let (x_bounds, y_bounds) = canvas_bounds(area);
    let active = state.active();
    let outline = palette.surface;
    let shadow = palette.border;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(palette.surface)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| {
            if let Some(i) = active {
                if let Some(wedge) = wedges.get(i) {
                    let outer = RING_OUTER_RADIUS * RING_ACTIVE_SCALE;
                    let coords = wedge_points(
                        area,
                        wedge,
                        RING_INNER_RADIUS,
                        outer,
                        (SHADOW_OFFSET, -SHADOW_OFFSET),
                    );
                    ctx.draw(&Points {
                        coords: &coords,
                        color: shadow,
                    });
                }
            }
            for (i, wedge) in wedges.iter().enumerate() {
                let outer = if active == Some(i) {
                    RING_OUTER_RADIUS * RING_ACTIVE_SCALE
                } else {
                    RING_OUTER_RADIUS
                };
                let coords = wedge_points(area, wedge, RING_INNER_RADIUS, outer, (0.0, 0.0));
                ctx.draw(&Points {
                    coords: &coords,
                    color: segment_fill(i),
                });
                if active == Some(i) {
                    let coords =
                        wedge_points(area, wedge, outer - OUTLINE_WIDTH, outer, (0.0, 0.0));
                    ctx.draw(&Points {
                        coords: &coords,
                        color: outline,
                    });
                }
            }
        });
    frame.render_widget(canvas, area);

    let mid = area.y + area.height / 2;
    if area.height >= 2 && mid > area.y {
        let label = Rect {
            y: mid.saturating_sub(1),
            height: 2,
            ..area
        };
        let text = vec![
            Line::from(Span::styled(
                REVENUE_CENTER_TOTAL,
                palette.text_style().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("Total Revenue", palette.muted_style())),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), label);
    }
}

/// Legend rows, indexed like `segments`. Independent of hover state.
#[must_use]
pub fn legend_lines<'a>(segments: &'a [RevenueSegment], palette: &Palette) -> Vec<Line<'a>> {
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            Line::from(vec![
                Span::styled(" ● ", Style::default().fg(segment_fill(i))),
                Span::styled(segment.name, palette.text_style()),
                Span::raw("  "),
                Span::styled(segment.amount, palette.muted_style()),
                Span::raw("  "),
                Span::styled("↗ ", palette.success_style()),
                Span::styled(segment.growth, palette.success_style()),
            ])
        })
        .collect()
}

fn render_legend(frame: &mut Frame, area: Rect, segments: &[RevenueSegment], palette: &Palette) {
    frame.render_widget(Paragraph::new(legend_lines(segments, palette)), area);
}

/// Text of the tooltip for the active segment.
#[must_use]
pub fn tooltip_line<'a>(segment: &'a RevenueSegment, palette: &Palette) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!(" {} ", segment.name),
            palette.text_style().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("Revenue: {} ", segment.amount), palette.muted_style()),
        Span::styled(format!("Growth: {}", segment.growth), palette.success_style()),
    ])
}

fn render_tooltip(frame: &mut Frame, legend: Rect, segment: &RevenueSegment, palette: &Palette) {
    let Some(row) = legend.height.checked_sub(1) else {
        return;
    };
    let area = Rect {
        y: legend.y + row,
        height: 1,
        ..legend
    };
    let line = tooltip_line(segment, palette).style(Style::default().bg(palette.highlight));
    frame.render_widget(Paragraph::new(line), area);
}

/// Fill colour of a segment, for callers outside the canvas.
#[must_use]
pub fn segment_fill(index: usize) -> Color {
    rgb(segment_color(index))
}
