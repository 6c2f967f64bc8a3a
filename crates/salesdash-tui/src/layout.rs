//! Responsive page layout.
//!
//! The same geometry drives rendering and pointer hit-testing, so every
//! region the model reacts to is computed here once per frame.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};

/// Terminals at least this wide keep the sidebar docked.
pub const WIDE_BREAKPOINT: u16 = 100;

/// Sidebar column width.
pub const SIDEBAR_WIDTH: u16 = 32;

const TOP_BAR_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;
const GREETING_HEIGHT: u16 = 2;
const STATS_HEIGHT: u16 = 9;
const CHARTS_MIN_HEIGHT: u16 = 12;
const PRODUCTS_HEIGHT: u16 = 14;

/// Inner area of a bordered card.
#[must_use]
pub fn card_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Regions of the sales trend card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SalesLayout {
    pub block: Rect,
    pub ranges: Rect,
    pub tiles: Rect,
    pub chart: Rect,
}

impl SalesLayout {
    #[must_use]
    pub fn compute(block: Rect) -> Self {
        let inner = card_inner(block);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // range buttons
                Constraint::Length(2), // summary tiles
                Constraint::Min(4),    // chart
            ])
            .split(inner);
        Self {
            block,
            ranges: rows[0],
            tiles: rows[1],
            chart: rows[2],
        }
    }
}

/// Regions of the revenue breakdown card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevenueLayout {
    pub block: Rect,
    pub ring: Rect,
    pub legend: Rect,
}

impl RevenueLayout {
    /// Legend rows: one per segment plus the tooltip line.
    pub const LEGEND_HEIGHT: u16 = 4;

    #[must_use]
    pub fn compute(block: Rect) -> Self {
        let inner = card_inner(block);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(4),
                Constraint::Length(Self::LEGEND_HEIGHT),
            ])
            .split(inner);
        Self {
            block,
            ring: rows[0],
            legend: rows[1],
        }
    }
}

/// Regions of the product table card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProductsLayout {
    pub block: Rect,
    pub filters: Rect,
    pub table: Rect,
}

impl ProductsLayout {
    #[must_use]
    pub fn compute(block: Rect) -> Self {
        let inner = card_inner(block);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(2)])
            .split(inner);
        Self {
            block,
            filters: rows[0],
            table: rows[1],
        }
    }
}

/// Full page layout for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardLayout {
    pub top_bar: Rect,
    /// Sidebar area when it is visible.
    pub sidebar: Option<Rect>,
    /// Whether the sidebar is drawn on top of the content.
    pub sidebar_overlay: bool,
    pub greeting: Rect,
    pub stats: [Rect; 4],
    pub sales: SalesLayout,
    pub revenue: RevenueLayout,
    pub products: ProductsLayout,
    pub footer: Rect,
}

impl DashboardLayout {
    /// Whether the sidebar is docked at this width.
    #[must_use]
    pub fn is_wide(area: Rect) -> bool {
        area.width >= WIDE_BREAKPOINT
    }

    /// Compute the layout. `sidebar_open` only matters on narrow terminals.
    #[must_use]
    pub fn compute(area: Rect, sidebar_open: bool) -> Self {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TOP_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);
        let body = outer[1];

        let wide = Self::is_wide(area);
        let (sidebar, sidebar_overlay, content) = if wide {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .split(body);
            (Some(cols[0]), false, cols[1])
        } else if sidebar_open {
            let overlay = Rect {
                width: SIDEBAR_WIDTH.min(body.width),
                ..body
            };
            (Some(overlay), true, body)
        } else {
            (None, false, body)
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(GREETING_HEIGHT),
                Constraint::Length(STATS_HEIGHT),
                Constraint::Min(CHARTS_MIN_HEIGHT),
                Constraint::Length(PRODUCTS_HEIGHT),
            ])
            .split(content);

        let stat_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(rows[1]);

        let chart_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
            .split(rows[2]);

        Self {
            top_bar: outer[0],
            sidebar,
            sidebar_overlay,
            greeting: rows[0],
            stats: [stat_cols[0], stat_cols[1], stat_cols[2], stat_cols[3]],
            sales: SalesLayout::compute(chart_cols[0]),
            revenue: RevenueLayout::compute(chart_cols[1]),
            products: ProductsLayout::compute(rows[3]),
            footer: outer[2],
        }
    }
}

/// Whether a cell lies inside `area`.
#[must_use]
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
