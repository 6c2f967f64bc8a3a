//! Top products table with filter buttons and sortable headers.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;
use salesdash_core::{Product, ProductFilter, ProductTableState, SortKey};

use crate::buttons::{button_at, button_line};
use crate::layout::{contains, ProductsLayout};
use crate::styles::Palette;

const FILTER_PREFIX: &str = "Filter: ";
const COLUMN_SPACING: u16 = 1;

/// Column headers and the sort key each one selects.
pub const PRODUCT_COLUMNS: [(&str, Option<SortKey>); 5] = [
    ("Product", Some(SortKey::Name)),
    ("Category", None),
    ("Sales", Some(SortKey::Sales)),
    ("Growth", Some(SortKey::Growth)),
    ("Status", None),
];

const WIDTHS: [Constraint; 5] = [
    Constraint::Min(20),
    Constraint::Length(12),
    Constraint::Length(9),
    Constraint::Length(10),
    Constraint::Length(13),
];

fn filter_names() -> [&'static str; 4] {
    ProductFilter::ALL.map(ProductFilter::name)
}

/// Column rectangles of the table, as the table widget lays them out.
#[must_use]
pub fn column_areas(table: Rect) -> Vec<Rect> {
    Layout::horizontal(WIDTHS)
        .flex(Flex::Legacy)
        .spacing(COLUMN_SPACING)
        .split(table)
        .to_vec()
}

/// Filter button under the pointer.
#[must_use]
pub fn filter_at(area: Rect, column: u16, row: u16) -> Option<ProductFilter> {
    if !contains(area, column, row) {
        return None;
    }
    button_at(FILTER_PREFIX, &filter_names(), column - area.x).map(|i| ProductFilter::ALL[i])
}

/// Sort key of the header cell under the pointer.
#[must_use]
pub fn header_sort_at(table: Rect, column: u16, row: u16) -> Option<SortKey> {
    if row != table.y || !contains(table, column, row) {
        return None;
    }
    column_areas(table)
        .iter()
        .zip(PRODUCT_COLUMNS)
        .find(|(area, _)| column >= area.x && column < area.x + area.width)
        .and_then(|(_, (_, key))| key)
}

/// Header caption, with an arrow on the active sort column.
#[must_use]
pub fn header_caption(title: &str, key: Option<SortKey>, active: SortKey) -> String {
    match key {
        Some(k) if k == active => {
            let arrow = if k.is_descending() { "▼" } else { "▲" };
            format!("{title} {arrow}")
        }
        _ => title.to_string(),
    }
}

fn product_row<'a>(product: &'a Product, palette: &Palette) -> Row<'a> {
    let name = Text::from(vec![
        Line::from(vec![
            Span::raw(product.icon),
            Span::raw(" "),
            Span::styled(product.name, palette.text_style().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(product.description, palette.muted_style())),
    ]);
    let growing = product.is_growing();
    let arrow = if growing { "▲ " } else { "▼ " };
    Row::new(vec![
        Cell::from(name),
        Cell::from(Span::styled(product.category, palette.muted_style())),
        Cell::from(Span::styled(
            product.sales,
            palette.text_style().add_modifier(Modifier::BOLD),
        )),
        Cell::from(Line::from(vec![
            Span::styled(arrow, palette.change_style(growing)),
            Span::styled(product.growth, palette.change_style(growing)),
        ])),
        Cell::from(Span::styled(
            format!(" {} ", product.status.label()),
            palette
                .status_style(product.status)
                .bg(palette.highlight),
        )),
    ])
    .height(2)
}

/// Render the card.
pub fn render_products(
    frame: &mut Frame,
    layout: &ProductsLayout,
    products: &[Product],
    state: &ProductTableState,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .title(Span::styled(" ⊞ Top Products ", palette.header_style()))
        .style(palette.surface_style());
    frame.render_widget(block, layout.block);

    let names = filter_names();
    let selected = ProductFilter::ALL.iter().position(|f| *f == state.filter);
    let filters = button_line(FILTER_PREFIX, &names, selected, palette);
    frame.render_widget(Paragraph::new(filters), layout.filters);

    let header = Row::new(PRODUCT_COLUMNS.iter().map(|(title, key)| {
        let style = if key.is_some() && *key == Some(state.sort) {
            palette.header_style()
        } else {
            palette.muted_style().add_modifier(Modifier::BOLD)
        };
        Cell::from(Span::styled(header_caption(title, *key, state.sort), style))
    }));

    let rows: Vec<Row> = state
        .rows(products)
        .into_iter()
        .map(|p| product_row(p, palette))
        .collect();

    let table = Table::new(rows, WIDTHS)
        .header(header)
        .flex(Flex::Legacy)
        .column_spacing(COLUMN_SPACING)
        .style(Style::default().fg(palette.text));
    frame.render_widget(table, layout.table);
}
