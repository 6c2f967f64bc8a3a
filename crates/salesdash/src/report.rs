//! Plain-text dashboard snapshot for `--report`.

use std::fmt::Write as _;

use chrono::NaiveDate;
use console::style;
use salesdash_core::constants::USER_FIRST_NAME;
use salesdash_core::data::{NAVIGATION, PRODUCTS, REVENUE_SEGMENTS, SALES_SERIES, STAT_CARDS};
use salesdash_core::format::format_dollars;
use salesdash_core::{
    ProductTableState, SalesTrendState, SparkScale, ThemeMode, REVENUE_CENTER_TOTAL,
};
use salesdash_tui::header::format_long_date;
use salesdash_tui::TuiOptions;

use crate::version::full_version;

const LEVELS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One-row sparkline: each bar's height becomes one of eight levels of
/// the container, so capped bars never reach the top glyph.
#[must_use]
pub fn spark_line(trend: &[u8]) -> String {
    let scale = SparkScale::default();
    scale
        .heights(trend)
        .into_iter()
        .map(|h| {
            let level = usize::from(h) * 8 / usize::from(scale.container.max(1));
            LEVELS[level.min(8)]
        })
        .collect()
}

/// Render the report. `theme` is the stored preference the TUI would
/// start with; `color` enables ANSI styling.
#[must_use]
pub fn render_report(
    options: &TuiOptions,
    theme: ThemeMode,
    today: NaiveDate,
    color: bool,
) -> String {
    let heading = |text: &str| style(text.to_string()).bold().cyan().force_styling(color);
    let muted = |text: String| style(text).dim().force_styling(color);
    let mut out = String::new();

    let _ = writeln!(out, "{}", heading("=== Dashboard Overview ==="));
    let _ = writeln!(out, "Good morning, {USER_FIRST_NAME}");
    let _ = writeln!(out, "{}", muted(format_long_date(today)));
    let theme = if theme.is_dark() { "dark" } else { "light" };
    let _ = writeln!(out, "{}", muted(format!("Theme: {theme}")));
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", heading("Navigation"));
    for section in &NAVIGATION {
        let marker = if section.current { " (current)" } else { "" };
        let _ = writeln!(
            out,
            "  {} {}{marker}  {}",
            section.icon.glyph(),
            section.name,
            muted(format!("{} items", section.children.len())),
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", heading("Key Metrics"));
    for card in &STAT_CARDS {
        let change = format!("{} {}", card.direction.indicator(), card.change);
        let change = if card.direction.is_positive() {
            style(change).green()
        } else {
            style(change).red()
        };
        let _ = writeln!(
            out,
            "  {:<18} {:>8}  {:<10}  {}",
            card.name,
            card.value,
            change.force_styling(color),
            spark_line(&card.trend),
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{}",
        heading(&format!("Revenue by Segment (total {REVENUE_CENTER_TOTAL})"))
    );
    for segment in &REVENUE_SEGMENTS {
        let _ = writeln!(
            out,
            "  {:<16} {:>3}%  {:>7}  {}",
            segment.name,
            segment.value,
            segment.amount,
            style(format!("↗ {}", segment.growth)).green().force_styling(color),
        );
    }
    let _ = writeln!(out);

    let sales = SalesTrendState::new(options.range);
    let _ = writeln!(
        out,
        "{}",
        heading(&format!("Sales Performance ({})", options.range.label()))
    );
    if let Some(summary) = sales.summary(&SALES_SERIES) {
        let _ = writeln!(
            out,
            "  Total Sales {}   Target {}   Profit {}",
            format_dollars(summary.sales),
            format_dollars(summary.target),
            format_dollars(summary.profit),
        );
    }
    for period in sales.filtered(&SALES_SERIES) {
        let _ = writeln!(
            out,
            "  {}  sales {:>7}  target {:>7}",
            period.month,
            format_dollars(period.sales),
            format_dollars(period.target),
        );
    }
    let _ = writeln!(out);

    let table = ProductTableState::new(options.filter, options.sort);
    let _ = writeln!(
        out,
        "{}",
        heading(&format!(
            "Top Products (filter: {}, sort: {})",
            options.filter, options.sort
        ))
    );
    let rows = table.rows(&PRODUCTS);
    if rows.is_empty() {
        let _ = writeln!(out, "  {}", muted("no products".to_string()));
    }
    for product in rows {
        let growth = format!(
            "{} {}",
            if product.is_growing() { "▲" } else { "▼" },
            product.growth
        );
        let growth = if product.is_growing() {
            style(growth).green()
        } else {
            style(growth).red()
        };
        let _ = writeln!(
            out,
            "  {:<20} {:<12} {:>6}  {:<8}  {}",
            product.name,
            product.category,
            product.sales,
            growth.force_styling(color),
            product.status.label(),
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", muted(full_version()));
    out
}
